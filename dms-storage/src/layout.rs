//! Storage ticket layout
//!
//! Pure mapping from a `TicketRequest` to the ordered directives of the
//! two printed slips. No I/O happens here.
//!
//! - Ticket: stays with the stored item, carries the QR code
//! - Receipt: goes home with the member as a reminder

use dms_printer::{QrErrorCorrection, QrModel, QrOptions, Style};

use crate::request::{FIELD_LABELS, TicketRequest};

/// QR parameters for the ticket
pub const TICKET_QR: QrOptions = QrOptions {
    model: QrModel::Model2,
    module_size: 6,
    error_correction: QrErrorCorrection::M,
};

const SIGNATURE_LINE: &str = "Signature: ____________________________________\n";

/// One printer directive
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    Style(Style),
    Text(String),
    Qr { payload: String, options: QrOptions },
    Cut,
}

impl Directive {
    fn text(s: impl Into<String>) -> Self {
        Directive::Text(s.into())
    }
}

/// Both slips: ticket, then receipt
pub fn layout(req: &TicketRequest) -> Vec<Directive> {
    let mut directives = ticket_section(req);
    directives.extend(receipt_section(req));
    directives
}

/// `"<Label>:\t<value>\n"` for Name, Email, Type, Desc, Start
pub fn field_block(req: &TicketRequest) -> Vec<String> {
    FIELD_LABELS
        .iter()
        .zip(req.field_values())
        .map(|(label, value)| format!("{}:\t{}\n", label, value))
        .collect()
}

/// The ticket slip, ending with its cut
pub fn ticket_section(req: &TicketRequest) -> Vec<Directive> {
    let mut d = Vec::with_capacity(32);

    // Expiration date, as large as the printer goes
    d.push(Directive::Style(Style::center().bold().scale(4, 4)));
    d.push(Directive::text(&req.expiration_date));
    d.push(Directive::text("\n"));

    d.push(Directive::Style(Style::center()));
    d.push(Directive::text("storage expiration date\n\n"));

    d.push(Directive::Style(Style::center().scale(2, 2)));
    d.push(Directive::text("DMS Storage Ticket\n\n"));

    d.push(Directive::Style(Style::left()));
    d.push(Directive::text("Ticket required on any items left at DMS.\n"));
    d.push(Directive::text("Place ticket in holder or on project.\n\n"));

    d.push(Directive::Style(Style::left()));
    d.extend(field_block(req).into_iter().map(Directive::Text));

    d.push(Directive::text("\n\n"));
    d.push(Directive::text(SIGNATURE_LINE));
    d.push(Directive::text(
        "By signing you agree to follow the posted rules and remove your item before the expiration date.\n",
    ));
    d.push(Directive::text(
        "Failure to remove items will result in loss of\nstorage privileges.",
    ));

    d.push(Directive::Style(Style::center()));
    d.push(Directive::text("\n"));
    d.push(Directive::Qr {
        payload: req.qr_payload(),
        options: TICKET_QR,
    });

    d.push(Directive::Cut);
    d
}

/// The receipt slip, ending with its cut
pub fn receipt_section(req: &TicketRequest) -> Vec<Directive> {
    let mut d = Vec::with_capacity(16);

    d.push(Directive::Style(Style::center().scale(2, 2)));
    d.push(Directive::text("DMS Storage Receipt\n\n"));

    d.push(Directive::Style(Style::left()));
    d.push(Directive::text("Keep this receipt as a reminder that you\n"));
    d.push(Directive::text("agreed to remove your item before:\n"));

    d.push(Directive::Style(Style::center().bold().scale(2, 2)));
    d.push(Directive::text(&req.expiration_date));
    d.push(Directive::text("\n\n"));

    d.push(Directive::Style(Style::left()));
    d.extend(field_block(req).into_iter().map(Directive::Text));

    d.push(Directive::Cut);
    d
}
