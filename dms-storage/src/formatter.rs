//! Ticket formatter
//!
//! Sends the ticket and receipt layout to a printer session, one directive
//! at a time. A driver fault stops the job where it happened; paper that
//! already left the printer cannot be taken back.

use dms_printer::{PrintResult, PrinterDriver};
use tracing::{info, instrument};

use crate::layout::{Directive, layout};
use crate::request::TicketRequest;

pub struct TicketFormatter<D: PrinterDriver> {
    driver: D,
}

impl<D: PrinterDriver> TicketFormatter<D> {
    pub fn new(driver: D) -> Self {
        Self { driver }
    }

    /// Print the ticket slip, then the receipt slip
    #[instrument(skip(self, req), fields(name = %req.name, item_type = %req.item_type))]
    pub fn print_ticket(&mut self, req: &TicketRequest) -> PrintResult<()> {
        let directives = layout(req);
        info!(directives = directives.len(), "Printing storage ticket");

        for directive in &directives {
            apply(&mut self.driver, directive)?;
        }

        info!("Storage ticket printed");
        Ok(())
    }

    pub fn into_inner(self) -> D {
        self.driver
    }
}

fn apply<D: PrinterDriver>(driver: &mut D, directive: &Directive) -> PrintResult<()> {
    match directive {
        Directive::Style(style) => driver.set_style(style),
        Directive::Text(text) => driver.text(text),
        Directive::Qr { payload, options } => driver.qr(payload, options),
        Directive::Cut => driver.cut(),
    }
}
