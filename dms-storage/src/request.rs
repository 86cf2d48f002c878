//! Ticket request
//!
//! The six operator-supplied fields of one storage ticket. Nothing is
//! validated: empty strings print as empty values.

use serde::{Deserialize, Serialize};

/// Labels of the field block, in print order
pub const FIELD_LABELS: [&str; 5] = ["Name", "Email", "Type", "Desc", "Start"];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketRequest {
    pub expiration_date: String,
    pub name: String,
    pub email: String,
    pub item_type: String,
    pub description: String,
    pub print_time: String,
}

impl TicketRequest {
    /// Values of the field block, paired with `FIELD_LABELS`
    pub fn field_values(&self) -> [&str; 5] {
        [
            &self.name,
            &self.email,
            &self.item_type,
            &self.description,
            &self.print_time,
        ]
    }

    /// QR payload: `name;email;type;start`
    ///
    /// Scanners at the storage desk split on `;` in this order.
    pub fn qr_payload(&self) -> String {
        format!(
            "{};{};{};{}",
            self.name, self.email, self.item_type, self.print_time
        )
    }
}
