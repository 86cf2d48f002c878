//! # dms-storage
//!
//! Storage tickets for the DMS storage desk.
//!
//! A ticket is two slips printed on one roll: the ticket that stays on the
//! stored item (with a QR code for lookup) and a receipt the member keeps.
//! Printing itself is delegated to `dms-printer`.
//!
//! - `print-ticket`: print from six command-line fields
//! - `ticket-server`: request page that stamps dates and prints on submit

pub mod cli;
pub mod config;
pub mod error;
pub mod expiry;
pub mod formatter;
pub mod layout;
pub mod logger;
pub mod request;
pub mod service;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use expiry::StampedTimes;
pub use formatter::TicketFormatter;
pub use layout::{Directive, TICKET_QR, field_block, layout, receipt_section, ticket_section};
pub use request::TicketRequest;
pub use service::{AppState, Connector, TicketForm, TicketSubmission, UsbConnector, router};
