//! # dms-printer
//!
//! ESC/POS thermal printer library - low-level printing capabilities only.
//!
//! ## Scope
//!
//! This crate handles HOW to print:
//! - ESC/POS command building
//! - Windows-1252 text encoding for Western printers
//! - Directive-level printer sessions (`PrinterDriver`)
//! - USB bulk transport for the storage desk printer
//!
//! Business logic (WHAT to print) stays in application code:
//! - Storage ticket and receipt layout → dms-storage
//!
//! ## Example
//!
//! ```ignore
//! use dms_printer::{Align, EscPosDriver, PrinterDriver, Style, UsbPrinter, UsbTarget};
//!
//! let usb = UsbPrinter::open(UsbTarget::default())?;
//! let mut driver = EscPosDriver::open(usb)?;
//! driver.set_style(&Style::new(Align::Center).bold().scale(2, 2))?;
//! driver.text("DMS Storage Ticket\n")?;
//! driver.cut()?;
//! ```

mod driver;
mod encoding;
mod error;
mod escpos;
mod usb;

// Re-exports
pub use driver::{EscPosDriver, PrinterDriver, Transport};
pub use encoding::{CODE_PAGE_WPC1252, encode_text};
pub use error::{PrintError, PrintResult};
pub use escpos::{Align, EscPosBuilder, QrErrorCorrection, QrModel, QrOptions, Style};
pub use usb::{EPSON_VENDOR_ID, TM_T20_PRODUCT_ID, UsbPrinter, UsbTarget};
