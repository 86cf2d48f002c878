//! Error types for the printer library

use thiserror::Error;

/// Printer error types
#[derive(Debug, Error)]
pub enum PrintError {
    /// No USB device matches the vendor/product pair
    #[error("Printer not found: {vendor_id:04x}:{product_id:04x}")]
    DeviceNotFound { vendor_id: u16, product_id: u16 },

    /// The claimed interface exposes no bulk OUT endpoint
    #[error("No bulk OUT endpoint on interface {0}")]
    EndpointNotFound(u8),

    /// libusb reported a transport error
    #[error("USB error: {0}")]
    Usb(#[from] rusb::Error),

    /// IO error during printing
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for printer operations
pub type PrintResult<T> = Result<T, PrintError>;
