//! Printer sessions at the directive level
//!
//! A `PrinterDriver` is one exclusively owned connection to a printer.
//! Directives are applied in call order and each call blocks until the
//! bytes have been handed to the transport.

use crate::error::PrintResult;
use crate::escpos::{EscPosBuilder, QrOptions, Style};
use tracing::{debug, instrument};

/// Lines fed before the cutter engages, so the last printed line clears the blade
const CUT_FEED_LINES: u8 = 6;

/// Byte sink for encoded ESC/POS data
pub trait Transport {
    fn send(&mut self, data: &[u8]) -> PrintResult<()>;
}

/// In-memory capture of everything sent
impl Transport for Vec<u8> {
    fn send(&mut self, data: &[u8]) -> PrintResult<()> {
        self.extend_from_slice(data);
        Ok(())
    }
}

/// Directive-level printer session
pub trait PrinterDriver {
    /// Set alignment, emphasis and character size
    fn set_style(&mut self, style: &Style) -> PrintResult<()>;

    /// Emit literal text (may contain `\n` and `\t`)
    fn text(&mut self, text: &str) -> PrintResult<()>;

    /// Print a QR code carrying `payload`
    fn qr(&mut self, payload: &str, options: &QrOptions) -> PrintResult<()>;

    /// Feed and cut the paper
    fn cut(&mut self) -> PrintResult<()>;
}

impl<D: PrinterDriver + ?Sized> PrinterDriver for &mut D {
    fn set_style(&mut self, style: &Style) -> PrintResult<()> {
        (**self).set_style(style)
    }

    fn text(&mut self, text: &str) -> PrintResult<()> {
        (**self).text(text)
    }

    fn qr(&mut self, payload: &str, options: &QrOptions) -> PrintResult<()> {
        (**self).qr(payload, options)
    }

    fn cut(&mut self) -> PrintResult<()> {
        (**self).cut()
    }
}

impl<D: PrinterDriver + ?Sized> PrinterDriver for Box<D> {
    fn set_style(&mut self, style: &Style) -> PrintResult<()> {
        (**self).set_style(style)
    }

    fn text(&mut self, text: &str) -> PrintResult<()> {
        (**self).text(text)
    }

    fn qr(&mut self, payload: &str, options: &QrOptions) -> PrintResult<()> {
        (**self).qr(payload, options)
    }

    fn cut(&mut self) -> PrintResult<()> {
        (**self).cut()
    }
}

/// ESC/POS implementation of `PrinterDriver`
///
/// Encodes every directive on its own and sends it straight away.
pub struct EscPosDriver<T: Transport> {
    transport: T,
    builder: EscPosBuilder,
}

impl<T: Transport> EscPosDriver<T> {
    /// Start a session: resets the printer and selects the code page
    pub fn open(transport: T) -> PrintResult<Self> {
        let mut driver = Self {
            transport,
            builder: EscPosBuilder::new(),
        };
        driver.builder.init();
        driver.flush()?;
        Ok(driver)
    }

    /// End the session and hand back the transport
    pub fn into_inner(self) -> T {
        self.transport
    }

    fn flush(&mut self) -> PrintResult<()> {
        let data = self.builder.take();
        self.transport.send(&data)
    }
}

impl<T: Transport> PrinterDriver for EscPosDriver<T> {
    fn set_style(&mut self, style: &Style) -> PrintResult<()> {
        self.builder.style(style);
        self.flush()
    }

    fn text(&mut self, text: &str) -> PrintResult<()> {
        self.builder.text(text);
        self.flush()
    }

    #[instrument(skip(self, payload, options), fields(payload_len = payload.len()))]
    fn qr(&mut self, payload: &str, options: &QrOptions) -> PrintResult<()> {
        self.builder.qr_code(payload, options);
        self.flush()
    }

    fn cut(&mut self) -> PrintResult<()> {
        debug!("Cutting paper");
        self.builder.cut_feed(CUT_FEED_LINES);
        self.flush()
    }
}
