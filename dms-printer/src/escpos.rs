//! ESC/POS command builder
//!
//! Provides a fluent API for building ESC/POS print data.

use crate::encoding::{CODE_PAGE_WPC1252, encode_text};
use tracing::warn;

/// Largest payload GS ( k function 180 can carry (pL/pH minus cn, fn, m)
const QR_MAX_DATA: usize = 0xFFFF - 3;

/// Horizontal text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// Complete print style
///
/// Applying a style always sets every attribute, so anything not chosen
/// explicitly goes back to the default (left, normal weight, 1×1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub align: Align,
    pub bold: bool,
    /// Character width multiplier (1-8)
    pub width: u8,
    /// Character height multiplier (1-8)
    pub height: u8,
}

impl Style {
    pub const fn new(align: Align) -> Self {
        Self {
            align,
            bold: false,
            width: 1,
            height: 1,
        }
    }

    pub const fn left() -> Self {
        Self::new(Align::Left)
    }

    pub const fn center() -> Self {
        Self::new(Align::Center)
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn scale(mut self, width: u8, height: u8) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::left()
    }
}

/// QR symbol model (GS ( k function 165)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QrModel {
    Model1,
    Model2,
    Micro,
}

impl QrModel {
    fn code(self) -> u8 {
        match self {
            QrModel::Model1 => 0x31,
            QrModel::Model2 => 0x32,
            QrModel::Micro => 0x33,
        }
    }
}

/// QR error correction level (GS ( k function 169)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QrErrorCorrection {
    L,
    M,
    Q,
    H,
}

impl QrErrorCorrection {
    fn code(self) -> u8 {
        match self {
            QrErrorCorrection::L => 0x30,
            QrErrorCorrection::M => 0x31,
            QrErrorCorrection::Q => 0x32,
            QrErrorCorrection::H => 0x33,
        }
    }
}

/// Native QR code parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QrOptions {
    pub model: QrModel,
    /// Module size in dots (1-16)
    pub module_size: u8,
    pub error_correction: QrErrorCorrection,
}

impl Default for QrOptions {
    fn default() -> Self {
        Self {
            model: QrModel::Model2,
            module_size: 3,
            error_correction: QrErrorCorrection::L,
        }
    }
}

/// ESC/POS command builder
///
/// Builds ESC/POS byte sequences for thermal printers.
/// Text is encoded to WPC1252 as it is written.
#[derive(Debug, Default)]
pub struct EscPosBuilder {
    buf: Vec<u8>,
}

impl EscPosBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(256),
        }
    }

    // === Session ===

    /// Initialize printer (ESC @) and select the WPC1252 code page (ESC t 16)
    pub fn init(&mut self) -> &mut Self {
        self.buf.extend_from_slice(&[0x1B, 0x40]);
        self.buf.extend_from_slice(&[0x1B, 0x74, CODE_PAGE_WPC1252]);
        self
    }

    // === Text Output ===

    /// Write text, newlines and tabs included
    pub fn text(&mut self, s: &str) -> &mut Self {
        self.buf.extend_from_slice(&encode_text(s));
        self
    }

    // === Alignment ===

    pub fn align(&mut self, align: Align) -> &mut Self {
        let n = match align {
            Align::Left => 0x00,
            Align::Center => 0x01,
            Align::Right => 0x02,
        };
        self.buf.extend_from_slice(&[0x1B, 0x61, n]);
        self
    }

    // === Text Style ===

    /// Enable bold text
    pub fn bold(&mut self) -> &mut Self {
        self.buf.extend_from_slice(&[0x1B, 0x45, 0x01]);
        self
    }

    /// Disable bold text
    pub fn bold_off(&mut self) -> &mut Self {
        self.buf.extend_from_slice(&[0x1B, 0x45, 0x00]);
        self
    }

    /// Character size multipliers (GS ! n), each clamped to 1-8
    pub fn size(&mut self, width: u8, height: u8) -> &mut Self {
        let w = width.clamp(1, 8) - 1;
        let h = height.clamp(1, 8) - 1;
        self.buf.extend_from_slice(&[0x1D, 0x21, (w << 4) | h]);
        self
    }

    /// Apply a complete style: alignment, emphasis and size
    pub fn style(&mut self, style: &Style) -> &mut Self {
        self.align(style.align);
        if style.bold {
            self.bold();
        } else {
            self.bold_off();
        }
        self.size(style.width, style.height)
    }

    // === Paper Control ===

    /// Feed n lines, then full cut.
    /// Uses GS V 66 n, which lets the printer manage cutter-to-head distance.
    pub fn cut_feed(&mut self, lines: u8) -> &mut Self {
        self.buf.extend_from_slice(&[0x1D, 0x56, 0x42, lines]);
        self
    }

    // === QR Code ===

    /// Print a QR code with the printer's native generator
    ///
    /// Payloads too long for the store command are skipped.
    pub fn qr_code(&mut self, data: &str, options: &QrOptions) -> &mut Self {
        let data_bytes = encode_text(data);
        if data_bytes.len() > QR_MAX_DATA {
            warn!(len = data_bytes.len(), max = QR_MAX_DATA, "QR payload too long, skipped");
            return self;
        }

        let size = options.module_size.clamp(1, 16);

        // Function 165: Select model
        self.buf.extend_from_slice(&[
            0x1D,
            0x28,
            0x6B,
            0x04,
            0x00,
            0x31,
            0x41,
            options.model.code(),
            0x00,
        ]);

        // Function 167: Set module size
        self.buf
            .extend_from_slice(&[0x1D, 0x28, 0x6B, 0x03, 0x00, 0x31, 0x43, size]);

        // Function 169: Set error correction
        self.buf.extend_from_slice(&[
            0x1D,
            0x28,
            0x6B,
            0x03,
            0x00,
            0x31,
            0x45,
            options.error_correction.code(),
        ]);

        // Function 180: Store data
        let len = data_bytes.len() + 3;
        let p_l = (len & 0xFF) as u8;
        let p_h = ((len >> 8) & 0xFF) as u8;
        self.buf
            .extend_from_slice(&[0x1D, 0x28, 0x6B, p_l, p_h, 0x31, 0x50, 0x30]);
        self.buf.extend_from_slice(&data_bytes);

        // Function 181: Print
        self.buf
            .extend_from_slice(&[0x1D, 0x28, 0x6B, 0x03, 0x00, 0x31, 0x51, 0x30]);

        self
    }

    // === Build ===

    /// Take the built bytes, leaving the builder empty for reuse
    pub fn take(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_selects_code_page() {
        let mut b = EscPosBuilder::new();
        b.init();
        assert_eq!(b.take(), vec![0x1B, 0x40, 0x1B, 0x74, 16]);
    }

    #[test]
    fn test_style_sets_full_state() {
        let mut b = EscPosBuilder::new();
        b.style(&Style::center().bold().scale(4, 4));
        assert_eq!(
            b.take(),
            vec![0x1B, 0x61, 0x01, 0x1B, 0x45, 0x01, 0x1D, 0x21, 0x33]
        );

        let mut b = EscPosBuilder::new();
        b.style(&Style::left());
        assert_eq!(
            b.take(),
            vec![0x1B, 0x61, 0x00, 0x1B, 0x45, 0x00, 0x1D, 0x21, 0x00]
        );
    }

    #[test]
    fn test_size_clamped() {
        let mut b = EscPosBuilder::new();
        b.size(0, 12);
        assert_eq!(b.take(), vec![0x1D, 0x21, 0x07]);
    }

    #[test]
    fn test_qr_code_layout() {
        let options = QrOptions {
            model: QrModel::Model2,
            module_size: 6,
            error_correction: QrErrorCorrection::M,
        };
        let mut b = EscPosBuilder::new();
        b.qr_code("a;b", &options);
        let data = b.take();

        assert_eq!(&data[..9], &[0x1D, 0x28, 0x6B, 0x04, 0x00, 0x31, 0x41, 0x32, 0x00]);
        assert_eq!(&data[9..17], &[0x1D, 0x28, 0x6B, 0x03, 0x00, 0x31, 0x43, 6]);
        assert_eq!(&data[17..25], &[0x1D, 0x28, 0x6B, 0x03, 0x00, 0x31, 0x45, 0x31]);
        // Store: pL = 3 data bytes + 3
        assert_eq!(&data[25..33], &[0x1D, 0x28, 0x6B, 6, 0, 0x31, 0x50, 0x30]);
        assert_eq!(&data[33..36], b"a;b");
        assert_eq!(&data[36..], &[0x1D, 0x28, 0x6B, 0x03, 0x00, 0x31, 0x51, 0x30]);
    }

    #[test]
    fn test_take_resets_buffer() {
        let mut b = EscPosBuilder::new();
        b.text("hi\n");
        assert_eq!(b.take(), b"hi\n".to_vec());
        assert!(b.take().is_empty());
    }

    #[test]
    fn test_qr_code_oversized_payload_skipped() {
        let mut b = EscPosBuilder::new();
        b.qr_code(&"x".repeat(QR_MAX_DATA + 1), &QrOptions::default());
        assert!(b.take().is_empty());
    }

    #[test]
    fn test_qr_code_largest_payload_length_bytes() {
        let mut b = EscPosBuilder::new();
        b.qr_code(&"x".repeat(QR_MAX_DATA), &QrOptions::default());
        let data = b.take();
        // Store header follows the three 8/9-byte setup commands
        assert_eq!(&data[25..33], &[0x1D, 0x28, 0x6B, 0xFF, 0xFF, 0x31, 0x50, 0x30]);
    }
}
