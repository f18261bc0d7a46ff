//! ESC/POS command builder
//!
//! Provides a fluent API for building ESC/POS print data.
//!
//! Kitchen printers in the shop run Star line-mode firmware while the receipt
//! printer speaks plain Epson ESC/POS. The two agree on most commands but
//! differ for alignment and paper cut, so the builder is parameterised by a
//! [`Dialect`].

use crate::encoding::convert_to_latin1;

/// Cash drawer pulse: ESC p m t1 t2 (pin 2, 25 x 2ms on, 120 x 2ms off)
pub const DRAWER_PULSE: [u8; 5] = [0x1B, 0x70, 0x00, 0x19, 0x78];

/// Printer firmware command set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// Epson ESC/POS (receipt printer)
    Epson,
    /// Star line mode (kitchen printers)
    Star,
}

/// ESC/POS command builder
///
/// Builds ESC/POS byte sequences for thermal printers.
/// Text is kept as UTF-8 until [`build`](Self::build) converts it to Latin-1.
pub struct EscPosBuilder {
    buf: Vec<u8>,
    dialect: Dialect,
    width: usize,
}

impl EscPosBuilder {
    /// Create a new builder with the specified paper width in characters
    ///
    /// The width only drives separators. Common values:
    /// - 80mm paper, normal font: 32 characters (as configured on the receipt printer)
    /// - 80mm paper, big font: 16 characters
    pub fn new(dialect: Dialect, width: usize) -> Self {
        let mut buf = Vec::with_capacity(1024);
        // Initialize printer (ESC @)
        buf.extend_from_slice(&[0x1B, 0x40]);
        Self {
            buf,
            dialect,
            width,
        }
    }

    // === Text Output ===

    /// Write raw text
    pub fn text(&mut self, s: &str) -> &mut Self {
        self.buf.extend_from_slice(s.as_bytes());
        self
    }

    /// Write text followed by newline
    pub fn line(&mut self, s: &str) -> &mut Self {
        self.text(s);
        self.buf.push(b'\n');
        self
    }

    /// Write empty line
    pub fn newline(&mut self) -> &mut Self {
        self.buf.push(b'\n');
        self
    }

    /// Write `n` empty lines as plain line feeds
    pub fn blank_lines(&mut self, n: usize) -> &mut Self {
        self.buf.extend(std::iter::repeat_n(b'\n', n));
        self
    }

    // === Alignment ===

    /// Align text to center
    pub fn center(&mut self) -> &mut Self {
        self.align(0x01)
    }

    /// Align text to left (default)
    pub fn left(&mut self) -> &mut Self {
        self.align(0x00)
    }

    /// Align text to right
    pub fn right(&mut self) -> &mut Self {
        self.align(0x02)
    }

    fn align(&mut self, n: u8) -> &mut Self {
        match self.dialect {
            // ESC a n
            Dialect::Epson => self.buf.extend_from_slice(&[0x1B, 0x61, n]),
            // ESC GS a n
            Dialect::Star => self.buf.extend_from_slice(&[0x1B, 0x1D, 0x61, n]),
        }
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

    /// Double height (ESC ! 0x10)
    pub fn double_height(&mut self) -> &mut Self {
        self.buf.extend_from_slice(&[0x1B, 0x21, 0x10]);
        self
    }

    /// Reset print mode to normal size
    pub fn normal_size(&mut self) -> &mut Self {
        self.buf.extend_from_slice(&[0x1B, 0x21, 0x00]);
        self
    }

    /// Expanded width and height, stays on until reset
    pub fn big_font(&mut self) -> &mut Self {
        self.buf
            .extend_from_slice(&[0x1B, 0x57, 0x01, 0x1B, 0x68, 0x01]);
        self
    }

    /// Print in the accent colour (red on two-colour paper)
    pub fn red(&mut self) -> &mut Self {
        self.buf.extend_from_slice(&[0x1B, 0x34]);
        self
    }

    /// Print in the default colour
    pub fn black(&mut self) -> &mut Self {
        self.buf.extend_from_slice(&[0x1B, 0x35]);
        self
    }

    // === Separators ===

    /// Print a line of '-' characters
    pub fn sep_single(&mut self) -> &mut Self {
        let sep = "-".repeat(self.width);
        self.line(&sep)
    }

    // === Paper Control ===

    /// Full paper cut
    pub fn cut(&mut self) -> &mut Self {
        match self.dialect {
            // GS V 66 0 - feed to cutter position, then full cut
            Dialect::Epson => self.buf.extend_from_slice(&[0x1D, 0x56, 0x42, 0x00]),
            // ESC d 2 - full cut
            Dialect::Star => self.buf.extend_from_slice(&[0x1B, 0x64, 0x02]),
        }
        self
    }

    // === Build ===

    /// Build the final byte buffer with Latin-1 encoding
    ///
    /// Converts UTF-8 text to single-byte Latin-1 while preserving ESC/POS commands.
    pub fn build(self) -> Vec<u8> {
        convert_to_latin1(&self.buf)
    }

    /// Build without conversion (for debugging or ASCII-only content)
    pub fn build_raw(self) -> Vec<u8> {
        self.buf
    }
}
