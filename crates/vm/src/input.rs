//! Lenient readers for the VM's input instructions.
//!
//! Neither reader can fail: an exhausted source, a read error or malformed
//! text all produce 0.

use std::io::{BufRead, ErrorKind};

/// Code point pushed for an undecodable byte sequence.
const REPLACEMENT: i64 = char::REPLACEMENT_CHARACTER as i64;

pub(crate) struct Input<R> {
    reader: R,
}

impl<R: BufRead> Input<R> {
    pub(crate) fn new(reader: R) -> Self {
        Self { reader }
    }

    fn peek(&mut self) -> Option<u8> {
        loop {
            match self.reader.fill_buf() {
                Ok(buf) => return buf.first().copied(),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(_) => return None,
            }
        }
    }

    fn bump(&mut self) {
        self.reader.consume(1);
    }

    /// Read a decimal integer with an optional sign.
    ///
    /// Leading whitespace is skipped. A non-digit stops the read and is
    /// left in the source. No digits, or a value outside `i64`, yields 0.
    pub(crate) fn read_number(&mut self) -> i64 {
        while self.peek().is_some_and(|b| b.is_ascii_whitespace()) {
            self.bump();
        }

        let negative = match self.peek() {
            Some(b'-') => {
                self.bump();
                true
            }
            Some(b'+') => {
                self.bump();
                false
            }
            _ => false,
        };

        let mut value: Option<i64> = Some(0);
        let mut digits = 0usize;
        while let Some(b) = self.peek().filter(u8::is_ascii_digit) {
            self.bump();
            digits += 1;
            let d = i64::from(b - b'0');
            value = value.and_then(|v| v.checked_mul(10)).and_then(|v| {
                if negative {
                    v.checked_sub(d)
                } else {
                    v.checked_add(d)
                }
            });
        }

        if digits == 0 {
            return 0;
        }
        value.unwrap_or(0)
    }

    /// Read one UTF-8 encoded character and return its code point.
    pub(crate) fn read_char(&mut self) -> i64 {
        let Some(lead) = self.peek() else {
            return 0;
        };
        self.bump();

        let width = match lead {
            0x00..=0x7F => return i64::from(lead),
            0xC2..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF4 => 4,
            _ => return REPLACEMENT,
        };

        let mut bytes = [lead, 0, 0, 0];
        for slot in bytes.iter_mut().take(width).skip(1) {
            match self.peek() {
                Some(b) if (0x80..=0xBF).contains(&b) => {
                    self.bump();
                    *slot = b;
                }
                _ => return REPLACEMENT,
            }
        }

        std::str::from_utf8(&bytes[..width])
            .ok()
            .and_then(|s| s.chars().next())
            .map_or(REPLACEMENT, |c| c as i64)
    }
}
