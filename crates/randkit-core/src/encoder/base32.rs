//! RFC 4648 base32 (`A-Z2-7`).
//!
//! Output is unpadded unless built with [`Base32Encoder::padded`]: every
//! 5 bits of input becomes one character, `ceil(n * 8 / 5)` in total.

use super::{Decoder, Encoder};
use crate::error::{Error, Result};

const ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

#[derive(Debug, Default, Clone, Copy)]
pub struct Base32Encoder {
    pad: bool,
}

impl Base32Encoder {
    pub fn new() -> Self {
        Self { pad: false }
    }

    /// Pad output with `=` to a multiple of 8 characters.
    pub fn padded() -> Self {
        Self { pad: true }
    }
}

impl Encoder for Base32Encoder {
    fn name(&self) -> &'static str {
        "base32"
    }

    fn encode(&self, bytes: &[u8]) -> String {
        let mut out = String::with_capacity((bytes.len() * 8).div_ceil(5).next_multiple_of(8));
        let mut buffer: u32 = 0;
        let mut bits = 0u32;

        for &b in bytes {
            buffer = (buffer << 8) | b as u32;
            bits += 8;
            while bits >= 5 {
                bits -= 5;
                out.push(ALPHABET[((buffer >> bits) & 0x1f) as usize] as char);
            }
            buffer &= (1 << bits) - 1;
        }
        if bits > 0 {
            out.push(ALPHABET[((buffer << (5 - bits)) & 0x1f) as usize] as char);
        }

        if self.pad {
            while out.len() % 8 != 0 {
                out.push('=');
            }
        }
        out
    }
}

impl Decoder for Base32Encoder {
    /// Accepts padded or unpadded input, either letter case.
    fn decode(&self, text: &str) -> Result<Vec<u8>> {
        let body = text.trim_end_matches('=');
        // 1, 3 or 6 trailing characters cannot come from whole bytes.
        if matches!(body.len() % 8, 1 | 3 | 6) {
            return Err(Error::invalid(format!(
                "bad base32: {} characters is not a valid length",
                body.len()
            )));
        }

        let mut out = Vec::with_capacity(body.len() * 5 / 8);
        let mut buffer: u32 = 0;
        let mut bits = 0u32;

        for c in body.bytes() {
            let value = match c {
                b'A'..=b'Z' => c - b'A',
                b'a'..=b'z' => c - b'a',
                b'2'..=b'7' => c - b'2' + 26,
                _ => {
                    return Err(Error::invalid(format!(
                        "bad base32: unexpected character {:?}",
                        c as char
                    )));
                }
            };
            buffer = (buffer << 5) | value as u32;
            bits += 5;
            if bits >= 8 {
                bits -= 8;
                out.push((buffer >> bits) as u8);
                buffer &= (1 << bits) - 1;
            }
        }
        Ok(out)
    }
}
