use super::{Decoder, Encoder};
use crate::error::{Error, Result};

/// Identity encoding: byte `b` becomes the character U+00bb.
///
/// ASCII passes through unchanged; other bytes map onto Latin-1, so the
/// result is always valid UTF-8 and decodes back exactly.
#[derive(Debug, Default, Clone, Copy)]
pub struct RawEncoder;

impl Encoder for RawEncoder {
    fn name(&self) -> &'static str {
        "raw"
    }

    fn encode(&self, bytes: &[u8]) -> String {
        bytes.iter().map(|&b| char::from(b)).collect()
    }
}

impl Decoder for RawEncoder {
    fn decode(&self, text: &str) -> Result<Vec<u8>> {
        text.chars()
            .map(|c| {
                u8::try_from(c)
                    .map_err(|_| Error::invalid(format!("character {c:?} is outside U+0000..U+00FF")))
            })
            .collect()
    }
}
