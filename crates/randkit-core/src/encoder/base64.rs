use ::base64::Engine as _;
use ::base64::engine::general_purpose::STANDARD;

use super::{Decoder, Encoder};
use crate::error::{Error, Result};

/// RFC 4648 base64, standard alphabet, padded.
#[derive(Debug, Default, Clone, Copy)]
pub struct Base64Encoder;

impl Encoder for Base64Encoder {
    fn name(&self) -> &'static str {
        "base64"
    }

    fn encode(&self, bytes: &[u8]) -> String {
        STANDARD.encode(bytes)
    }
}

impl Decoder for Base64Encoder {
    fn decode(&self, text: &str) -> Result<Vec<u8>> {
        STANDARD
            .decode(text)
            .map_err(|e| Error::invalid(format!("bad base64: {e}")))
    }
}
