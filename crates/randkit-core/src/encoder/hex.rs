use super::{Decoder, Encoder};
use crate::error::{Error, Result};

/// Base16, two lowercase digits per byte.
#[derive(Debug, Default, Clone, Copy)]
pub struct HexEncoder;

impl Encoder for HexEncoder {
    fn name(&self) -> &'static str {
        "hex"
    }

    fn encode(&self, bytes: &[u8]) -> String {
        ::hex::encode(bytes)
    }
}

impl Decoder for HexEncoder {
    fn decode(&self, text: &str) -> Result<Vec<u8>> {
        ::hex::decode(text).map_err(|e| Error::invalid(format!("bad hex: {e}")))
    }
}
