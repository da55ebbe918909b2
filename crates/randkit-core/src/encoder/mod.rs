//! Encoder strategies: how random bytes are rendered as text.
//!
//! An [`Encoder`] is a pure, total function from bytes to a string. Every
//! encoder shipped here also implements [`Decoder`], so output can be turned
//! back into the original bytes.

mod base32;
mod base64;
mod hex;
mod raw;

use std::fmt;
use std::str::FromStr;

pub use base32::Base32Encoder;
pub use base64::Base64Encoder;
pub use hex::HexEncoder;
pub use raw::RawEncoder;

use crate::error::{Error, Result};

/// Maps raw bytes to printable text. Same input, same output.
pub trait Encoder: Send + Sync {
    /// Short identifier (e.g. `"hex"`).
    fn name(&self) -> &'static str;

    fn encode(&self, bytes: &[u8]) -> String;
}

/// Inverse of an [`Encoder`].
pub trait Decoder {
    /// Fails with [`Error::InvalidArgument`] on text the encoder could not
    /// have produced.
    fn decode(&self, text: &str) -> Result<Vec<u8>>;
}

/// The encoder strategies shipped with this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EncoderKind {
    Raw,
    #[default]
    Hex,
    Base32,
    Base64,
}

impl EncoderKind {
    pub const ALL: [EncoderKind; 4] = [Self::Raw, Self::Hex, Self::Base32, Self::Base64];

    pub fn create(self) -> Box<dyn Encoder> {
        match self {
            Self::Raw => Box::new(RawEncoder),
            Self::Hex => Box::new(HexEncoder),
            Self::Base32 => Box::new(Base32Encoder::new()),
            Self::Base64 => Box::new(Base64Encoder),
        }
    }
}

impl fmt::Display for EncoderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Raw => write!(f, "raw"),
            Self::Hex => write!(f, "hex"),
            Self::Base32 => write!(f, "base32"),
            Self::Base64 => write!(f, "base64"),
        }
    }
}

impl FromStr for EncoderKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "raw" => Ok(Self::Raw),
            "hex" => Ok(Self::Hex),
            "base32" => Ok(Self::Base32),
            "base64" => Ok(Self::Base64),
            other => Err(Error::invalid(format!("unknown encoder '{other}'"))),
        }
    }
}
