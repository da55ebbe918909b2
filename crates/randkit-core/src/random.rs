//! The [`Random`] facade: one generator, one encoder, three derived outputs.
//!
//! Architecture:
//! 1. Generator produces raw bytes
//! 2. Bytes go through the encoder (`get_random_bytes`), are mapped onto a
//!    charset (`get_random_string`), or are range-reduced with rejection
//!    sampling (`get_random_integer`)
//!
//! Both strategies are fixed at construction; the facade keeps no other state.

use crate::encoder::{Encoder, EncoderKind};
use crate::error::{Error, Result};
use crate::generator::{Generator, GeneratorKind};

/// Default charset for [`Random::get_random_string`]: the 64 characters of
/// the standard base64 alphabet. 64 divides 256, so `byte % 64` is unbiased.
pub const DEFAULT_CHARSET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Upper bound on redraws in [`Random::get_random_integer`].
///
/// Every draw is accepted with probability at least 1/2, so a working source
/// hits this with probability at most 2^-128. Reaching it means the generator
/// keeps replaying the same rejected bytes.
pub const MAX_REJECTIONS: usize = 128;

/// Random bytes, strings and integers over pluggable strategies.
pub struct Random {
    generator: Box<dyn Generator>,
    encoder: Box<dyn Encoder>,
}

impl Random {
    /// Compose an explicit generator and encoder.
    pub fn new(generator: Box<dyn Generator>, encoder: Box<dyn Encoder>) -> Self {
        Self { generator, encoder }
    }

    /// Use `generator` with the default encoder (hex).
    pub fn with_generator(generator: Box<dyn Generator>) -> Self {
        Self::new(generator, EncoderKind::default().create())
    }

    /// Use `encoder` with the best supported secure generator on this machine.
    pub fn with_encoder(encoder: Box<dyn Encoder>) -> Self {
        Self::new(GeneratorKind::detect().create(), encoder)
    }

    /// Pick the best supported secure generator on this machine and the
    /// default encoder.
    pub fn auto() -> Self {
        let kind = GeneratorKind::detect();
        Self::new(kind.create(), EncoderKind::default().create())
    }

    pub fn generator(&self) -> &dyn Generator {
        self.generator.as_ref()
    }

    pub fn encoder(&self) -> &dyn Encoder {
        self.encoder.as_ref()
    }

    /// `length` random bytes, returned in their encoded form.
    ///
    /// The string is whatever the encoder makes of the bytes: `2 * length`
    /// hex digits with the default encoder.
    pub fn get_random_bytes(&self, length: usize) -> Result<String> {
        let bytes = self.generator.generate(length)?;
        Ok(self.encoder.encode(&bytes))
    }

    /// A string of exactly `length` characters from [`DEFAULT_CHARSET`].
    pub fn get_random_string(&self, length: usize) -> Result<String> {
        self.get_random_string_from(length, DEFAULT_CHARSET)
    }

    /// A string of exactly `length` characters drawn from `charset`.
    ///
    /// Each character consumes one generator byte and picks
    /// `charset[byte % charset.len()]`, counting in `char`s. Charsets whose
    /// size does not divide 256 are slightly biased toward their first
    /// characters.
    pub fn get_random_string_from(&self, length: usize, charset: &str) -> Result<String> {
        let chars: Vec<char> = charset.chars().collect();
        if chars.is_empty() {
            return Err(Error::invalid("charset must not be empty"));
        }
        if length == 0 {
            return Err(Error::invalid("length must be positive"));
        }

        let bytes = self.generator.generate(length)?;
        Ok(bytes
            .iter()
            .map(|&b| chars[b as usize % chars.len()])
            .collect())
    }

    /// A uniformly distributed integer in `[min, max]`.
    pub fn get_random_integer(&self, min: i64, max: i64) -> Result<i64> {
        if max < min {
            return Err(Error::invalid(format!("max ({max}) is less than min ({min})")));
        }
        let range = (max as i128 - min as i128) as u64;
        if range == 0 {
            return Ok(min);
        }

        let offset = sample_below(self.generator.as_ref(), range)?;
        Ok((min as i128 + offset as i128) as i64)
    }
}

impl Default for Random {
    fn default() -> Self {
        Self::auto()
    }
}

impl std::fmt::Debug for Random {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Random")
            .field("generator", &self.generator.name())
            .field("encoder", &self.encoder.name())
            .finish()
    }
}

/// Number of bytes needed to hold `range`.
fn bytes_for(range: u64) -> usize {
    let bits = u64::BITS - range.leading_zeros();
    bits.div_ceil(8) as usize
}

/// Uniform value in `[0, range]` by rejection sampling.
///
/// Draws the fewest bytes that can hold `range`, read big-endian. With
/// `span = range + 1` and `width = 2^(8 * bytes)`, values at or above the
/// largest multiple of `span` below `width` are redrawn; the rest reduce
/// modulo `span` without bias. `limit` is never below `width / 2`, so each
/// draw is accepted with probability at least 1/2.
fn sample_below(generator: &dyn Generator, range: u64) -> Result<u64> {
    let n_bytes = bytes_for(range);
    let span = range as u128 + 1;
    let width = 1u128 << (8 * n_bytes);
    let limit = width - width % span;

    for _ in 0..MAX_REJECTIONS {
        let bytes = generator.generate(n_bytes)?;
        let value = bytes.iter().fold(0u128, |acc, &b| (acc << 8) | b as u128);
        if value < limit {
            return Ok((value % span) as u64);
        }
        log::debug!("rejected draw {value} >= {limit} for range {range}");
    }

    Err(Error::unavailable(format!(
        "generator '{}' produced {MAX_REJECTIONS} consecutive out-of-range draws",
        generator.name()
    )))
}
