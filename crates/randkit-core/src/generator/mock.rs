//! Deterministic replay generator for tests.

use super::{Generator, GeneratorInfo};
use crate::error::{Error, Result};

static INFO: GeneratorInfo = GeneratorInfo {
    name: "mock",
    description: "Replays a fixed seed string; for tests only",
    secure: false,
};

/// Returns its seed from the beginning on every call, repeated cyclically
/// until the requested length is reached.
///
/// ```
/// use randkit_core::{Generator, MockGenerator};
///
/// let mock = MockGenerator::new("abc");
/// assert_eq!(mock.generate(7).unwrap(), b"abcabca");
/// assert_eq!(mock.generate(2).unwrap(), b"ab");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockGenerator {
    seed: Vec<u8>,
}

impl MockGenerator {
    pub fn new(seed: impl AsRef<[u8]>) -> Self {
        Self {
            seed: seed.as_ref().to_vec(),
        }
    }

    /// Replace the seed.
    pub fn set_mock_string(&mut self, seed: impl AsRef<[u8]>) {
        self.seed = seed.as_ref().to_vec();
    }

    pub fn mock_string(&self) -> &[u8] {
        &self.seed
    }
}

impl Generator for MockGenerator {
    fn info(&self) -> &GeneratorInfo {
        &INFO
    }

    fn is_supported(&self) -> bool {
        true
    }

    fn fill(&self, buf: &mut [u8]) -> Result<()> {
        if self.seed.is_empty() {
            return Err(Error::unavailable("mock generator has no seed"));
        }
        for (dst, src) in buf.iter_mut().zip(self.seed.iter().cycle()) {
            *dst = *src;
        }
        Ok(())
    }
}
