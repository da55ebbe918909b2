//! `rand`'s thread-local CSPRNG.
//!
//! ChaCha seeded from the OS and periodically reseeded. Always available,
//! which makes it the last resort of auto-detection.

use rand::RngCore;

use super::{Generator, GeneratorInfo};
use crate::error::Result;

static INFO: GeneratorInfo = GeneratorInfo {
    name: "thread",
    description: "rand thread-local CSPRNG, reseeded from the OS",
    secure: true,
};

/// Generator backed by `rand::rng()`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngGenerator;

impl Generator for ThreadRngGenerator {
    fn info(&self) -> &GeneratorInfo {
        &INFO
    }

    fn is_supported(&self) -> bool {
        true
    }

    fn fill(&self, buf: &mut [u8]) -> Result<()> {
        rand::rng().fill_bytes(buf);
        Ok(())
    }
}
