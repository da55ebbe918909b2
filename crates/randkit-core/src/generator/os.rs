//! OS CSPRNG via the `getrandom` crate.
//!
//! Works cross-platform (Unix, Windows, WASM, etc.) without manual file I/O.
//! `getrandom::fill` already loops over partial kernel reads, so a successful
//! return always means a fully initialized buffer.

use super::{Generator, GeneratorInfo};
use crate::error::{Error, Result};

static INFO: GeneratorInfo = GeneratorInfo {
    name: "os",
    description: "Operating system CSPRNG (getrandom, BCryptGenRandom, ...)",
    secure: true,
};

/// Secure generator backed by the operating system.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsGenerator;

impl Generator for OsGenerator {
    fn info(&self) -> &GeneratorInfo {
        &INFO
    }

    fn is_supported(&self) -> bool {
        let mut probe = [0u8; 1];
        getrandom::fill(&mut probe).is_ok()
    }

    fn fill(&self, buf: &mut [u8]) -> Result<()> {
        getrandom::fill(buf).map_err(|e| Error::unavailable(format!("OS CSPRNG failed: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_os_supported_here() {
        assert!(OsGenerator.is_supported());
    }

    #[test]
    fn test_os_generate_lengths() {
        for len in [1, 16, 33, 4096] {
            assert_eq!(OsGenerator.generate(len).unwrap().len(), len);
        }
    }

    #[test]
    fn test_os_output_not_constant() {
        let a = OsGenerator.generate(32).unwrap();
        let b = OsGenerator.generate(32).unwrap();
        assert_ne!(a, b);
    }
}
