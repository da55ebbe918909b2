//! Name-driven construction of a [`Random`].
//!
//! The builder is the configuration surface: callers (the CLI, config
//! files of embedding applications) select strategies by [`GeneratorKind`]
//! and [`EncoderKind`] instead of constructing them by hand.

use crate::encoder::{Base32Encoder, Encoder, EncoderKind};
use crate::error::{Error, Result};
use crate::generator::{Generator, GeneratorKind, MockGenerator, UrandomGenerator};
use crate::random::Random;

use std::path::PathBuf;

#[derive(Debug, Clone, Default)]
pub struct RandomBuilder {
    generator: Option<GeneratorKind>,
    encoder: EncoderKind,
    mock_seed: Option<Vec<u8>>,
    device: Option<PathBuf>,
    base32_padding: bool,
}

impl RandomBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use this generator. Without it, `build` auto-detects.
    pub fn generator(mut self, kind: GeneratorKind) -> Self {
        self.generator = Some(kind);
        self
    }

    pub fn encoder(mut self, kind: EncoderKind) -> Self {
        self.encoder = kind;
        self
    }

    /// Seed for the mock generator. Implies `GeneratorKind::Mock`; combining
    /// it with any other explicit generator fails in `build`.
    pub fn mock_seed(mut self, seed: impl AsRef<[u8]>) -> Self {
        self.mock_seed = Some(seed.as_ref().to_vec());
        self
    }

    /// Device path for `GeneratorKind::Urandom`.
    pub fn device(mut self, path: impl Into<PathBuf>) -> Self {
        self.device = Some(path.into());
        self
    }

    /// Pad base32 output with `=`.
    pub fn base32_padding(mut self, pad: bool) -> Self {
        self.base32_padding = pad;
        self
    }

    /// Assemble the facade.
    ///
    /// An explicitly requested generator that is not supported here is an
    /// error; there is no fallback to a different source.
    pub fn build(self) -> Result<Random> {
        let kind = match (self.generator, &self.mock_seed) {
            (Some(kind), Some(_)) if kind != GeneratorKind::Mock => {
                return Err(Error::invalid(format!(
                    "mock seed given with generator '{kind}'"
                )));
            }
            (Some(kind), _) => kind,
            (None, Some(_)) => GeneratorKind::Mock,
            (None, None) => GeneratorKind::detect(),
        };

        let generator: Box<dyn Generator> = match kind {
            GeneratorKind::Mock => {
                let seed = self
                    .mock_seed
                    .ok_or_else(|| Error::invalid("mock generator requires a seed"))?;
                if seed.is_empty() {
                    return Err(Error::invalid("mock seed must not be empty"));
                }
                Box::new(MockGenerator::new(seed))
            }
            GeneratorKind::Urandom => match self.device {
                Some(path) => Box::new(UrandomGenerator::with_path(path)),
                None => Box::new(UrandomGenerator::new()),
            },
            other => other.create(),
        };

        if !generator.is_supported() {
            return Err(Error::unavailable(format!(
                "generator '{kind}' is not supported on this platform"
            )));
        }

        let encoder: Box<dyn Encoder> = match self.encoder {
            EncoderKind::Base32 if self.base32_padding => Box::new(Base32Encoder::padded()),
            other => other.create(),
        };

        log::debug!("built Random with generator={kind} encoder={}", self.encoder);
        Ok(Random::new(generator, encoder))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_build_is_auto() {
        let random = RandomBuilder::new().build().unwrap();
        assert_eq!(random.generator().name(), GeneratorKind::detect().to_string());
        assert_eq!(random.encoder().name(), "hex");
    }

    #[test]
    fn test_mock_seed_implies_mock() {
        let random = RandomBuilder::new()
            .mock_seed("0123456789")
            .encoder(EncoderKind::Raw)
            .build()
            .unwrap();
        assert_eq!(random.generator().name(), "mock");
        assert_eq!(random.get_random_bytes(8).unwrap(), "01234567");
    }

    #[test]
    fn test_seed_with_other_generator_is_rejected() {
        for kind in [GeneratorKind::Os, GeneratorKind::Urandom, GeneratorKind::Thread] {
            let err = RandomBuilder::new()
                .generator(kind)
                .mock_seed("0123456789")
                .build()
                .unwrap_err();
            assert!(matches!(err, Error::InvalidArgument(_)), "{kind}: {err:?}");
        }
    }

    #[test]
    fn test_seed_with_explicit_mock() {
        let random = RandomBuilder::new()
            .generator(GeneratorKind::Mock)
            .mock_seed("0123456789")
            .encoder(EncoderKind::Raw)
            .build()
            .unwrap();
        assert_eq!(random.get_random_bytes(4).unwrap(), "0123");
    }

    #[test]
    fn test_mock_without_seed() {
        let err = RandomBuilder::new()
            .generator(GeneratorKind::Mock)
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn test_mock_with_empty_seed() {
        let err = RandomBuilder::new().mock_seed("").build().unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn test_unsupported_device_is_not_replaced() {
        let err = RandomBuilder::new()
            .generator(GeneratorKind::Urandom)
            .device("/nonexistent/randkit-device")
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::SourceUnavailable(_)));
    }

    #[test]
    fn test_base32_padding() {
        let random = RandomBuilder::new()
            .mock_seed("f")
            .encoder(EncoderKind::Base32)
            .base32_padding(true)
            .build()
            .unwrap();
        assert_eq!(random.get_random_bytes(1).unwrap(), "MY======");

        let random = RandomBuilder::new()
            .mock_seed("f")
            .encoder(EncoderKind::Base32)
            .build()
            .unwrap();
        assert_eq!(random.get_random_bytes(1).unwrap(), "MY");
    }
}
