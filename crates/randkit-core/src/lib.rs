//! # randkit-core
//!
//! Random bytes, strings and bounded integers, with the *source* of
//! randomness and its *text form* as independent, swappable strategies.
//!
//! ## Quick Start
//!
//! ```no_run
//! use randkit_core::Random;
//!
//! // Best secure generator on this machine, hex encoding
//! let random = Random::auto();
//!
//! let token = random.get_random_bytes(16)?;
//! assert_eq!(token.len(), 32);
//!
//! let password = random.get_random_string(12)?;
//! let die = random.get_random_integer(1, 6)?;
//! assert!((1..=6).contains(&die));
//! # Ok::<(), randkit_core::Error>(())
//! ```
//!
//! ## Architecture
//!
//! Generator → Random → Encoder (strings) / rejection sampling (integers)
//!
//! Every source implements the [`Generator`] trait, every text form the
//! [`Encoder`] trait. [`Random`] holds one of each for its lifetime.
//! [`RandomBuilder`] selects both by name.

pub mod builder;
pub mod encoder;
pub mod error;
pub mod generator;
pub mod random;

pub use builder::RandomBuilder;
pub use encoder::{
    Base32Encoder, Base64Encoder, Decoder, Encoder, EncoderKind, HexEncoder, RawEncoder,
};
pub use error::{Error, Result};
pub use generator::{
    Generator, GeneratorInfo, GeneratorKind, GeneratorStatus, MockGenerator, OsGenerator,
    ThreadRngGenerator, UrandomGenerator, available_generators,
};
pub use random::{DEFAULT_CHARSET, MAX_REJECTIONS, Random};

/// Library version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
