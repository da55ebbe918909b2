//! Generator strategies: where random bytes come from.
//!
//! Every generator implements the [`Generator`] trait, which provides
//! metadata via [`GeneratorInfo`], a support probe, and byte production.
//! The facade only ever talks to `dyn Generator`, so any implementation can
//! be swapped in at construction time.

mod mock;
mod os;
mod thread;
mod urandom;

use std::fmt;
use std::str::FromStr;

pub use mock::MockGenerator;
pub use os::OsGenerator;
pub use thread::ThreadRngGenerator;
pub use urandom::{DEFAULT_DEVICE, UrandomGenerator};

use crate::error::{Error, Result};

/// Metadata about a generator.
#[derive(Debug, Clone)]
pub struct GeneratorInfo {
    /// Unique identifier (e.g. `"os"`).
    pub name: &'static str,
    /// One-line human-readable description.
    pub description: &'static str,
    /// Whether output is suitable for keys, tokens and other secrets.
    pub secure: bool,
}

/// Trait that every byte generator must implement.
pub trait Generator: Send + Sync {
    /// Generator metadata.
    fn info(&self) -> &GeneratorInfo;

    /// Check if this generator can operate on the current machine.
    fn is_supported(&self) -> bool;

    /// Fill `buf` completely, or fail. Short reads are the implementation's
    /// problem: a partially filled buffer must never be reported as success.
    /// An empty `buf` is accepted as a no-op; [`Generator::generate`] is the
    /// validated entry point and rejects zero lengths.
    fn fill(&self, buf: &mut [u8]) -> Result<()>;

    /// Produce exactly `length` random bytes.
    fn generate(&self, length: usize) -> Result<Vec<u8>> {
        if length == 0 {
            return Err(Error::invalid("length must be positive"));
        }
        let mut buf = vec![0u8; length];
        self.fill(&mut buf)?;
        Ok(buf)
    }

    /// Convenience: name from info.
    fn name(&self) -> &'static str {
        self.info().name
    }
}

/// The generator strategies shipped with this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeneratorKind {
    /// OS CSPRNG through `getrandom`.
    Os,
    /// Character device such as `/dev/urandom`.
    Urandom,
    /// `rand`'s thread-local CSPRNG.
    Thread,
    /// Deterministic replay of a seed string.
    Mock,
}

impl GeneratorKind {
    /// Every kind, in auto-detection preference order (mock last, never picked).
    pub const ALL: [GeneratorKind; 4] = [Self::Os, Self::Urandom, Self::Thread, Self::Mock];

    /// Instantiate this kind with its default configuration.
    ///
    /// `Mock` starts with an empty seed and fails until one is set; use
    /// [`MockGenerator::new`] or the builder to seed it.
    pub fn create(self) -> Box<dyn Generator> {
        match self {
            Self::Os => Box::new(OsGenerator),
            Self::Urandom => Box::new(UrandomGenerator::new()),
            Self::Thread => Box::new(ThreadRngGenerator),
            Self::Mock => Box::new(MockGenerator::default()),
        }
    }

    /// Pick the first supported secure generator on this machine.
    pub fn detect() -> GeneratorKind {
        for kind in [Self::Os, Self::Urandom] {
            if kind.create().is_supported() {
                log::debug!("selected generator: {kind}");
                return kind;
            }
            log::warn!("generator {kind} is not supported on this platform");
        }
        log::debug!("selected generator: {}", Self::Thread);
        Self::Thread
    }
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Os => write!(f, "os"),
            Self::Urandom => write!(f, "urandom"),
            Self::Thread => write!(f, "thread"),
            Self::Mock => write!(f, "mock"),
        }
    }
}

impl FromStr for GeneratorKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "os" => Ok(Self::Os),
            "urandom" => Ok(Self::Urandom),
            "thread" => Ok(Self::Thread),
            "mock" => Ok(Self::Mock),
            other => Err(Error::invalid(format!("unknown generator '{other}'"))),
        }
    }
}

/// Support status of one generator kind on this machine.
#[derive(Debug, Clone)]
pub struct GeneratorStatus {
    pub kind: GeneratorKind,
    pub info: GeneratorInfo,
    pub supported: bool,
}

/// Probe every shipped generator.
pub fn available_generators() -> Vec<GeneratorStatus> {
    GeneratorKind::ALL
        .iter()
        .map(|&kind| {
            let generator = kind.create();
            GeneratorStatus {
                kind,
                info: generator.info().clone(),
                supported: generator.is_supported(),
            }
        })
        .collect()
}
