//! Entropy from a character device such as `/dev/urandom`.
//!
//! Reads are retried until the buffer is full: `read` may legitimately
//! return fewer bytes than asked (signals, pipes, exotic devices). End of
//! file before the buffer is full is a source failure.

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};

use super::{Generator, GeneratorInfo};
use crate::error::{Error, Result};

/// Default device path.
pub const DEFAULT_DEVICE: &str = "/dev/urandom";

static INFO: GeneratorInfo = GeneratorInfo {
    name: "urandom",
    description: "Kernel random device (/dev/urandom)",
    secure: true,
};

/// Secure generator reading from a random device. Unix only.
#[derive(Debug, Clone)]
pub struct UrandomGenerator {
    path: PathBuf,
}

impl UrandomGenerator {
    pub fn new() -> Self {
        Self::with_path(DEFAULT_DEVICE)
    }

    /// Read from a different device (or, in tests, a plain file).
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for UrandomGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator for UrandomGenerator {
    fn info(&self) -> &GeneratorInfo {
        &INFO
    }

    fn is_supported(&self) -> bool {
        cfg!(unix) && self.path.exists()
    }

    fn fill(&self, buf: &mut [u8]) -> Result<()> {
        let mut file = File::open(&self.path).map_err(|e| {
            Error::unavailable(format!("cannot open {}: {e}", self.path.display()))
        })?;

        read_full(&mut file, buf, &self.path)
    }
}

/// Read until `buf` is full, retrying on short reads and `Interrupted`.
fn read_full<R: Read>(reader: &mut R, buf: &mut [u8], path: &Path) -> Result<()> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => {
                return Err(Error::unavailable(format!(
                    "{} returned {filled} of {} bytes",
                    path.display(),
                    buf.len()
                )));
            }
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => {
                return Err(Error::unavailable(format!(
                    "read from {} failed: {e}",
                    path.display()
                )));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Write};

    /// Hands out at most three bytes per read and fails the second read
    /// with `Interrupted`, like a pipe fed by a slow writer.
    struct TricklingReader {
        data: Vec<u8>,
        pos: usize,
        reads: usize,
    }

    impl TricklingReader {
        fn new(data: &[u8]) -> Self {
            Self {
                data: data.to_vec(),
                pos: 0,
                reads: 0,
            }
        }
    }

    impl Read for TricklingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.reads += 1;
            if self.reads == 2 {
                return Err(io::Error::new(ErrorKind::Interrupted, "signal"));
            }
            let chunk = (self.reads % 3 + 1).min(buf.len()).min(self.data.len() - self.pos);
            buf[..chunk].copy_from_slice(&self.data[self.pos..self.pos + chunk]);
            self.pos += chunk;
            Ok(chunk)
        }
    }

    #[test]
    fn test_short_reads_are_retried() {
        let mut reader = TricklingReader::new(b"abcdefghij");
        let mut buf = [0u8; 8];
        read_full(&mut reader, &mut buf, Path::new("trickle")).unwrap();
        assert_eq!(&buf, b"abcdefgh");
        assert!(reader.reads > 3, "only {} reads", reader.reads);
    }

    #[test]
    fn test_short_reads_then_eof_is_unavailable() {
        let mut reader = TricklingReader::new(b"abc");
        let mut buf = [0u8; 8];
        let err = read_full(&mut reader, &mut buf, Path::new("trickle")).unwrap_err();
        match err {
            Error::SourceUnavailable(msg) => assert!(msg.contains("3 of 8"), "{msg}"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_other_read_errors_are_unavailable() {
        struct Broken;
        impl Read for Broken {
            fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::new(ErrorKind::PermissionDenied, "denied"))
            }
        }
        let err = read_full(&mut Broken, &mut [0u8; 4], Path::new("broken")).unwrap_err();
        assert!(matches!(err, Error::SourceUnavailable(_)));
    }

    #[test]
    fn test_missing_device_unsupported() {
        let generator = UrandomGenerator::with_path("/nonexistent/randkit-device");
        assert!(!generator.is_supported());
        let err = generator.generate(8).unwrap_err();
        assert!(matches!(err, Error::SourceUnavailable(_)));
    }

    #[test]
    fn test_reads_exact_bytes_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"abcdefghij").unwrap();
        file.flush().unwrap();

        let generator = UrandomGenerator::with_path(file.path());
        assert_eq!(generator.generate(4).unwrap(), b"abcd");
        // Each call opens the device afresh.
        assert_eq!(generator.generate(10).unwrap(), b"abcdefghij");
    }

    #[test]
    fn test_short_file_is_unavailable() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"abc").unwrap();
        file.flush().unwrap();

        let generator = UrandomGenerator::with_path(file.path());
        let err = generator.generate(8).unwrap_err();
        match err {
            Error::SourceUnavailable(msg) => assert!(msg.contains("3 of 8"), "{msg}"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_real_device() {
        let generator = UrandomGenerator::new();
        assert!(generator.is_supported());
        assert_eq!(generator.generate(64).unwrap().len(), 64);
    }
}
