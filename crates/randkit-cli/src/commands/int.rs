use std::io::Write;

use randkit_core::{EncoderKind, Result};

use crate::SourceArgs;

pub fn run(source: &SourceArgs, min: i64, max: i64, count: usize) -> Result<()> {
    let random = super::make_random(source, EncoderKind::default(), false)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for _ in 0..count {
        let value = random.get_random_integer(min, max)?;
        if writeln!(out, "{value}").is_err() {
            break; // Broken pipe
        }
    }
    Ok(())
}
