use randkit_core::{EncoderKind, Result};

use crate::SourceArgs;

pub fn run(source: &SourceArgs, length: usize, encoder: &str, pad: bool) -> Result<()> {
    let kind: EncoderKind = encoder.parse()?;
    let random = super::make_random(source, kind, pad)?;
    println!("{}", random.get_random_bytes(length)?);
    Ok(())
}
