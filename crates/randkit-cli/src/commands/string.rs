use randkit_core::{DEFAULT_CHARSET, EncoderKind, Result};

use crate::SourceArgs;

pub fn run(source: &SourceArgs, length: usize, charset: Option<&str>) -> Result<()> {
    let random = super::make_random(source, EncoderKind::default(), false)?;
    let charset = charset.unwrap_or(DEFAULT_CHARSET);
    println!("{}", random.get_random_string_from(length, charset)?);
    Ok(())
}
