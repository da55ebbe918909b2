pub mod bytes;
pub mod check;
pub mod int;
pub mod scan;
pub mod string;

use randkit_core::{EncoderKind, GeneratorKind, Random, RandomBuilder, Result};

use crate::SourceArgs;

/// Build a `Random` from the shared generator flags.
///
/// With no `--generator`, the builder auto-detects the best secure source;
/// `--mock-seed` alone selects the mock generator.
pub fn make_random(source: &SourceArgs, encoder: EncoderKind, pad: bool) -> Result<Random> {
    let mut builder = RandomBuilder::new().encoder(encoder).base32_padding(pad);

    if let Some(name) = &source.generator {
        builder = builder.generator(name.parse::<GeneratorKind>()?);
    }
    if let Some(seed) = &source.mock_seed {
        builder = builder.mock_seed(seed);
    }
    if let Some(device) = &source.device {
        builder = builder.device(device);
    }

    let random = builder.build()?;
    log::debug!("using {random:?}");
    Ok(random)
}
