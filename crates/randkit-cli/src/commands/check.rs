use randkit_core::{DEFAULT_CHARSET, EncoderKind, Generator, Result};
use randkit_tests::{
    TestResult, calculate_quality_score, charset_uniformity, range_uniformity, run_byte_checks,
};

use crate::SourceArgs;

/// Range used for the integer check: small enough for a chi-squared test,
/// and 37 does not divide 256, so a biased reduction would show.
const INT_MIN: i64 = 0;
const INT_MAX: i64 = 36;
const INT_SAMPLES: usize = 37 * 200;

pub fn run(source: &SourceArgs, samples: usize) -> Result<()> {
    let random = super::make_random(source, EncoderKind::default(), false)?;
    println!("Checking generator '{}'...\n", random.generator().name());

    let bytes = random.generator().generate(samples)?;
    let mut results = run_byte_checks(&bytes);

    let ints = (0..INT_SAMPLES)
        .map(|_| random.get_random_integer(INT_MIN, INT_MAX))
        .collect::<Result<Vec<_>>>()?;
    results.push(range_uniformity(&ints, INT_MIN, INT_MAX));

    let text = random.get_random_string(DEFAULT_CHARSET.len() * 100)?;
    results.push(charset_uniformity(&text, DEFAULT_CHARSET));

    print_results(&results);
    Ok(())
}

fn print_results(results: &[TestResult]) {
    println!(
        "  {:<22} {:>5} {:>10} {:>12}  Details",
        "Check", "Grade", "p-value", "Statistic"
    );
    println!("  {}", "-".repeat(70));
    for r in results {
        let p = r
            .p_value
            .map(|p| format!("{p:.4}"))
            .unwrap_or_else(|| "-".to_string());
        let mark = if r.passed { "\u{2713}" } else { "\u{2717}" };
        println!(
            "{mark} {:<22} {:>5} {:>10} {:>12.3}  {}",
            r.name, r.grade, p, r.statistic, r.details
        );
    }
    let passed = results.iter().filter(|r| r.passed).count();
    println!(
        "\n{passed}/{} passed, quality score {:.0}/100",
        results.len(),
        calculate_quality_score(results)
    );
}
