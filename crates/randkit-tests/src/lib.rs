//! Statistical sanity checks for random output.
//!
//! Not a certification battery: these are the handful of checks that catch
//! a broken generator or a biased reduction. Each returns a [`TestResult`]
//! with a p-value (where applicable), a pass/fail determination, and a
//! letter grade (A through F).

use statrs::distribution::{ChiSquared, ContinuousCDF};
use statrs::function::erf::erfc;
use std::collections::HashMap;

/// Significance level used for pass/fail.
pub const ALPHA: f64 = 0.01;

/// Result of a single check.
#[derive(Debug, Clone)]
pub struct TestResult {
    pub name: String,
    pub passed: bool,
    pub p_value: Option<f64>,
    pub statistic: f64,
    pub details: String,
    pub grade: char,
}

impl TestResult {
    /// Assign a letter grade based on p-value.
    ///
    /// - A: p >= 0.1
    /// - B: p >= 0.01
    /// - C: p >= 0.001
    /// - D: p >= 0.0001
    /// - F: otherwise or None
    pub fn grade_from_p(p: Option<f64>) -> char {
        match p {
            Some(p) if p >= 0.1 => 'A',
            Some(p) if p >= 0.01 => 'B',
            Some(p) if p >= 0.001 => 'C',
            Some(p) if p >= 0.0001 => 'D',
            _ => 'F',
        }
    }

    /// Determine pass/fail from p-value against a threshold.
    pub fn pass_from_p(p: Option<f64>, threshold: f64) -> bool {
        p.is_some_and(|p| p >= threshold)
    }

    fn scored(name: &str, p: f64, statistic: f64, details: String) -> Self {
        Self {
            name: name.to_string(),
            passed: Self::pass_from_p(Some(p), ALPHA),
            p_value: Some(p),
            statistic,
            details,
            grade: Self::grade_from_p(Some(p)),
        }
    }

    fn failed(name: &str, details: String) -> Self {
        Self {
            name: name.to_string(),
            passed: false,
            p_value: None,
            statistic: 0.0,
            details,
            grade: 'F',
        }
    }
}

/// Unpack a byte slice into individual bits (MSB first per byte).
fn to_bits(data: &[u8]) -> Vec<u8> {
    data.iter()
        .flat_map(|&byte| (0..8).rev().map(move |shift| (byte >> shift) & 1))
        .collect()
}

fn insufficient(name: &str, needed: usize, got: usize) -> TestResult {
    TestResult::failed(name, format!("Insufficient data: need {needed}, got {got}"))
}

/// Upper tail of the chi-squared distribution.
fn chi2_sf(chi2: f64, dof: f64) -> Option<f64> {
    ChiSquared::new(dof).ok().map(|dist| dist.sf(chi2))
}

/// Pearson statistic of observed counts against a flat expectation.
fn pearson(counts: impl Iterator<Item = u64>, expected: f64) -> f64 {
    counts
        .map(|c| {
            let diff = c as f64 - expected;
            diff * diff / expected
        })
        .sum()
}

// ═══════════════════════════════════════════════════════════════════════════════
// Byte stream checks
// ═══════════════════════════════════════════════════════════════════════════════

/// Proportion of 1 bits should be ~50%.
pub fn monobit_frequency(data: &[u8]) -> TestResult {
    let name = "Monobit Frequency";
    let bits = to_bits(data);
    let n = bits.len();
    if n < 100 {
        return insufficient(name, 100, n);
    }
    let s: i64 = bits.iter().map(|&b| if b == 1 { 1 } else { -1 }).sum();
    let s_obs = (s as f64).abs() / (n as f64).sqrt();
    let p = erfc(s_obs / 2.0_f64.sqrt());
    TestResult::scored(name, p, s_obs, format!("S={s}, n={n}"))
}

/// Chi-squared on byte value distribution (256 bins).
pub fn byte_frequency(data: &[u8]) -> TestResult {
    let name = "Byte Frequency";
    let n = data.len();
    if n < 256 * 5 {
        return insufficient(name, 256 * 5, n);
    }
    let mut hist = [0u64; 256];
    for &b in data {
        hist[b as usize] += 1;
    }
    let expected = n as f64 / 256.0;
    let chi2 = pearson(hist.iter().copied(), expected);
    match chi2_sf(chi2, 255.0) {
        Some(p) => TestResult::scored(name, p, chi2, format!("n={n}, expected_per_bin={expected:.1}")),
        None => TestResult::failed(name, "chi-squared distribution unavailable".to_string()),
    }
}

/// Number of uninterrupted runs of 0s or 1s.
pub fn runs_test(data: &[u8]) -> TestResult {
    let name = "Runs Test";
    let bits = to_bits(data);
    let n = bits.len();
    if n < 100 {
        return insufficient(name, 100, n);
    }
    let ones = bits.iter().filter(|&&b| b == 1).count();
    let prop = ones as f64 / n as f64;
    if (prop - 0.5).abs() >= 2.0 / (n as f64).sqrt() {
        return TestResult {
            p_value: Some(0.0),
            ..TestResult::failed(name, format!("Pre-test failed: proportion={prop:.4}"))
        };
    }
    let runs = 1 + bits.windows(2).filter(|w| w[0] != w[1]).count();
    let expected = 2.0 * n as f64 * prop * (1.0 - prop) + 1.0;
    let std = 2.0 * (2.0 * n as f64).sqrt() * prop * (1.0 - prop);
    let z = (runs as f64 - expected).abs() / std;
    let p = erfc(z / 2.0_f64.sqrt());
    TestResult::scored(name, p, z, format!("runs={runs}, expected={expected:.0}"))
}

// ═══════════════════════════════════════════════════════════════════════════════
// Derived output checks
// ═══════════════════════════════════════════════════════════════════════════════

/// Every sample lies in `[min, max]` and the values are spread evenly.
///
/// Needs at least five samples per possible value, so it only applies to
/// small ranges.
pub fn range_uniformity(samples: &[i64], min: i64, max: i64) -> TestResult {
    let name = "Range Uniformity";
    if max <= min {
        return TestResult::failed(name, format!("Empty or degenerate range [{min}, {max}]"));
    }
    let bins = (max as i128 - min as i128 + 1) as u128;
    let needed = bins.saturating_mul(5);
    if (samples.len() as u128) < needed {
        return insufficient(name, needed.min(usize::MAX as u128) as usize, samples.len());
    }

    let mut counts = vec![0u64; bins as usize];
    for &v in samples {
        if v < min || v > max {
            return TestResult::failed(name, format!("Sample {v} outside [{min}, {max}]"));
        }
        counts[(v as i128 - min as i128) as usize] += 1;
    }

    let expected = samples.len() as f64 / bins as f64;
    let chi2 = pearson(counts.iter().copied(), expected);
    match chi2_sf(chi2, (bins - 1) as f64) {
        Some(p) => TestResult::scored(
            name,
            p,
            chi2,
            format!("n={}, bins={bins}, expected_per_bin={expected:.1}", samples.len()),
        ),
        None => TestResult::failed(name, "chi-squared distribution unavailable".to_string()),
    }
}

/// Every character of `text` comes from `charset`, and each charset entry
/// appears about equally often.
pub fn charset_uniformity(text: &str, charset: &str) -> TestResult {
    let name = "Charset Uniformity";
    let mut counts: HashMap<char, u64> = charset.chars().map(|c| (c, 0)).collect();
    let bins = counts.len();
    if bins < 2 {
        return TestResult::failed(name, format!("Charset needs 2+ distinct chars, got {bins}"));
    }
    let n = text.chars().count();
    if n < bins * 5 {
        return insufficient(name, bins * 5, n);
    }
    for c in text.chars() {
        match counts.get_mut(&c) {
            Some(count) => *count += 1,
            None => return TestResult::failed(name, format!("Character {c:?} not in charset")),
        }
    }

    let expected = n as f64 / bins as f64;
    let chi2 = pearson(counts.values().copied(), expected);
    match chi2_sf(chi2, (bins - 1) as f64) {
        Some(p) => TestResult::scored(name, p, chi2, format!("n={n}, bins={bins}")),
        None => TestResult::failed(name, "chi-squared distribution unavailable".to_string()),
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Battery
// ═══════════════════════════════════════════════════════════════════════════════

/// Run the byte stream checks on a byte slice.
pub fn run_byte_checks(data: &[u8]) -> Vec<TestResult> {
    let checks: [fn(&[u8]) -> TestResult; 3] = [monobit_frequency, byte_frequency, runs_test];
    checks.iter().map(|check| check(data)).collect()
}

/// Overall quality score (0-100) from results.
///
/// Each grade maps to a score: A=100, B=75, C=50, D=25, F=0.
/// Returns the average across all results.
pub fn calculate_quality_score(results: &[TestResult]) -> f64 {
    if results.is_empty() {
        return 0.0;
    }
    let total: f64 = results
        .iter()
        .map(|r| match r.grade {
            'A' => 100.0,
            'B' => 75.0,
            'C' => 50.0,
            'D' => 25.0,
            _ => 0.0,
        })
        .sum();
    total / results.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Generate pseudo-random data for testing (simple LCG).
    fn pseudo_random(n: usize) -> Vec<u8> {
        lcg().take(n).map(|x| x as u8).collect()
    }

    fn lcg() -> impl Iterator<Item = u32> {
        let mut state: u64 = 0xDEAD_BEEF_CAFE_BABE;
        std::iter::repeat_with(move || {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            (state >> 33) as u32
        })
    }

    #[test]
    fn test_to_bits() {
        assert_eq!(to_bits(&[0b10110001u8]), vec![1, 0, 1, 1, 0, 0, 0, 1]);
    }

    #[test]
    fn test_grade_from_p() {
        assert_eq!(TestResult::grade_from_p(Some(0.5)), 'A');
        assert_eq!(TestResult::grade_from_p(Some(0.05)), 'B');
        assert_eq!(TestResult::grade_from_p(Some(0.005)), 'C');
        assert_eq!(TestResult::grade_from_p(Some(0.0005)), 'D');
        assert_eq!(TestResult::grade_from_p(Some(0.00000001)), 'F');
        assert_eq!(TestResult::grade_from_p(None), 'F');
    }

    #[test]
    fn test_pass_from_p() {
        assert!(TestResult::pass_from_p(Some(0.05), 0.01));
        assert!(!TestResult::pass_from_p(Some(0.005), 0.01));
        assert!(!TestResult::pass_from_p(None, 0.01));
    }

    #[test]
    fn test_insufficient_data() {
        let result = monobit_frequency(&[0u8; 5]);
        assert!(!result.passed);
        assert!(result.details.contains("Insufficient"));
    }

    #[test]
    fn test_constant_data_fails() {
        let data = vec![0u8; 4000];
        assert!(run_byte_checks(&data).iter().all(|r| !r.passed));
    }

    #[test]
    fn test_pseudo_random_passes() {
        let data = pseudo_random(20_000);
        let results = run_byte_checks(&data);
        assert!(results.iter().all(|r| r.p_value.is_some()));
        let passed_count = results.iter().filter(|r| r.passed).count();
        assert!(
            passed_count >= 2,
            "Only {passed_count}/{} checks passed",
            results.len()
        );
    }

    #[test]
    fn test_range_uniformity_flat() {
        let samples: Vec<i64> = lcg().take(7000).map(|x| (x % 7) as i64 - 3).collect();
        let result = range_uniformity(&samples, -3, 3);
        assert!(result.passed, "{}", result.details);
    }

    #[test]
    fn test_range_uniformity_skewed() {
        // Half the mass on one value.
        let samples: Vec<i64> = lcg()
            .take(7000)
            .map(|x| if x % 2 == 0 { 0 } else { (x % 7) as i64 })
            .collect();
        assert!(!range_uniformity(&samples, 0, 6).passed);
    }

    #[test]
    fn test_range_uniformity_out_of_bounds() {
        let mut samples = vec![1i64; 100];
        samples[50] = 99;
        let result = range_uniformity(&samples, 0, 9);
        assert!(!result.passed);
        assert!(result.details.contains("outside"));
    }

    #[test]
    fn test_range_uniformity_needs_samples() {
        let result = range_uniformity(&[0, 1, 2], 0, 100);
        assert!(result.details.contains("Insufficient"));
    }

    #[test]
    fn test_charset_uniformity() {
        let charset = "abcd";
        let text: String = lcg()
            .take(4000)
            .map(|x| charset.as_bytes()[(x % 4) as usize] as char)
            .collect();
        assert!(charset_uniformity(&text, charset).passed);
        assert!(!charset_uniformity(&format!("{text}z"), charset).passed);
    }

    #[test]
    fn test_quality_score() {
        let pass = TestResult::scored("A", 0.5, 0.0, String::new());
        let fail = TestResult::failed("F", String::new());
        let score = calculate_quality_score(&[pass, fail]);
        assert!((score - 50.0).abs() < 0.01);
        assert_eq!(calculate_quality_score(&[]), 0.0);
    }
}
