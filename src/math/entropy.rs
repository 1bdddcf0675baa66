//! Helpers behind the wave's incremental entropy statistics
//!
//! The wave keeps per-cell running sums of pattern frequencies and of
//! their `p * ln(p)` contributions; these functions turn those sums into
//! Shannon entropy and derive the tie-break noise scale.

/// Per-pattern `p * ln(p)` contributions of a frequency distribution
pub fn plogp(frequencies: &[f64]) -> Vec<f64> {
    frequencies.iter().map(|&p| p * p.ln()).collect()
}

/// Half of the smallest element
///
/// Applied to the `p * ln(p)` contributions this bounds the entropy shift
/// a single removal can cause, which makes it a safe cap for the random
/// tie-break noise added during minimum-entropy scans.
pub fn half_min(values: &[f64]) -> f64 {
    values.iter().fold(f64::INFINITY, |acc, &v| acc.min(v / 2.0))
}

/// Shannon entropy of an unnormalised distribution from its memoised sums
///
/// For remaining frequency sum `S` and contribution sum `Σ p ln p` this is
/// `ln(S) - (Σ p ln p) / S`, the entropy of the normalised distribution.
pub fn shannon_entropy(sum: f64, plogp_sum: f64) -> f64 {
    sum.ln() - plogp_sum / sum
}
