//! Per-attribute similarity metrics
//!
//! Each metric compares one attribute family of two items and returns a
//! score where 1.0 means identical. None of them fail: missing or malformed
//! data degrades to a fixed default instead.

mod levenshtein;

pub use levenshtein::edit_distance;

use crate::item::TagSet;

/// Replace NaN and infinities with 0.0
fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Overlap between two tag sets.
///
/// `|a ∩ b| / max(|a|, |b|)`. Normalising by the larger set, not the union,
/// lets a small set fully contained in a large one score higher than
/// Jaccard would. Returns 0.0 if either set is empty, including when both
/// are: items without tags are not similar on that axis.
pub fn set_similarity(a: &TagSet, b: &TagSet) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let shared = a.intersection_count(b);
    shared as f64 / a.len().max(b.len()) as f64
}

/// `1 - |a - b| / max`
///
/// Not clamped: values further apart than `max` give a negative score.
fn scaled_difference_similarity(a: f64, b: f64, max: f64) -> f64 {
    finite_or_zero(1.0 - (a - b).abs() / max)
}

/// Popularity similarity against a fixed dataset maximum
pub fn popularity_similarity(a: f64, b: f64, popularity_max: f64) -> f64 {
    scaled_difference_similarity(a, b, popularity_max)
}

/// Quality (vote average) similarity against the top of the scale
pub fn quality_similarity(a: f64, b: f64, quality_max: f64) -> f64 {
    scaled_difference_similarity(a, b, quality_max)
}

/// Case-insensitive normalised edit distance between two names.
///
/// `1 - distance / max(len_a, len_b)`, lengths in characters. Two empty
/// names are identical and score 1.0.
pub fn name_similarity(a: &str, b: &str) -> f64 {
    let a = a.to_lowercase();
    let b = b.to_lowercase();

    let longest = a.chars().count().max(b.chars().count());
    if longest == 0 {
        return 1.0;
    }

    1.0 - edit_distance(&a, &b) as f64 / longest as f64
}
