//! Distance metrics between encoded feature vectors
//!
//! Smaller is more similar for every metric.

use dinematch_core::Vector;
use serde::{Deserialize, Serialize};

/// Distance metric used by the ranker
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    /// `1 - cos(a, b)`, in `[0, 2]`. A zero vector is at distance 1 from
    /// everything.
    #[default]
    Cosine,
    /// Euclidean distance
    Euclidean,
}

impl Metric {
    /// Distance between `a` and `b`
    #[inline]
    pub fn distance(&self, a: &Vector, b: &Vector) -> f64 {
        match self {
            Metric::Cosine => cosine_distance(a, b),
            Metric::Euclidean => a.l2_distance(b),
        }
    }
}

/// Cosine distance, clamped to `[0, 2]` so rounding never yields a negative
/// distance for identical directions.
#[inline]
pub fn cosine_distance(a: &Vector, b: &Vector) -> f64 {
    a.cosine_distance(b).clamp(0.0, 2.0)
}
