//! Rating normalization
//!
//! The `rate` column of the source dataset is free-form text: well-formed
//! values look like `4.1`, dirty ones like `NEW`, `-` or `N/A`. Normalization
//! turns every raw value into a finite number and never fails.

/// Value substituted for ratings that cannot be parsed.
///
/// Unparseable ratings are treated as "unrated", i.e. the worst case, so they
/// only survive a filter whose minimum rating is not above this floor.
pub const RATING_FLOOR: f64 = 0.0;

/// Convert a raw rating field into a finite number.
///
/// Surrounding whitespace is ignored. Anything that does not parse as a
/// float, or parses to a non-finite value (`nan`, `inf`), becomes
/// [`RATING_FLOOR`].
#[inline]
pub fn normalize_rating(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => RATING_FLOOR,
    }
}
