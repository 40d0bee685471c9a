//! Geometric integer sequence generator
//!
//! Produces the width ladders used for responsive srcsets and expands
//! bounded numeric intervals (width, height, quality) into per-candidate
//! values. Sequences are geometric so that candidate sizes are denser at
//! the small end, where a one-step difference matters more.

/// Default number of elements for an expanded interval.
pub const DEFAULT_SIZE: usize = 16;

/// Returns a geometric sequence of integers from `first` to `last` with
/// exactly `size` elements.
///
/// Both ascending (`first < last`) and descending (`first > last`) bounds are
/// supported. Intermediate terms are rounded to the nearest integer (half away
/// from zero) and the final element is forced to exactly `last` so rounding
/// drift never moves the boundary.
///
/// A non-positive `size` yields an empty sequence; `1` yields `[first]` and
/// `2` yields `[first, last]`.
///
/// # Example
/// ```
/// use picdn::sequence::sequence;
///
/// assert_eq!(sequence(100, 8192, 4), vec![100, 434, 1886, 8192]);
/// ```
pub fn sequence(first: i64, last: i64, size: i64) -> Vec<i64> {
    if size <= 0 {
        return Vec::new();
    }
    if size == 1 {
        return vec![first];
    }
    if size == 2 {
        return vec![first, last];
    }

    let ratio = (last as f64 / first as f64).powf(1.0 / (size - 1) as f64);

    let mut terms = Vec::with_capacity(size as usize);
    let mut term = first as f64;
    for _ in 0..size - 1 {
        terms.push(term.round() as i64);
        term *= ratio;
    }
    terms.push(last);
    terms
}
