use num_traits::Float;

use alloc::vec::Vec;

use crate::{AnglePair, WindowSize};

/// Slope of the segment from an observation `distance` steps back to the current one
#[inline]
pub(crate) fn slope<T: Float>(current: T, past: T, distance: usize) -> T {
    // usize converts to every primitive float, the NaN arm is never taken for them
    T::from(distance).map_or_else(T::nan, |d| (current - past) / d)
}

/// Folds a sequence of slopes into `(min, max)`, `None` when the sequence is empty
#[inline]
pub(crate) fn slope_extremes<T: Float>(slopes: impl Iterator<Item = T>) -> Option<(T, T)> {
    slopes.fold(None, |acc, s| match acc {
        None => Some((s, s)),
        Some((lo, hi)) => Some((lo.min(s), hi.max(s))),
    })
}

/// Computes the angle pair for a single index of the series
///
/// Examines every `j` in `max(index - window + 1, 0)..index`, takes the slopes
/// `(series[index] - series[j]) / (index - j)` and converts their extremes into
/// angles. An index with no preceding observation inside the window, which is
/// always the case for index 0 and for every index when the window is 1,
/// yields `{0, 0}`.
///
/// # Arguments
///
/// * `series` - The price-change series
/// * `index` - The index to evaluate, must be less than `series.len()`
/// * `window` - The trailing window size
///
/// # Panics
///
/// Panics if `index` is out of bounds.
///
/// # Examples
///
/// ```
/// # use slope_angles::{angles_at, WindowSize};
/// use assert_approx_eq::assert_approx_eq;
///
/// let series = [5.0, 3.0, 3.0];
/// let pair = angles_at(&series, 2, WindowSize::new(3).unwrap());
/// assert_approx_eq!(pair.alpha, 1.0_f64.atan());
/// assert_eq!(pair.beta, 0.0);
/// ```
pub fn angles_at<T: Float>(series: &[T], index: usize, window: WindowSize) -> AnglePair<T> {
    let current = series[index];
    let first = window.first_index(index);

    let slopes = series[first..index]
        .iter()
        .enumerate()
        .map(|(offset, &past)| slope(current, past, index - first - offset));

    AnglePair::from_extremes(slope_extremes(slopes))
}

/// Computes the angle pair of every observation in the series
///
/// The result always has the same length as `series` and its first element,
/// if any, is `{0, 0}`. An empty series yields an empty result.
///
/// # Arguments
///
/// * `series` - The price-change series
/// * `window` - The trailing window size
///
/// # Returns
///
/// * `Vec<AnglePair<T>>` - One angle pair per observation
///
/// # Examples
///
/// ```
/// # use slope_angles::{compute, AnglePair, WindowSize};
/// use assert_approx_eq::assert_approx_eq;
///
/// let angles = compute(&[1.0, 2.0, 4.0], WindowSize::new(2).unwrap());
/// assert_eq!(angles[0], AnglePair::zero());
///
/// let expected = [(-1.0_f64).atan(), (-2.0_f64).atan()];
/// for (pair, e) in angles[1..].iter().zip(expected) {
///     assert_approx_eq!(pair.alpha, e);
///     assert_approx_eq!(pair.beta, e);
/// }
/// ```
pub fn compute<T: Float>(series: &[T], window: WindowSize) -> Vec<AnglePair<T>> {
    (0..series.len())
        .map(|index| angles_at(series, index, window))
        .collect()
}

/// Computes the same result as [`compute`] with the indices spread across the rayon pool
///
/// Each worker reads the shared series and fills its own output slots, so the
/// result is bit-identical to the sequential version.
#[cfg(feature = "parallel")]
pub fn compute_parallel<T>(series: &[T], window: WindowSize) -> Vec<AnglePair<T>>
where
    T: Float + Send + Sync,
{
    use rayon::prelude::*;

    (0..series.len())
        .into_par_iter()
        .map(|index| angles_at(series, index, window))
        .collect()
}
