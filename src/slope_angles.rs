use num_traits::Float;

use crate::{
    AnglePair, Lookback, WindowSize,
    extractor::{slope, slope_extremes},
};

/// Streaming form of the windowed slope extractor.
///
/// Retains only the `window - 1` observations preceding the next one, so a
/// series of any length can be processed one value at a time. Feeding a
/// series through [`SlopeAngles::next`] produces exactly the values
/// [`compute`](crate::compute) returns for it, bit for bit.
///
/// Every call to `next` yields a complete pair, so a caller that stops between
/// calls always holds a consistent prefix of the output.
#[derive(Debug, Clone)]
pub struct SlopeAngles<T> {
    /// Trailing window size
    window: WindowSize,
    /// Observations preceding the next one
    lookback: Lookback<T>,
    /// Observations consumed since creation or the last reset
    seen: usize,
}

impl<T> SlopeAngles<T>
where
    T: Default + Float,
{
    /// Creates a new `SlopeAngles` instance for the given window.
    ///
    /// # Arguments
    ///
    /// * `window` - The trailing window size
    ///
    /// # Returns
    ///
    /// * `Self` - The extractor
    pub fn new(window: WindowSize) -> Self {
        Self {
            window,
            lookback: Lookback::new(window.lookback()),
            seen: 0,
        }
    }

    /// Returns the window size
    pub const fn window(&self) -> WindowSize {
        self.window
    }

    /// Returns how many observations have been consumed
    pub const fn len(&self) -> usize {
        self.seen
    }

    /// Resets the extractor
    ///
    /// # Returns
    ///
    /// * `&mut Self` - The extractor
    pub fn reset(&mut self) -> &mut Self {
        self.lookback.reset();
        self.seen = 0;
        self
    }

    /// Consumes the next observation and returns its angle pair
    ///
    /// # Arguments
    ///
    /// * `value` - The next price change
    ///
    /// # Returns
    ///
    /// * `AnglePair<T>` - The angles for this observation
    ///
    /// # Examples
    ///
    /// ```
    /// # use slope_angles::{SlopeAngles, WindowSize};
    /// use assert_approx_eq::assert_approx_eq;
    ///
    /// let mut angles = SlopeAngles::new(WindowSize::new(3).unwrap());
    /// let results: Vec<_> = [5.0, 3.0, 3.0].iter().map(|v| angles.next(*v)).collect();
    ///
    /// assert_eq!(results[0].alpha, 0.0);
    /// assert_approx_eq!(results[1].alpha, 2.0_f64.atan());
    /// assert_approx_eq!(results[2].alpha, 1.0_f64.atan());
    /// assert_eq!(results[2].beta, 0.0);
    /// ```
    pub fn next(&mut self, value: T) -> AnglePair<T> {
        let slopes = self
            .lookback
            .iter_with_distance()
            .map(|(distance, past)| slope(value, past, distance));
        let pair = AnglePair::from_extremes(slope_extremes(slopes));

        self.lookback.push(value);
        self.seen += 1;
        pair
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::all)]
mod tests {
    use super::*;
    use crate::compute;
    use alloc::vec::Vec;

    fn series() -> Vec<f64> {
        (0..300)
            .map(|i| {
                let x = i as f64;
                Float::sin(x * 0.37) * 2.5 + ((i * 31) % 17) as f64 * 0.1 - 0.8
            })
            .collect()
    }

    #[test]
    fn test_streaming_matches_batch_bit_for_bit() {
        let series = series();
        for w in [1, 2, 3, 10, 64, 299, 300, 1_000] {
            let window = WindowSize::new(w).unwrap();
            let batch = compute(&series, window);

            let mut stream = SlopeAngles::new(window);
            for (value, expected) in series.iter().zip(&batch) {
                let pair = stream.next(*value);
                assert_eq!(pair.alpha.to_bits(), expected.alpha.to_bits());
                assert_eq!(pair.beta.to_bits(), expected.beta.to_bits());
            }
            assert_eq!(stream.len(), series.len());
        }
    }

    #[test]
    fn test_first_pair_is_zero() {
        let mut stream = SlopeAngles::new(WindowSize::new(4).unwrap());
        assert_eq!(stream.next(123.0), AnglePair::zero());
    }

    #[test]
    fn test_reset_forgets_history() {
        let window = WindowSize::new(3).unwrap();
        let mut stream = SlopeAngles::new(window);
        stream.next(1.0);
        stream.next(-4.0);
        stream.reset();

        assert_eq!(stream.len(), 0);
        assert_eq!(stream.window(), window);
        assert_eq!(stream.next(9.0), AnglePair::zero());
    }

    #[test]
    fn test_window_of_one_yields_zero_pairs() {
        let mut stream = SlopeAngles::new(WindowSize::new(1).unwrap());
        for v in [1.0, 5.0, -3.0] {
            assert_eq!(stream.next(v), AnglePair::zero());
        }
    }
}
