use num_traits::Float;

/// Angles derived from the steepest slopes in the trailing window of one observation.
///
/// Both angles are in radians within `(-π/2, π/2)`. Slopes are negated before
/// taking the arctangent, so a rising slope maps to a negative angle and a
/// falling slope to a positive one:
///
/// * `alpha` - `atan(-min_slope)`, the angle of the smallest slope in the window
/// * `beta` - `atan(-max_slope)`, the angle of the largest slope in the window
///
/// Because `atan` is increasing and the slopes are negated, `alpha >= beta` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnglePair<T> {
    /// Angle of the minimum slope
    pub alpha: T,
    /// Angle of the maximum slope
    pub beta: T,
}

impl<T: Float> AnglePair<T> {
    /// Returns the pair emitted when no preceding observation lies in the window
    pub fn zero() -> Self {
        Self {
            alpha: T::zero(),
            beta: T::zero(),
        }
    }

    /// Derives the angle pair from the extreme slopes of a window
    ///
    /// # Arguments
    ///
    /// * `min_slope` - The smallest slope found in the window
    /// * `max_slope` - The largest slope found in the window
    ///
    /// # Examples
    ///
    /// ```
    /// # use slope_angles::AnglePair;
    /// use assert_approx_eq::assert_approx_eq;
    ///
    /// let pair = AnglePair::from_slopes(-1.0_f64, 0.0);
    /// assert_approx_eq!(pair.alpha, core::f64::consts::FRAC_PI_4);
    /// assert_eq!(pair.beta, 0.0);
    /// ```
    pub fn from_slopes(min_slope: T, max_slope: T) -> Self {
        Self {
            alpha: (-min_slope).atan(),
            beta: (-max_slope).atan(),
        }
    }

    /// Derives the angle pair from optional window extremes, `None` meaning an empty window
    pub fn from_extremes(extremes: Option<(T, T)>) -> Self {
        extremes.map_or_else(Self::zero, |(min_slope, max_slope)| {
            Self::from_slopes(min_slope, max_slope)
        })
    }
}

impl<T> From<AnglePair<T>> for (T, T) {
    fn from(pair: AnglePair<T>) -> Self {
        (pair.alpha, pair.beta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use core::f64::consts::{FRAC_PI_2, FRAC_PI_4};

    #[test]
    fn test_rising_slope_maps_to_negative_angle() {
        let pair = AnglePair::from_slopes(1.0_f64, 1.0);
        assert_approx_eq!(pair.alpha, -FRAC_PI_4);
        assert_approx_eq!(pair.beta, -FRAC_PI_4);
    }

    #[test]
    fn test_falling_slope_maps_to_positive_angle() {
        let pair = AnglePair::from_slopes(-2.0_f64, -2.0);
        assert_approx_eq!(pair.alpha, 1.1071487177940904);
        assert_approx_eq!(pair.beta, 1.1071487177940904);
    }

    #[test]
    fn test_alpha_not_below_beta() {
        let slopes = [(-3.0, 2.0), (0.0, 0.0), (-1e300, 1e300), (0.5, 0.75)];
        for (lo, hi) in slopes {
            let pair = AnglePair::from_slopes(lo, hi);
            assert!(pair.alpha >= pair.beta);
            assert!(pair.alpha.abs() <= FRAC_PI_2);
            assert!(pair.beta.abs() <= FRAC_PI_2);
        }
    }

    #[test]
    fn test_empty_window_is_zero() {
        assert_eq!(AnglePair::<f64>::from_extremes(None), AnglePair::zero());
        assert_eq!(AnglePair::<f32>::default(), AnglePair::zero());
    }

    #[test]
    fn test_into_tuple() {
        let (alpha, beta) = AnglePair::from_slopes(-1.0_f64, 1.0).into();
        assert!(alpha > 0.0);
        assert!(beta < 0.0);
    }
}
