use core::{fmt, num::NonZeroUsize, str::FromStr};

use alloc::string::ToString;

use crate::SlopeError;

/// Number of observations spanned by the trailing window, the current one included.
///
/// A window of size `w` examines the `w - 1` observations preceding each index.
/// Zero and negative sizes are rejected at construction, so every `WindowSize`
/// in circulation is at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WindowSize(NonZeroUsize);

impl WindowSize {
    /// Creates a window size, returns an error if `window` is 0
    ///
    /// # Arguments
    ///
    /// * `window` - The number of observations spanned by the window
    ///
    /// # Returns
    ///
    /// * `Result<Self, SlopeError>` - The window size, or `SlopeError::InvalidWindow`
    ///
    /// # Examples
    ///
    /// ```
    /// # use slope_angles::WindowSize;
    /// assert_eq!(WindowSize::new(5).unwrap().get(), 5);
    /// assert!(WindowSize::new(0).is_err());
    /// ```
    pub fn new(window: usize) -> Result<Self, SlopeError> {
        NonZeroUsize::new(window)
            .map(Self)
            .ok_or(SlopeError::InvalidWindow(0))
    }

    /// Returns the window size as a plain integer
    pub const fn get(self) -> usize {
        self.0.get()
    }

    /// Returns how many preceding observations the window holds
    pub const fn lookback(self) -> usize {
        self.0.get() - 1
    }

    /// Returns the first index examined for the observation at `index`
    ///
    /// This is `max(index - window + 1, 0)`; the examined range is
    /// `first_index(index)..index`, never including `index` itself.
    ///
    /// # Examples
    ///
    /// ```
    /// # use slope_angles::WindowSize;
    /// let window = WindowSize::new(3).unwrap();
    /// assert_eq!(window.first_index(0), 0);
    /// assert_eq!(window.first_index(1), 0);
    /// assert_eq!(window.first_index(5), 3);
    /// ```
    pub const fn first_index(self, index: usize) -> usize {
        (index + 1).saturating_sub(self.0.get())
    }
}

impl From<NonZeroUsize> for WindowSize {
    fn from(window: NonZeroUsize) -> Self {
        Self(window)
    }
}

impl TryFrom<usize> for WindowSize {
    type Error = SlopeError;

    fn try_from(window: usize) -> Result<Self, Self::Error> {
        Self::new(window)
    }
}

impl TryFrom<i64> for WindowSize {
    type Error = SlopeError;

    fn try_from(window: i64) -> Result<Self, Self::Error> {
        usize::try_from(window)
            .ok()
            .and_then(NonZeroUsize::new)
            .map(Self)
            .ok_or(SlopeError::InvalidWindow(window))
    }
}

impl FromStr for WindowSize {
    type Err = SlopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let window = s
            .trim()
            .parse::<i64>()
            .map_err(|source| SlopeError::ParseWindow {
                input: s.to_string(),
                source,
            })?;
        Self::try_from(window)
    }
}

impl fmt::Display for WindowSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
