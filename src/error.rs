use core::num::ParseIntError;

use alloc::string::String;

use thiserror::Error;

/// Errors raised while configuring the extractor or moving series in and out of files
#[derive(Error, Debug)]
pub enum SlopeError {
    /// The window does not span at least one observation
    #[error("invalid window size {0}: the window must span at least one observation")]
    InvalidWindow(i64),

    /// The window size is not an integer
    #[error("window size `{input}` is not an integer: {source}")]
    ParseWindow {
        /// Text that failed to parse
        input: String,
        /// Underlying integer parse failure
        #[source]
        source: ParseIntError,
    },

    /// Reading or writing a series file failed
    #[cfg(feature = "std")]
    #[error("failed to {action} {}", path.display())]
    Io {
        /// What was being attempted, e.g. "read" or "write"
        action: &'static str,
        /// File the operation targeted
        path: std::path::PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },
}
