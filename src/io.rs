//! Reading price-change series from text files and writing angle pairs back out.
//!
//! Input is a stream of whitespace-delimited numbers, usually one per line.
//! Output is one `alpha,beta` line per observation, each value written with the
//! shortest decimal representation that parses back to the same `f64`.

use std::{
    fmt::Display,
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::{AnglePair, SlopeError, WindowSize};

/// Directory the command-line tool writes into unless told otherwise
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// How missing or unwritable files are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IoPolicy {
    /// Any file error is returned to the caller
    #[default]
    Strict,
    /// A missing input reads as an empty series and an unwritable output is
    /// skipped, both reported through a warning
    Lenient,
}

/// Parses whitespace-delimited numbers until end of input or the first malformed token
///
/// Tokens are separated by ASCII whitespace. A token that is not valid UTF-8 or
/// not a finite number stops the read; everything before it is kept. Only
/// failures of the underlying reader are returned as errors.
///
/// # Examples
///
/// ```
/// # use slope_angles::io::parse_series;
/// let series = parse_series("1.5\n-2\n  3e-1 4\n".as_bytes()).unwrap();
/// assert_eq!(series, vec![1.5, -2.0, 0.3, 4.0]);
///
/// let truncated = parse_series("1\n2\nx\n3\n".as_bytes()).unwrap();
/// assert_eq!(truncated, vec![1.0, 2.0]);
/// ```
pub fn parse_series<R: BufRead>(reader: R) -> io::Result<Vec<f64>> {
    let mut series = Vec::new();

    for (line_num, line) in reader.split(b'\n').enumerate() {
        let line = line?;
        let tokens = line
            .split(u8::is_ascii_whitespace)
            .filter(|token| !token.is_empty());

        for token in tokens {
            match parse_token(token) {
                Some(value) => series.push(value),
                None => {
                    tracing::warn!(
                        token = %String::from_utf8_lossy(token),
                        line = line_num + 1,
                        kept = series.len(),
                        "malformed value, stopping read"
                    );
                    return Ok(series);
                }
            }
        }
    }

    Ok(series)
}

fn parse_token(token: &[u8]) -> Option<f64> {
    std::str::from_utf8(token)
        .ok()?
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Reads a price-change series from `path`
///
/// # Arguments
///
/// * `path` - The input file
/// * `policy` - Whether a file that cannot be opened is an error or an empty series
///
/// # Returns
///
/// * `Result<Vec<f64>, SlopeError>` - The series, in file order
pub fn read_series(path: impl AsRef<Path>, policy: IoPolicy) -> Result<Vec<f64>, SlopeError> {
    let path = path.as_ref();
    let io_err = |source| SlopeError::Io {
        action: "read",
        path: path.to_path_buf(),
        source,
    };

    let file = match File::open(path) {
        Ok(file) => file,
        Err(source) if policy == IoPolicy::Lenient => {
            tracing::warn!(path = %path.display(), error = %source, "input unreadable, using an empty series");
            return Ok(Vec::new());
        }
        Err(source) => return Err(io_err(source)),
    };

    let series = parse_series(BufReader::new(file)).map_err(io_err)?;
    tracing::debug!(path = %path.display(), count = series.len(), "series read");
    Ok(series)
}

/// Writes one `alpha,beta` line per pair
pub fn write_angles<W, T>(mut writer: W, pairs: &[AnglePair<T>]) -> io::Result<()>
where
    W: Write,
    T: Display,
{
    for pair in pairs {
        writeln!(writer, "{},{}", pair.alpha, pair.beta)?;
    }
    writer.flush()
}

/// Writes the angle pairs to `path`
///
/// The parent directory is not created. Under [`IoPolicy::Lenient`] a file
/// that cannot be created is skipped with a warning.
///
/// # Returns
///
/// * `Result<bool, SlopeError>` - Whether the file was written
pub fn write_series<T: Display>(
    path: impl AsRef<Path>,
    pairs: &[AnglePair<T>],
    policy: IoPolicy,
) -> Result<bool, SlopeError> {
    let path = path.as_ref();
    let io_err = |source| SlopeError::Io {
        action: "write",
        path: path.to_path_buf(),
        source,
    };

    let file = match File::create(path) {
        Ok(file) => file,
        Err(source) if policy == IoPolicy::Lenient => {
            tracing::warn!(path = %path.display(), error = %source, "output not writable, skipping");
            return Ok(false);
        }
        Err(source) => return Err(io_err(source)),
    };

    write_angles(BufWriter::new(file), pairs).map_err(io_err)?;
    tracing::debug!(path = %path.display(), count = pairs.len(), "angles written");
    Ok(true)
}

/// Returns `<dir>/window_<window>.csv`
///
/// # Examples
///
/// ```
/// # use slope_angles::{io::output_path, WindowSize};
/// # use std::path::Path;
/// let path = output_path("output", WindowSize::new(20).unwrap());
/// assert_eq!(path, Path::new("output/window_20.csv"));
/// ```
pub fn output_path(dir: impl AsRef<Path>, window: WindowSize) -> PathBuf {
    dir.as_ref().join(format!("window_{window}.csv"))
}
