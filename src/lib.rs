#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]
#![deny(
    unsafe_code,
    unused_imports,
    unused_variables,
    unused_must_use,
    missing_docs,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::dbg_macro,
    clippy::todo,
    clippy::unimplemented
)]
#![allow(clippy::len_without_is_empty)]

#[macro_use]
extern crate alloc;

mod utils;
pub(crate) use utils::Lookback;

mod error;
pub use error::SlopeError;

mod window_size;
pub use window_size::WindowSize;

mod angle_pair;
pub use angle_pair::AnglePair;

mod extractor;
#[cfg(feature = "parallel")]
pub use extractor::compute_parallel;
pub use extractor::{angles_at, compute};

mod slope_angles;
pub use slope_angles::SlopeAngles;

#[cfg(feature = "std")]
pub mod io;
#[cfg(feature = "std")]
pub use io::IoPolicy;
