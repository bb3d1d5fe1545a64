mod lookback;
pub use lookback::Lookback;
