use thiserror::Error;

/// Error returned by the strict parser ([`str::parse::<Rgba>`](super::Rgba)).
///
/// The tolerant parsers in [`super::parse`] never produce this; they fall
/// back to black instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseColorError {
    #[error("empty color string")]
    Empty,
    #[error("unrecognized color: {0:?}")]
    Unrecognized(String),
    #[error("{component} out of range: {value} (expected {min}..={max})")]
    OutOfRange {
        component: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}
