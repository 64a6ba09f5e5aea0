use thiserror::Error;

/// errors surfaced by the leaf computations
///
/// all of these mean a caller handed over data that upstream validation
/// should have caught, they are never retried
#[derive(Error, Debug)]
pub enum Error {
    #[error("sphere radius must be positive, got {0}")]
    NonPositiveRadius(f64),
    #[error("malformed weather payload: {0}")]
    Payload(#[from] serde_json::Error),
    #[error("forecast payload contained no entries")]
    EmptyForecast,
}
