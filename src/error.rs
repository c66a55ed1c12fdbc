use thiserror::Error;

/// Errors produced by the seesaw core and its terminal front end
#[derive(Debug, Error)]
pub enum Error {
    /// Weight outside the 1..=10 range
    #[error("invalid weight {0}: expected a value between 1 and 10")]
    InvalidWeight(u8),
    /// NaN or infinite coordinate handed to the mapper or the model
    #[error("non-finite coordinate")]
    NonFiniteCoordinate,
    /// Scripted weight source created without any weights
    #[error("weight sequence must not be empty")]
    EmptyWeightSequence,
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
