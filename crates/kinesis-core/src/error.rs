//! Error types for the Kinesis gesture engine.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("cannot bind a strategy for GestureType::None")]
    NoneGesture,

    #[error("invalid threshold profile: {0}")]
    InvalidThresholds(String),
}

pub type Result<T> = std::result::Result<T, Error>;
