use thiserror::Error;

pub type Result<T> = std::result::Result<T, NormError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NormError {
    #[error("unrecognized normalization option: {0}")]
    UnknownOption(String),

    #[error("unicode transform fault")]
    Transform,
}
