pub mod compact;
pub mod error;
pub mod options;
pub mod pipeline;
pub mod unicode;

pub use crate::error::{NormError, Result};
pub use crate::options::Options;
pub use crate::pipeline::{normalize, plan, Normalizer, Stage};
