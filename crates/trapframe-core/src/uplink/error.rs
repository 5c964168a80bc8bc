use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("uplink payload too short: need {needed} bytes, got {actual}")]
    InsufficientLength { needed: usize, actual: usize },
}
