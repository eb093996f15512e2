use std::collections::TryReserveError;

#[derive(Debug, thiserror::Error)]
pub enum OptionError {
    /// Option storage could not be grown while declaring options or usage
    /// text. This is the engine's only unrecoverable failure; resolution
    /// itself never fails.
    #[error("failed to grow option storage: {0}")]
    Storage(#[from] TryReserveError),
}

pub type Result<T> = std::result::Result<T, OptionError>;
