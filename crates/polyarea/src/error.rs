//! Error type shared by the generator, both area routines and the harness.

/// Precondition violations. There is no recoverable variant: any invalid input
/// is reported to the caller and the run stops.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum AreaError {
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },
}

impl AreaError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AreaError>;
