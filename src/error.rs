//! Error types for the progression engine

/// Errors raised by the progression engine.
///
/// The engine performs no I/O, so the only failure is input that breaks a
/// precondition the host was expected to uphold.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProgressError {
    #[error("Invalid argument `{field}`: {reason}")]
    InvalidArgument { field: &'static str, reason: String },
}

impl ProgressError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field,
            reason: reason.into(),
        }
    }
}

pub type ProgressResult<T> = Result<T, ProgressError>;
