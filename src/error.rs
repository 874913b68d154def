//! Error types surfaced by stream operations.

/// Failures raised by stream operations.
///
/// Non-termination on infinite input is not an error: operations documented
/// as forcing the whole stream simply never return.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum StreamError {
    /// `head` or `tail` was requested from an empty stream.
    #[error("cannot take the {operation} of an empty stream")]
    EmptyAccess { operation: &'static str },

    /// A malformed parameter, rejected before anything is evaluated.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    /// A seedless fold was applied to an empty stream.
    #[error("cannot reduce an empty stream")]
    ReduceOnEmpty,
}

impl StreamError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        StreamError::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, StreamError>;
