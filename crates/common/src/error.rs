//! Error types for ad-unit and native configuration.
//!
//! Fallible operations return `error_stack::Report<PrebidMobileError>` so that
//! callers can attach context with `change_context` / `attach` as the error
//! travels up.

use derive_more::{Display, Error};

/// Errors surfaced by the Prebid Mobile core.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum PrebidMobileError {
    /// An argument violated a documented precondition.
    #[display("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Settings could not be loaded or failed validation.
    #[display("Configuration error: {message}")]
    Configuration { message: String },

    /// A request object could not be rendered.
    #[display("Serialization error: {message}")]
    Serialization { message: String },
}

impl PrebidMobileError {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    pub(crate) fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            PrebidMobileError::invalid_argument("empty").to_string(),
            "Invalid argument: empty"
        );
        assert_eq!(
            PrebidMobileError::configuration("bad toml").to_string(),
            "Configuration error: bad toml"
        );
        assert_eq!(
            PrebidMobileError::Serialization {
                message: "oops".to_string()
            }
            .to_string(),
            "Serialization error: oops"
        );
    }
}
