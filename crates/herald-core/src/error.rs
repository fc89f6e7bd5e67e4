//! Error types for the routing engine.
//!
//! Every failure is contained at single-event, single-handler granularity:
//! a dispatch error is recorded and logged, never propagated across events,
//! and nothing here terminates the process.

use thiserror::Error;

use crate::foundation::option::OptionKind;
use crate::routing::param::ValueTarget;

/// An error raised by a handler body, with the original cause preserved.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HandlerError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl HandlerError {
    /// Creates a handler error from a message.
    pub fn msg(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Wraps an underlying error, keeping it as the source.
    pub fn caused_by(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

/// Result type for handler bodies.
pub type HandlerResult = Result<(), HandlerError>;

/// Errors produced while building a call frame for a matched handler.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResolveError {
    /// A value-kind parameter referenced an option the interaction did not
    /// carry. The handler body is never invoked.
    #[error("required option '{option}' not provided for handler '{handler}'")]
    MissingRequiredOption {
        /// The missing option name.
        option: String,
        /// The handler the frame was being built for.
        handler: String,
    },

    /// The declared parameter type cannot be derived from the option's
    /// platform kind. Never silently coerced.
    #[error(
        "cannot convert option '{option}' of kind {from} to {to:?} for handler '{handler}'"
    )]
    UnsupportedConversion {
        /// The offending option name.
        option: String,
        /// The option's platform kind.
        from: OptionKind,
        /// The requested parameter target.
        to: ValueTarget,
        /// The handler the frame was being built for.
        handler: String,
    },
}

/// A classified, non-fatal dispatch failure for one handler on one event.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// A slash command was received with no registered handler. The command
    /// was exposed to the platform but has no backing implementation.
    #[error("slash command '{command}' was called but was never declared")]
    NoMatchingHandler {
        /// The unrouted command name.
        command: String,
    },

    /// Argument resolution failed before the handler could run.
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// The handler body ran and failed, or the owning instance could not be
    /// used. The original cause is preserved.
    #[error("handler '{handler}' of '{owner}' failed")]
    InvocationFailure {
        /// The failing handler's name.
        handler: String,
        /// The owning handler set's key.
        owner: String,
        /// The preserved cause.
        #[source]
        source: HandlerError,
    },

    /// The owning handler-set instance for a matched descriptor could not be
    /// located. The event is dropped for that descriptor only.
    #[error("no handler-set instance registered under '{owner}' for handler '{handler}'")]
    OwnerNotFound {
        /// The missing owner key.
        owner: String,
        /// The orphaned handler's name.
        handler: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handler_error_preserves_source() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let err = HandlerError::caused_by("reply failed", io);
        assert_eq!(err.to_string(), "reply failed");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn resolve_error_is_classified_by_dispatch() {
        let err: DispatchError = ResolveError::MissingRequiredOption {
            option: "count".into(),
            handler: "roll".into(),
        }
        .into();
        assert!(matches!(err, DispatchError::Resolve(_)));
    }
}
