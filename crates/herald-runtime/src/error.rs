//! Runtime error types.

use thiserror::Error;

use crate::config::ConfigError;

/// Errors raised by runtime orchestration.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// No bot is registered under the given id.
    #[error("no bot registered under '{0}'")]
    UnknownBot(String),

    /// A bot with this id is already registered.
    #[error("bot '{0}' is already registered")]
    DuplicateBot(String),

    /// A configured handler set was never provided to the runtime.
    #[error("bot '{bot}' references unknown handler set '{set}'")]
    MissingHandlerSet {
        /// The bot whose configuration references the set.
        bot: String,
        /// The unknown handler-set name.
        set: String,
    },

    /// Configuration loading or validation failed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The gateway rejected a publication or bootstrap call.
    #[error("gateway error: {0}")]
    Gateway(String),
}

/// Result type for runtime operations.
pub type RuntimeResult<T> = Result<T, RuntimeError>;
