//! Configuration module for the Herald runtime.
//!
//! Provides figment-based layered configuration loading and validation for
//! bot accounts, handler-set assignment, and logging options.

pub mod error;
pub mod loader;
pub mod schema;
pub mod validation;

pub use error::{ConfigError, ConfigResult};
pub use loader::{ConfigLoader, Profile, load_config, load_config_from_file};
pub use schema::{
    ActivityConfig, ActivityKind, BotConfig, GlobalConfig, HeraldConfig, LogFormat, LogLevel,
    LogOutput, LoggingConfig, SpanEventConfig,
};
pub use validation::validate_config;
