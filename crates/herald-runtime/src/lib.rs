//! Herald Runtime — orchestration layer for the Herald bot framework.
//!
//! This crate provides the plumbing around the routing engine:
//!
//! - Bot assembly (`Bot`, `BotBuilder`) — handler sets in, frozen routing
//!   table out
//! - Runtime orchestration (`HeraldRuntime`) — the bot table, config-driven
//!   assembly, and shutdown handling
//! - Configuration (`config`) — figment-based layered loading with
//!   `HERALD_*` env overrides
//! - Logging (`logging`) — tracing-subscriber setup driven by config
//! - The gateway seam (`Gateway`) — the startup handoff of slash-command
//!   metadata to the external platform client
//!
//! # Example
//!
//! ```rust,ignore
//! use std::collections::HashMap;
//! use std::sync::Arc;
//!
//! use herald_runtime::{HeraldRuntime, config, logging};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let cfg = config::load_config()?;
//!     logging::init_from_config(&cfg.logging);
//!
//!     let mut sets = HashMap::new();
//!     sets.insert("ping".to_string(), my_ping_set());
//!
//!     let runtime = HeraldRuntime::new();
//!     runtime.assemble_from_config(&cfg, &sets)?;
//!
//!     // The external gateway feeds decoded events:
//!     // runtime.dispatch("main", event).await?;
//!
//!     runtime.run().await?;
//!     Ok(())
//! }
//! ```

pub mod bot;
pub mod config;
pub mod error;
pub mod gateway;
pub mod logging;
pub mod runtime;

// Re-exports
pub use bot::{Bot, BotBuilder};
pub use config::{ConfigError, ConfigLoader, ConfigResult, HeraldConfig, load_config};
pub use error::{RuntimeError, RuntimeResult};
pub use gateway::Gateway;
pub use logging::{LoggingBuilder, SpanEvents};
pub use runtime::HeraldRuntime;

// Re-export tracing for use by bot applications
pub use tracing;

/// Prelude module providing the common logging macros.
pub mod prelude {
    pub use tracing::{Level, debug, error, info, instrument, span, trace, warn};
}
