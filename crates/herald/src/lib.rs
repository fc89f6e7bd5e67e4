//! # Herald
//!
//! A declarative interaction-routing framework for chat-platform bots.
//!
//! Herald routes inbound platform events — slash commands, chat messages,
//! and button interactions — to explicitly declared handlers, resolving
//! each handler's arguments from the event's data. The framework owns no
//! transport: an external gateway decodes events and feeds them in, and
//! receives slash-command metadata to register with the platform at startup.
//!
//! This crate re-exports the engine (`herald-core`) and the orchestration
//! layer (`herald-runtime`).
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::any::Any;
//! use std::sync::Arc;
//!
//! use herald::prelude::*;
//! use herald::{Bot, HandlerDecl, HandlerSet, ParamSpec, SlashCommandRule, ValueTarget};
//!
//! struct PingTasks;
//!
//! impl HandlerSet for PingTasks {
//!     fn key(&self) -> &str {
//!         "ping_tasks"
//!     }
//!
//!     fn handlers(&self) -> Vec<HandlerDecl> {
//!         vec![
//!             HandlerDecl::new("ping", SlashCommandRule::named("ping"))
//!                 .param(ParamSpec::option("message", ValueTarget::Str))
//!                 .handler(|_this: Arc<PingTasks>, frame| async move {
//!                     println!("pong! {:?}", frame.str(0));
//!                     Ok(())
//!                 }),
//!         ]
//!     }
//!
//!     fn as_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync> {
//!         self
//!     }
//! }
//!
//! # async fn run(event: herald::IncomingEvent) {
//! let bot = Bot::builder("main").handler_set(Arc::new(PingTasks)).build();
//! bot.handle_event(event).await;
//! # }
//! ```

pub use herald_core::*;

pub use herald_runtime::{
    Bot, BotBuilder, ConfigError, ConfigLoader, ConfigResult, Gateway, HeraldConfig,
    HeraldRuntime, LoggingBuilder, RuntimeError, RuntimeResult, SpanEvents, config, load_config,
    logging,
};

/// Prelude combining the engine and runtime preludes.
pub mod prelude {
    pub use herald_core::prelude::*;
    pub use herald_runtime::prelude::*;
}
