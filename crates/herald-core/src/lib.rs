//! # Herald Core
//!
//! The interaction-routing engine of the Herald bot framework.
//!
//! Herald routes inbound chat-platform events — slash commands, chat
//! messages, and button interactions — to explicitly declared handlers, and
//! builds each handler's call arguments from heterogeneous event data.
//!
//! ## Architecture Layers
//!
//! ### Foundation Layer
//!
//! The decoded data model handed over by the gateway:
//! - **Events**: [`IncomingEvent`] and its per-kind shapes
//! - **Options**: [`CommandOption`], [`OptionKind`], [`OptionValue`]
//! - **Entities**: [`UserRef`], [`GuildRef`], [`ChannelRef`], and friends
//!
//! ### Routing Layer
//!
//! The engine itself:
//! - **Rules**: declarative match conditions per event kind ([`MatchRule`])
//! - **Registry**: explicit registration table built once at startup
//!   ([`HandlerRegistry`], [`RegistryState`])
//! - **Matcher**: rule evaluation ([`matcher`](routing::matcher))
//! - **Resolver**: call-frame construction with a fixed conversion table
//!   ([`resolver`](routing::resolver))
//! - **Dispatcher**: per-event routing with contained failures
//!   ([`Dispatcher`])
//! - **Publication**: slash-command metadata for the gateway
//!   ([`command_data`])
//!
//! ## Event Flow
//!
//! ```text
//! ┌──────────┐     ┌────────────┐     ┌──────────┐     ┌──────────┐
//! │ Gateway  │────▶│ Dispatcher │────▶│ Matcher  │────▶│ Resolver │
//! │ (decode) │     │            │     │ (rules)  │     │ (frame)  │
//! └──────────┘     └────────────┘     └──────────┘     └────┬─────┘
//!                                                          ▼
//!                                                      handler(...)
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::any::Any;
//! use std::sync::Arc;
//!
//! use herald_core::{
//!     DispatchContext, Dispatcher, HandlerDecl, HandlerSet, ParamSpec,
//!     SlashCommandRule, ValueTarget,
//! };
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
//!                     println!("pong: {:?}", frame.str(0));
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
//! let ctx = Arc::new(DispatchContext::build(vec![Arc::new(PingTasks)]));
//! let dispatcher = Dispatcher::new(ctx);
//! // dispatcher.dispatch(event).await per received event
//! ```

pub mod error;
pub mod foundation;
pub mod routing;

pub use error::{DispatchError, HandlerError, HandlerResult, ResolveError};
pub use foundation::{
    AttachmentRef, ButtonEvent, ChannelRef, ChatMessageEvent, CommandOption, EventKind, GuildRef,
    IncomingEvent, MentionableRef, OptionKind, OptionValue, RoleRef, SlashCommandEvent, UserRef,
};
pub use routing::{
    ButtonRule, CallArgument, CallFrame, ChatMessageRule, CommandData, DispatchContext,
    DispatchReport, Dispatcher, HandlerDecl, HandlerDescriptor, HandlerFn, HandlerRegistry,
    HandlerSet, MAX_DESCRIPTION_LEN, MatchRule, OptionData, OptionDecl, OwnerInstance, ParamSpec,
    ParamTarget, RegistryState, SlashCommandRule, ValueTarget, command_data,
};

/// Prelude for common imports.
pub mod prelude {
    pub use super::error::{HandlerError, HandlerResult};
    pub use super::foundation::*;
    pub use super::routing::{
        ButtonRule, CallFrame, ChatMessageRule, DispatchContext, Dispatcher, HandlerDecl,
        HandlerSet, MatchRule, OptionDecl, ParamSpec, SlashCommandRule, ValueTarget,
    };
}
