//! Gateway boundary.
//!
//! The runtime never talks to the chat platform itself. An external gateway
//! client decodes events and feeds them to
//! [`Bot::handle_event`](crate::bot::Bot::handle_event); in the other
//! direction, the runtime hands the gateway each bot's slash-command
//! metadata once at startup so the commands can be registered with the
//! platform.

use async_trait::async_trait;

use herald_core::CommandData;

use crate::error::RuntimeResult;

/// The outbound half of the gateway boundary.
///
/// Implemented by the external gateway client. Publication is a one-time
/// startup side effect, not part of steady-state dispatch.
#[async_trait]
pub trait Gateway: Send + Sync {
    /// Registers the given slash commands with the platform for one bot.
    async fn publish_commands(
        &self,
        bot_id: &str,
        commands: &[CommandData],
    ) -> RuntimeResult<()>;
}
