//! Bot assembly.
//!
//! A [`Bot`] is one bot account's fully assembled routing engine: the
//! dispatch context built from its handler sets, a dispatcher over it, and
//! the slash-command metadata the gateway publishes at startup. Bots are
//! immutable once built — the routing table is fixed for the life of the
//! process.

use std::sync::Arc;

use tracing::info;

use herald_core::{
    CommandData, DispatchContext, DispatchReport, Dispatcher, HandlerSet, IncomingEvent,
    command_data,
};

use crate::config::ActivityConfig;

/// One bot account's assembled dispatch engine.
pub struct Bot {
    id: String,
    name: Option<String>,
    activity: Option<ActivityConfig>,
    dispatcher: Dispatcher,
    commands: Vec<CommandData>,
}

impl Bot {
    /// Starts building a bot with the given id.
    pub fn builder(id: impl Into<String>) -> BotBuilder {
        BotBuilder {
            id: id.into(),
            name: None,
            activity: None,
            sets: Vec::new(),
        }
    }

    /// The bot's unique id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The human-readable name, falling back to the id.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }

    /// The configured activity, if any.
    pub fn activity(&self) -> Option<&ActivityConfig> {
        self.activity.as_ref()
    }

    /// Slash-command metadata for gateway publication.
    pub fn commands(&self) -> &[CommandData] {
        &self.commands
    }

    /// The dispatcher for this bot.
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Routes one decoded event through this bot's dispatcher.
    pub async fn handle_event(&self, event: IncomingEvent) -> DispatchReport {
        self.dispatcher.dispatch(event).await
    }
}

impl std::fmt::Debug for Bot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bot")
            .field("id", &self.id)
            .field("commands", &self.commands.len())
            .finish_non_exhaustive()
    }
}

/// Builder collecting handler sets before the routing table is frozen.
pub struct BotBuilder {
    id: String,
    name: Option<String>,
    activity: Option<ActivityConfig>,
    sets: Vec<Arc<dyn HandlerSet>>,
}

impl BotBuilder {
    /// Sets the human-readable name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the displayed activity.
    pub fn activity(mut self, activity: ActivityConfig) -> Self {
        self.activity = Some(activity);
        self
    }

    /// Assigns a handler set to this bot.
    pub fn handler_set(mut self, set: Arc<dyn HandlerSet>) -> Self {
        self.sets.push(set);
        self
    }

    /// Builds the routing table and freezes the bot.
    pub fn build(self) -> Bot {
        let ctx = Arc::new(DispatchContext::build(self.sets));
        let commands = command_data(ctx.registry());

        info!(
            bot = %self.id,
            slash = ctx.registry().slash_commands().len(),
            chat = ctx.registry().chat_messages().len(),
            button = ctx.registry().buttons().len(),
            "Bot assembled"
        );

        Bot {
            id: self.id,
            name: self.name,
            activity: self.activity,
            dispatcher: Dispatcher::new(ctx),
            commands,
        }
    }
}
