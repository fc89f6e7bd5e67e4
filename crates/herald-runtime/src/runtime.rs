//! Runtime orchestration.
//!
//! [`HeraldRuntime`] owns the table of assembled [`Bot`]s, wires bots up
//! from configuration, hands slash-command metadata to the gateway, and
//! parks until shutdown. It deliberately owns no transport: the external
//! gateway feeds decoded events in via [`HeraldRuntime::dispatch`] (or a
//! [`Bot`] handle), one call per received interaction.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{info, warn};

use herald_core::{DispatchReport, HandlerSet, IncomingEvent};

use crate::bot::Bot;
use crate::config::HeraldConfig;
use crate::error::{RuntimeError, RuntimeResult};
use crate::gateway::Gateway;

/// The Herald runtime: a table of assembled bots plus lifecycle glue.
#[derive(Default)]
pub struct HeraldRuntime {
    bots: RwLock<HashMap<String, Arc<Bot>>>,
}

impl HeraldRuntime {
    /// Creates an empty runtime.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assembles bots from configuration.
    ///
    /// `sets` maps handler-set names (as referenced by `bots.*.handler_sets`
    /// in the config) to live instances. A bot referencing an unknown set
    /// name fails assembly; disabled bots are skipped.
    pub fn assemble_from_config(
        &self,
        config: &HeraldConfig,
        sets: &HashMap<String, Arc<dyn HandlerSet>>,
    ) -> RuntimeResult<()> {
        for bot_config in &config.bots {
            if !bot_config.enabled {
                info!(bot = %bot_config.id, "Bot disabled, skipping");
                continue;
            }

            let mut builder = Bot::builder(&bot_config.id);
            if let Some(name) = &bot_config.name {
                builder = builder.name(name);
            }
            if let Some(activity) = &bot_config.activity {
                builder = builder.activity(activity.clone());
            }

            for set_name in &bot_config.handler_sets {
                let set = sets
                    .get(set_name)
                    .ok_or_else(|| RuntimeError::MissingHandlerSet {
                        bot: bot_config.id.clone(),
                        set: set_name.clone(),
                    })?;
                builder = builder.handler_set(Arc::clone(set));
            }

            self.add_bot(builder.build())?;
        }
        Ok(())
    }

    /// Registers an assembled bot.
    pub fn add_bot(&self, bot: Bot) -> RuntimeResult<Arc<Bot>> {
        let mut bots = self.bots.write();
        if bots.contains_key(bot.id()) {
            return Err(RuntimeError::DuplicateBot(bot.id().to_string()));
        }
        let bot = Arc::new(bot);
        bots.insert(bot.id().to_string(), Arc::clone(&bot));
        info!(bot = %bot.id(), "Registered bot");
        Ok(bot)
    }

    /// Returns a bot by id.
    pub fn bot(&self, id: &str) -> Option<Arc<Bot>> {
        self.bots.read().get(id).cloned()
    }

    /// All registered bot ids.
    pub fn bot_ids(&self) -> Vec<String> {
        self.bots.read().keys().cloned().collect()
    }

    /// Number of registered bots.
    pub fn count(&self) -> usize {
        self.bots.read().len()
    }

    /// Routes one decoded event to the named bot.
    pub async fn dispatch(&self, bot_id: &str, event: IncomingEvent) -> RuntimeResult<DispatchReport> {
        let bot = self
            .bot(bot_id)
            .ok_or_else(|| RuntimeError::UnknownBot(bot_id.to_string()))?;
        Ok(bot.handle_event(event).await)
    }

    /// Hands every bot's slash-command metadata to the gateway.
    ///
    /// One-time startup side effect. A failed publication is reported but
    /// does not stop publication for the remaining bots.
    pub async fn publish_commands(&self, gateway: &dyn Gateway) -> RuntimeResult<()> {
        let bots: Vec<Arc<Bot>> = self.bots.read().values().cloned().collect();
        let mut first_error = None;

        for bot in bots {
            if let Err(err) = gateway.publish_commands(bot.id(), bot.commands()).await {
                warn!(bot = %bot.id(), error = %err, "Slash-command publication failed");
                first_error.get_or_insert(err);
            } else {
                info!(
                    bot = %bot.id(),
                    commands = bot.commands().len(),
                    "Slash commands published"
                );
            }
        }

        match first_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Parks until Ctrl+C, then returns for shutdown.
    pub async fn run(&self) -> RuntimeResult<()> {
        info!(bots = self.count(), "Herald runtime started");
        if tokio::signal::ctrl_c().await.is_err() {
            warn!("Failed to listen for shutdown signal");
        }
        info!("Shutdown signal received, stopping");
        Ok(())
    }
}

impl std::fmt::Debug for HeraldRuntime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeraldRuntime")
            .field("bots", &self.count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BotConfig;
    use herald_core::{
        ChannelRef, ChatMessageEvent, ChatMessageRule, GuildRef, HandlerDecl, UserRef,
    };
    use std::any::Any;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct EchoSet {
        hits: Arc<AtomicUsize>,
    }

    impl HandlerSet for EchoSet {
        fn key(&self) -> &str {
            "echo_set"
        }

        fn handlers(&self) -> Vec<HandlerDecl> {
            let hits = Arc::clone(&self.hits);
            vec![
                HandlerDecl::new("echo", ChatMessageRule::new()).handler(
                    move |_this: Arc<EchoSet>, _frame| {
                        let hits = Arc::clone(&hits);
                        async move {
                            hits.fetch_add(1, Ordering::SeqCst);
                            Ok(())
                        }
                    },
                ),
            ]
        }

        fn as_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync> {
            self
        }
    }

    fn message(content: &str) -> IncomingEvent {
        IncomingEvent::ChatMessage(ChatMessageEvent {
            content: content.to_string(),
            user: UserRef::new("1", "tester"),
            channel: ChannelRef::named("10", "general"),
            guild: Some(GuildRef::new("100", "Herald HQ")),
        })
    }

    #[tokio::test]
    async fn dispatches_to_the_named_bot() {
        let hits = Arc::new(AtomicUsize::new(0));
        let runtime = HeraldRuntime::new();
        runtime
            .add_bot(
                Bot::builder("main")
                    .handler_set(Arc::new(EchoSet {
                        hits: Arc::clone(&hits),
                    }))
                    .build(),
            )
            .unwrap();

        let report = runtime.dispatch("main", message("hello")).await.unwrap();
        assert_eq!(report.completed, 1);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn unknown_bot_is_an_error() {
        let runtime = HeraldRuntime::new();
        let result = runtime.dispatch("ghost", message("hello")).await;
        assert!(matches!(result, Err(RuntimeError::UnknownBot(_))));
    }

    #[test]
    fn duplicate_bot_ids_are_rejected() {
        let runtime = HeraldRuntime::new();
        runtime.add_bot(Bot::builder("main").build()).unwrap();
        let result = runtime.add_bot(Bot::builder("main").build());
        assert!(matches!(result, Err(RuntimeError::DuplicateBot(_))));
    }

    #[test]
    fn assembles_bots_from_config() {
        let hits = Arc::new(AtomicUsize::new(0));
        let mut sets: HashMap<String, Arc<dyn HandlerSet>> = HashMap::new();
        sets.insert("echo".to_string(), Arc::new(EchoSet { hits }));

        let config = HeraldConfig {
            bots: vec![
                BotConfig {
                    id: "main".into(),
                    name: Some("Main".into()),
                    token: "secret".into(),
                    activity: None,
                    handler_sets: vec!["echo".into()],
                    enabled: true,
                    settings: Default::default(),
                },
                BotConfig {
                    id: "backup".into(),
                    name: None,
                    token: "secret2".into(),
                    activity: None,
                    handler_sets: Vec::new(),
                    enabled: false,
                    settings: Default::default(),
                },
            ],
            ..Default::default()
        };

        let runtime = HeraldRuntime::new();
        runtime.assemble_from_config(&config, &sets).unwrap();
        assert_eq!(runtime.count(), 1);
        assert!(runtime.bot("main").is_some());
        assert!(runtime.bot("backup").is_none());
    }

    #[test]
    fn unknown_handler_set_fails_assembly() {
        let sets = HashMap::new();
        let config = HeraldConfig {
            bots: vec![BotConfig {
                id: "main".into(),
                name: None,
                token: "secret".into(),
                activity: None,
                handler_sets: vec!["missing".into()],
                enabled: true,
                settings: Default::default(),
            }],
            ..Default::default()
        };

        let runtime = HeraldRuntime::new();
        let result = runtime.assemble_from_config(&config, &sets);
        assert!(matches!(
            result,
            Err(RuntimeError::MissingHandlerSet { .. })
        ));
    }
}
