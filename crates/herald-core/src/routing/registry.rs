//! Handler registry.
//!
//! The registry scans handler-set instances once at startup and produces the
//! immutable routing table the dispatcher reads. Registration is best-effort
//! and lossy-safe: a malformed declaration is dropped with a warning, never
//! an error, and a set with zero declarations simply contributes zero
//! descriptors. Nothing here contacts the platform.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::foundation::event::EventKind;
use crate::routing::descriptor::{HandlerDescriptor, HandlerSet};
use crate::routing::rule::MatchRule;

/// The immutable routing table: descriptors partitioned by event kind, in
/// registration order.
///
/// Built once at startup; read-only afterwards, so concurrent dispatches
/// share it without locking.
#[derive(Default)]
pub struct RegistryState {
    slash: Vec<HandlerDescriptor>,
    chat: Vec<HandlerDescriptor>,
    button: Vec<HandlerDescriptor>,
}

impl RegistryState {
    /// Slash-command descriptors in registration order.
    pub fn slash_commands(&self) -> &[HandlerDescriptor] {
        &self.slash
    }

    /// Chat-message descriptors in registration order.
    pub fn chat_messages(&self) -> &[HandlerDescriptor] {
        &self.chat
    }

    /// Button descriptors in registration order.
    pub fn buttons(&self) -> &[HandlerDescriptor] {
        &self.button
    }

    /// Descriptors for the given event kind.
    pub fn for_kind(&self, kind: EventKind) -> &[HandlerDescriptor] {
        match kind {
            EventKind::SlashCommand => &self.slash,
            EventKind::ChatMessage => &self.chat,
            EventKind::Button => &self.button,
        }
    }

    /// Total number of registered descriptors.
    pub fn len(&self) -> usize {
        self.slash.len() + self.chat.len() + self.button.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for RegistryState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistryState")
            .field("slash", &self.slash.len())
            .field("chat", &self.chat.len())
            .field("button", &self.button.len())
            .finish()
    }
}

/// Builds the routing table from handler-set instances.
pub struct HandlerRegistry;

impl HandlerRegistry {
    /// Scans every set and produces one descriptor per valid declaration.
    ///
    /// Drops (with a warning) declarations that have no handler body, and
    /// slash declarations that could never be addressed because neither a
    /// command nor a handler name was given. Duplicate slash command names
    /// are kept — first match in registration order wins at dispatch — but
    /// flagged, since the platform requires unique names per bot.
    pub fn register(sets: &[Arc<dyn HandlerSet>]) -> RegistryState {
        let mut state = RegistryState::default();
        let mut seen_commands: HashSet<String> = HashSet::new();

        for set in sets {
            let owner = set.key().to_string();
            let decls = set.handlers();
            debug!(owner = %owner, count = decls.len(), "Scanning handler set");

            for decl in decls {
                let (name, rule, params, callable) = decl.into_parts();

                let Some(callable) = callable else {
                    warn!(
                        owner = %owner,
                        handler = %name,
                        "Handler declared without a body, dropping"
                    );
                    continue;
                };

                if let MatchRule::SlashCommand(slash) = &rule {
                    let command = slash
                        .command
                        .clone()
                        .unwrap_or_else(|| name.clone())
                        .to_lowercase();
                    if command.is_empty() {
                        warn!(
                            owner = %owner,
                            "Slash handler has neither a command nor a name, dropping"
                        );
                        continue;
                    }
                    if !seen_commands.insert(command.clone()) {
                        warn!(
                            owner = %owner,
                            command = %command,
                            "Duplicate slash command name; only the first registration will run"
                        );
                    }
                }

                let descriptor =
                    HandlerDescriptor::new(owner.clone(), name, rule, params, callable);
                match descriptor.rule().kind() {
                    EventKind::SlashCommand => state.slash.push(descriptor),
                    EventKind::ChatMessage => state.chat.push(descriptor),
                    EventKind::Button => state.button.push(descriptor),
                }
            }
        }

        debug!(
            slash = state.slash.len(),
            chat = state.chat.len(),
            button = state.button.len(),
            "Routing table built"
        );
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::descriptor::HandlerDecl;
    use crate::routing::rule::{ButtonRule, ChatMessageRule, SlashCommandRule};
    use std::any::Any;

    struct TestSet {
        decls: Vec<HandlerDecl>,
    }

    impl HandlerSet for TestSet {
        fn key(&self) -> &str {
            "test_set"
        }

        fn handlers(&self) -> Vec<HandlerDecl> {
            self.decls.clone()
        }

        fn as_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync> {
            self
        }
    }

    fn noop(name: &str, rule: impl Into<MatchRule>) -> HandlerDecl {
        HandlerDecl::new(name, rule).handler(|_this: Arc<TestSet>, _frame| async move { Ok(()) })
    }

    #[test]
    fn partitions_by_event_kind_in_order() {
        let set: Arc<dyn HandlerSet> = Arc::new(TestSet {
            decls: vec![
                noop("ping", SlashCommandRule::named("ping")),
                noop("log_all", ChatMessageRule::new()),
                noop("confirm", ButtonRule::with_id("confirm")),
                noop("greet", ChatMessageRule::new().content_contains("hello")),
            ],
        });

        let state = HandlerRegistry::register(&[set]);
        assert_eq!(state.slash_commands().len(), 1);
        assert_eq!(state.chat_messages().len(), 2);
        assert_eq!(state.buttons().len(), 1);
        assert_eq!(state.chat_messages()[0].name(), "log_all");
        assert_eq!(state.chat_messages()[1].name(), "greet");
        assert_eq!(state.len(), 4);
    }

    #[test]
    fn drops_declarations_without_a_body() {
        let set: Arc<dyn HandlerSet> = Arc::new(TestSet {
            decls: vec![
                HandlerDecl::new("stub", ButtonRule::any()),
                noop("real", ButtonRule::any()),
            ],
        });

        let state = HandlerRegistry::register(&[set]);
        assert_eq!(state.buttons().len(), 1);
        assert_eq!(state.buttons()[0].name(), "real");
    }

    #[test]
    fn keeps_duplicate_command_names() {
        let set: Arc<dyn HandlerSet> = Arc::new(TestSet {
            decls: vec![
                noop("first", SlashCommandRule::named("ping")),
                noop("second", SlashCommandRule::named("PING")),
            ],
        });

        let state = HandlerRegistry::register(&[set]);
        // Both stay in the table; dispatch order decides the winner.
        assert_eq!(state.slash_commands().len(), 2);
    }

    #[test]
    fn empty_set_contributes_nothing() {
        let set: Arc<dyn HandlerSet> = Arc::new(TestSet { decls: Vec::new() });
        let state = HandlerRegistry::register(&[set]);
        assert!(state.is_empty());
    }
}
