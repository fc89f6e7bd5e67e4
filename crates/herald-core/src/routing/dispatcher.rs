//! Event dispatcher.
//!
//! The dispatcher drives one event through its terminal states:
//!
//! ```text
//! RECEIVED → MATCHING → (no candidate)        → DROPPED
//!                     → (candidates) → RESOLVING → INVOKING → COMPLETED
//!                                                           → FAILED
//! ```
//!
//! Selection policy differs per event kind:
//!
//! - **Slash commands** stop at the first descriptor whose rule matches, in
//!   registration order — at most one handler runs per invocation. A command
//!   with no matching descriptor is an operator-visible error: the command
//!   was exposed to the platform but has no backing handler.
//! - **Chat messages** and **buttons** fan out: every matching descriptor is
//!   independently resolved and invoked, and one handler's failure never
//!   prevents the others from running.
//!
//! Every failure is contained to a single handler on a single event and
//! converted into an entry on the returned [`DispatchReport`]; the
//! dispatcher itself never panics or aborts on handler failures.

use std::sync::Arc;

use tracing::{Level, debug, error, info, span};

use crate::error::DispatchError;
use crate::foundation::event::{ButtonEvent, IncomingEvent, SlashCommandEvent};
use crate::routing::context::DispatchContext;
use crate::routing::descriptor::HandlerDescriptor;
use crate::routing::{matcher, resolver};

/// Outcome summary for one dispatched event.
#[derive(Debug, Default)]
pub struct DispatchReport {
    /// Number of descriptors whose rules matched.
    pub matched: usize,
    /// Number of handler invocations that completed without error.
    pub completed: usize,
    /// Classified failures, one entry per failing handler.
    pub failures: Vec<DispatchError>,
}

impl DispatchReport {
    /// Whether the event terminated in DROPPED (no candidate matched).
    pub fn is_dropped(&self) -> bool {
        self.matched == 0
    }

    fn record(&mut self, outcome: Result<(), DispatchError>) {
        match outcome {
            Ok(()) => self.completed += 1,
            Err(err) => self.failures.push(err),
        }
    }
}

/// The per-bot event dispatcher.
///
/// Holds a shared [`DispatchContext`]; cheap to clone. Dispatch is invoked
/// once per received event. Matching and resolution are synchronous;
/// only the handler invocation itself is awaited.
#[derive(Clone)]
pub struct Dispatcher {
    ctx: Arc<DispatchContext>,
}

impl Dispatcher {
    /// Creates a dispatcher over the given context.
    pub fn new(ctx: Arc<DispatchContext>) -> Self {
        Self { ctx }
    }

    /// The dispatch context this dispatcher reads.
    pub fn context(&self) -> &Arc<DispatchContext> {
        &self.ctx
    }

    /// Routes one event to its handler(s) and reports the outcome.
    pub async fn dispatch(&self, event: IncomingEvent) -> DispatchReport {
        let span = span!(Level::DEBUG, "dispatch", kind = %event.kind());
        let _enter = span.enter();

        match &event {
            IncomingEvent::SlashCommand(slash) => self.dispatch_slash_command(&event, slash).await,
            IncomingEvent::ChatMessage(_) => self.dispatch_chat_message(&event).await,
            IncomingEvent::Button(button) => self.dispatch_button(&event, button).await,
        }
    }

    /// Slash commands: first matching descriptor in registration order wins.
    async fn dispatch_slash_command(
        &self,
        event: &IncomingEvent,
        slash: &SlashCommandEvent,
    ) -> DispatchReport {
        log_slash_interaction(slash);

        let mut report = DispatchReport::default();
        for descriptor in self.ctx.registry().slash_commands() {
            if matcher::matches(descriptor, event) {
                report.matched = 1;
                report.record(self.invoke(descriptor, event).await);
                return report;
            }
        }

        error!(
            command = %slash.command,
            "Slash command was called but was never declared properly"
        );
        report.failures.push(DispatchError::NoMatchingHandler {
            command: slash.command.clone(),
        });
        report
    }

    /// Chat messages fan out to every matching descriptor.
    async fn dispatch_chat_message(&self, event: &IncomingEvent) -> DispatchReport {
        let mut report = DispatchReport::default();
        for descriptor in self.ctx.registry().chat_messages() {
            if matcher::matches(descriptor, event) {
                report.matched += 1;
                report.record(self.invoke(descriptor, event).await);
            }
        }
        report
    }

    /// Buttons fan out like chat messages.
    async fn dispatch_button(
        &self,
        event: &IncomingEvent,
        button: &ButtonEvent,
    ) -> DispatchReport {
        debug!(component_id = %button.component_id, "Button interaction received");

        let mut report = DispatchReport::default();
        for descriptor in self.ctx.registry().buttons() {
            if matcher::matches(descriptor, event) {
                report.matched += 1;
                report.record(self.invoke(descriptor, event).await);
            }
        }
        report
    }

    /// RESOLVING → INVOKING for one matched descriptor. All failure paths
    /// are classified, logged with full context, and returned — never
    /// propagated as panics.
    async fn invoke(
        &self,
        descriptor: &HandlerDescriptor,
        event: &IncomingEvent,
    ) -> Result<(), DispatchError> {
        let Some(owner) = self.ctx.owner_of(descriptor) else {
            let err = DispatchError::OwnerNotFound {
                owner: descriptor.owner().to_string(),
                handler: descriptor.name().to_string(),
            };
            error!(
                owner = %descriptor.owner(),
                handler = %descriptor.name(),
                "Could not resolve declaring instance for handler"
            );
            return Err(err);
        };

        let frame = match resolver::resolve(descriptor, event) {
            Ok(frame) => frame,
            Err(err) => {
                error!(
                    handler = %descriptor.name(),
                    owner = %descriptor.owner(),
                    %err,
                    "Argument resolution failed, handler will not run"
                );
                return Err(err.into());
            }
        };

        debug!(
            handler = %descriptor.name(),
            owner = %descriptor.owner(),
            args = frame.len(),
            "Invoking handler"
        );

        match (descriptor.callable())(owner, frame).await {
            Ok(()) => Ok(()),
            Err(cause) => {
                error!(
                    handler = %descriptor.name(),
                    owner = %descriptor.owner(),
                    error = %cause,
                    "Handler invocation failed"
                );
                Err(DispatchError::InvocationFailure {
                    handler: descriptor.name().to_string(),
                    owner: descriptor.owner().to_string(),
                    source: cause,
                })
            }
        }
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("handlers", &self.ctx.registry().len())
            .finish()
    }
}

/// Logs every received slash-command interaction with its option values and
/// origin, distinguishing guild channels from direct messages.
fn log_slash_interaction(event: &SlashCommandEvent) {
    let options: Vec<String> = event
        .options
        .iter()
        .map(|opt| opt.value.display_string())
        .collect();
    let channel = event.channel.name.as_deref().unwrap_or(&event.channel.id);

    match &event.guild {
        Some(guild) => info!(
            command = %event.command,
            options = ?options,
            channel = %channel,
            guild = %guild.name,
            user = %event.user.name,
            "Received slash command"
        ),
        None => info!(
            command = %event.command,
            options = ?options,
            channel = %channel,
            user = %event.user.name,
            "Received slash command via direct message"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HandlerError;
    use crate::foundation::entity::{ChannelRef, GuildRef, UserRef};
    use crate::foundation::event::ChatMessageEvent;
    use crate::foundation::option::{CommandOption, OptionValue};
    use crate::routing::descriptor::{HandlerDecl, HandlerSet};
    use crate::routing::param::{ParamSpec, ValueTarget};
    use crate::routing::registry::HandlerRegistry;
    use crate::routing::rule::{ButtonRule, ChatMessageRule, SlashCommandRule};
    use std::any::Any;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// A handler set whose handlers bump named counters.
    struct CountingSet {
        decls: Vec<HandlerDecl>,
    }

    impl HandlerSet for CountingSet {
        fn key(&self) -> &str {
            "counting"
        }

        fn handlers(&self) -> Vec<HandlerDecl> {
            self.decls.clone()
        }

        fn as_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync> {
            self
        }
    }

    fn counting(
        name: &str,
        rule: impl Into<crate::routing::rule::MatchRule>,
        counter: Arc<AtomicUsize>,
    ) -> HandlerDecl {
        HandlerDecl::new(name, rule).handler(move |_this: Arc<CountingSet>, _frame| {
            let counter = Arc::clone(&counter);
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(())
            }
        })
    }

    fn dispatcher_for(decls: Vec<HandlerDecl>) -> Dispatcher {
        let set: Arc<dyn HandlerSet> = Arc::new(CountingSet { decls });
        Dispatcher::new(Arc::new(DispatchContext::build(vec![set])))
    }

    fn slash(command: &str, options: Vec<CommandOption>) -> IncomingEvent {
        IncomingEvent::SlashCommand(crate::foundation::event::SlashCommandEvent {
            command: command.to_string(),
            options,
            user: UserRef::new("1", "tester"),
            channel: ChannelRef::named("10", "general"),
            guild: Some(GuildRef::new("100", "Herald HQ")),
        })
    }

    fn message(content: &str) -> IncomingEvent {
        IncomingEvent::ChatMessage(ChatMessageEvent {
            content: content.to_string(),
            user: UserRef::new("1", "tester"),
            channel: ChannelRef::named("10", "general"),
            guild: Some(GuildRef::new("100", "Herald HQ")),
        })
    }

    fn button(id: &str) -> IncomingEvent {
        IncomingEvent::Button(ButtonEvent {
            component_id: id.to_string(),
            user: UserRef::new("1", "tester"),
            channel: ChannelRef::named("10", "general"),
            guild: None,
        })
    }

    #[tokio::test]
    async fn mixed_case_slash_command_invokes_exactly_once() {
        let counter = Arc::new(AtomicUsize::new(0));
        let dispatcher = dispatcher_for(vec![counting(
            "ping",
            SlashCommandRule::named("ping"),
            Arc::clone(&counter),
        )]);

        let report = dispatcher.dispatch(slash("PING", Vec::new())).await;
        assert_eq!(report.matched, 1);
        assert_eq!(report.completed, 1);
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn unrouted_slash_command_is_dropped() {
        let dispatcher = dispatcher_for(vec![]);
        let report = dispatcher.dispatch(slash("ghost", Vec::new())).await;
        assert!(report.is_dropped());
        assert!(matches!(
            report.failures[0],
            DispatchError::NoMatchingHandler { ref command } if command == "ghost"
        ));
    }

    #[tokio::test]
    async fn slash_dispatch_stops_at_the_first_match() {
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));
        let dispatcher = dispatcher_for(vec![
            counting("a", SlashCommandRule::named("ping"), Arc::clone(&first)),
            counting("b", SlashCommandRule::named("ping"), Arc::clone(&second)),
        ]);

        dispatcher.dispatch(slash("ping", Vec::new())).await;
        assert_eq!(first.load(Ordering::SeqCst), 1);
        assert_eq!(second.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn chat_messages_fan_out_to_every_match() {
        let wildcard = Arc::new(AtomicUsize::new(0));
        let filtered = Arc::new(AtomicUsize::new(0));
        let dispatcher = dispatcher_for(vec![
            counting("wildcard", ChatMessageRule::new(), Arc::clone(&wildcard)),
            counting(
                "hello_only",
                ChatMessageRule::new().content_contains("hello"),
                Arc::clone(&filtered),
            ),
        ]);

        dispatcher.dispatch(message("hello world")).await;
        assert_eq!(wildcard.load(Ordering::SeqCst), 1);
        assert_eq!(filtered.load(Ordering::SeqCst), 1);

        dispatcher.dispatch(message("goodbye")).await;
        assert_eq!(wildcard.load(Ordering::SeqCst), 2);
        assert_eq!(filtered.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn one_failing_chat_handler_does_not_stop_the_rest() {
        let survivor = Arc::new(AtomicUsize::new(0));
        let failing = HandlerDecl::new("failing", ChatMessageRule::new()).handler(
            |_this: Arc<CountingSet>, _frame| async move {
                Err(HandlerError::msg("handler exploded"))
            },
        );
        let dispatcher = dispatcher_for(vec![
            failing,
            counting("survivor", ChatMessageRule::new(), Arc::clone(&survivor)),
        ]);

        let report = dispatcher.dispatch(message("anything")).await;
        assert_eq!(report.matched, 2);
        assert_eq!(report.completed, 1);
        assert_eq!(report.failures.len(), 1);
        assert!(matches!(
            report.failures[0],
            DispatchError::InvocationFailure { .. }
        ));
        assert_eq!(survivor.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn catch_all_and_exact_button_handlers() {
        let global = Arc::new(AtomicUsize::new(0));
        let exact = Arc::new(AtomicUsize::new(0));
        let dispatcher = dispatcher_for(vec![
            counting("global", ButtonRule::any(), Arc::clone(&global)),
            counting("confirm", ButtonRule::with_id("confirm"), Arc::clone(&exact)),
        ]);

        dispatcher.dispatch(button("confirm")).await;
        assert_eq!(global.load(Ordering::SeqCst), 1);
        assert_eq!(exact.load(Ordering::SeqCst), 1);

        dispatcher.dispatch(button("cancel")).await;
        assert_eq!(global.load(Ordering::SeqCst), 2);
        assert_eq!(exact.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn missing_required_option_never_runs_the_handler() {
        let counter = Arc::new(AtomicUsize::new(0));
        let counter_clone = Arc::clone(&counter);
        let decl = HandlerDecl::new("roll", SlashCommandRule::named("roll"))
            .param(ParamSpec::option("count", ValueTarget::Int))
            .handler(move |_this: Arc<CountingSet>, _frame| {
                let counter = Arc::clone(&counter_clone);
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    Ok(())
                }
            });
        let dispatcher = dispatcher_for(vec![decl]);

        let report = dispatcher.dispatch(slash("roll", Vec::new())).await;
        assert_eq!(report.completed, 0);
        assert!(matches!(
            report.failures[0],
            DispatchError::Resolve(crate::error::ResolveError::MissingRequiredOption { .. })
        ));
        assert_eq!(counter.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn resolved_option_reaches_the_handler() {
        let seen: Arc<std::sync::Mutex<Option<String>>> = Arc::new(std::sync::Mutex::new(None));
        let seen_clone = Arc::clone(&seen);
        let decl = HandlerDecl::new("echo", SlashCommandRule::named("echo"))
            .param(ParamSpec::option("message", ValueTarget::Str))
            .handler(move |_this: Arc<CountingSet>, frame| {
                let seen = Arc::clone(&seen_clone);
                async move {
                    *seen.lock().unwrap() = frame.str(0).map(str::to_string);
                    Ok(())
                }
            });
        let dispatcher = dispatcher_for(vec![decl]);

        let event = slash(
            "echo",
            vec![CommandOption::new(
                "message",
                OptionValue::String("hello there".into()),
            )],
        );
        dispatcher.dispatch(event).await;
        assert_eq!(seen.lock().unwrap().as_deref(), Some("hello there"));
    }

    #[tokio::test]
    async fn missing_owner_drops_only_that_descriptor() {
        let survivor = Arc::new(AtomicUsize::new(0));
        let set: Arc<dyn HandlerSet> = Arc::new(CountingSet {
            decls: vec![counting(
                "orphan",
                ChatMessageRule::new(),
                Arc::clone(&survivor),
            )],
        });
        // Build a registry but withhold the owner instance.
        let registry = HandlerRegistry::register(&[set]);
        let ctx = DispatchContext::from_parts(registry, HashMap::new());
        let dispatcher = Dispatcher::new(Arc::new(ctx));

        let report = dispatcher.dispatch(message("anything")).await;
        assert_eq!(report.matched, 1);
        assert_eq!(report.completed, 0);
        assert!(matches!(
            report.failures[0],
            DispatchError::OwnerNotFound { .. }
        ));
        assert_eq!(survivor.load(Ordering::SeqCst), 0);
    }
}
