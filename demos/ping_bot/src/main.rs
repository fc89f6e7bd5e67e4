//! Ping Bot Demo
//!
//! Wires a handler set into a Herald bot and pushes a few synthetic events
//! through the dispatch engine — the same calls an external gateway would
//! make with decoded platform events.
//!
//! # Usage
//!
//! ```bash
//! cargo run --package ping-bot
//! ```

use std::any::Any;
use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use herald::{
    Bot, ButtonEvent, ButtonRule, ChannelRef, ChatMessageEvent, ChatMessageRule, CommandOption,
    GuildRef, HandlerDecl, HandlerSet, IncomingEvent, OptionDecl, OptionKind, OptionValue,
    ParamSpec, SlashCommandEvent, SlashCommandRule, UserRef, ValueTarget,
};
use herald::logging::LoggingBuilder;

// ============================================================================
// Handler Set
// ============================================================================

/// Everything the demo bot reacts to lives in this one set.
struct PingTasks;

impl HandlerSet for PingTasks {
    fn key(&self) -> &str {
        "ping_tasks"
    }

    fn handlers(&self) -> Vec<HandlerDecl> {
        vec![
            // /ping [message] — echoes the optional message back.
            HandlerDecl::new(
                "ping",
                SlashCommandRule::named("ping")
                    .description("Liveness check; echoes your message")
                    .option(OptionDecl::new(
                        "message",
                        OptionKind::String,
                        "text to echo back",
                    )),
            )
            .param(ParamSpec::event())
            .param(ParamSpec::option("message", ValueTarget::Str))
            .handler(|_this: Arc<PingTasks>, frame| async move {
                match frame.str(1) {
                    Some(message) => info!("pong! {message}"),
                    None => info!("pong!"),
                }
                Ok(())
            }),
            // Greets anyone who says hello, unless a bot said it.
            HandlerDecl::new(
                "greet",
                ChatMessageRule::new()
                    .content_contains("hello")
                    .ignore_bots(true),
            )
            .param(ParamSpec::raw_content())
            .handler(|_this: Arc<PingTasks>, frame| async move {
                info!("greeting triggered by: {:?}", frame.str(0));
                Ok(())
            }),
            // Reacts to the "confirm" button only.
            HandlerDecl::new("confirm", ButtonRule::with_id("confirm"))
                .param(ParamSpec::event())
                .handler(|_this: Arc<PingTasks>, frame| async move {
                    if let Some(event) = frame.event()
                        && let Some(button) = event.as_button()
                    {
                        info!("confirmed by {}", button.user.name);
                    }
                    Ok(())
                }),
        ]
    }

    fn as_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync> {
        self
    }
}

// ============================================================================
// Synthetic Events
// ============================================================================

fn user() -> UserRef {
    UserRef::new("1001", "demo-user")
}

fn channel() -> ChannelRef {
    ChannelRef::named("42", "general")
}

fn guild() -> Option<GuildRef> {
    Some(GuildRef::new("7", "Demo Guild"))
}

fn ping_event(message: &str) -> IncomingEvent {
    IncomingEvent::SlashCommand(SlashCommandEvent {
        // Mixed case on purpose: command matching is case-insensitive.
        command: "PING".into(),
        options: vec![CommandOption::new(
            "message",
            OptionValue::String(message.into()),
        )],
        user: user(),
        channel: channel(),
        guild: guild(),
    })
}

fn hello_event() -> IncomingEvent {
    IncomingEvent::ChatMessage(ChatMessageEvent {
        content: "well hello there".into(),
        user: user(),
        channel: channel(),
        guild: guild(),
    })
}

fn confirm_event() -> IncomingEvent {
    IncomingEvent::Button(ButtonEvent {
        component_id: "confirm".into(),
        user: user(),
        channel: channel(),
        guild: guild(),
    })
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    LoggingBuilder::new().init();

    let bot = Bot::builder("demo")
        .name("Ping Bot")
        .handler_set(Arc::new(PingTasks))
        .build();

    // What the gateway would register with the platform at startup.
    println!(
        "published commands:\n{}",
        serde_json::to_string_pretty(bot.commands())?
    );

    for event in [ping_event("anyone home?"), hello_event(), confirm_event()] {
        let report = bot.handle_event(event).await;
        info!(
            matched = report.matched,
            completed = report.completed,
            failures = report.failures.len(),
            "dispatch report"
        );
    }

    Ok(())
}
