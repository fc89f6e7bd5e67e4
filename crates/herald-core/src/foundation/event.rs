//! Incoming event model.
//!
//! The gateway decodes every platform interaction into one of three event
//! shapes before it reaches the routing engine:
//!
//! - [`SlashCommandEvent`] — a slash command was invoked
//! - [`ChatMessageEvent`] — a chat message was received
//! - [`ButtonEvent`] — a message component (button) was clicked
//!
//! [`IncomingEvent`] is the tagged union the dispatcher consumes. No partial
//! or streaming decode happens here; events arrive complete.

use serde::{Deserialize, Serialize};

use super::entity::{ChannelRef, GuildRef, UserRef};
use super::option::CommandOption;

/// High-level classification of an incoming event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// A slash-command interaction.
    SlashCommand,
    /// A received chat message.
    ChatMessage,
    /// A button interaction.
    Button,
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::SlashCommand => "slash_command",
            Self::ChatMessage => "chat_message",
            Self::Button => "button",
        };
        f.write_str(name)
    }
}

/// A decoded slash-command interaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlashCommandEvent {
    /// The invoked command name as reported by the platform.
    pub command: String,
    /// Options in the order the platform reported them.
    #[serde(default)]
    pub options: Vec<CommandOption>,
    /// The invoking user.
    pub user: UserRef,
    /// The channel the command was invoked in.
    pub channel: ChannelRef,
    /// The guild, absent when invoked via direct message.
    #[serde(default)]
    pub guild: Option<GuildRef>,
}

impl SlashCommandEvent {
    /// Looks up an option by name.
    pub fn option(&self, name: &str) -> Option<&CommandOption> {
        self.options.iter().find(|o| o.name == name)
    }
}

/// A decoded chat message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessageEvent {
    /// Message content.
    pub content: String,
    /// The author. `user.is_bot` distinguishes bot-authored messages.
    pub user: UserRef,
    /// The channel the message was sent in.
    pub channel: ChannelRef,
    /// The guild, absent for direct messages.
    #[serde(default)]
    pub guild: Option<GuildRef>,
}

impl ChatMessageEvent {
    /// Returns `true` when the message was sent in a guild channel.
    pub fn is_from_guild(&self) -> bool {
        self.guild.is_some()
    }
}

/// A decoded button interaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ButtonEvent {
    /// The component id the button was created with.
    pub component_id: String,
    /// The clicking user.
    pub user: UserRef,
    /// The channel containing the message the button is attached to.
    pub channel: ChannelRef,
    /// The guild, absent in direct messages.
    #[serde(default)]
    pub guild: Option<GuildRef>,
}

/// The tagged union of all decoded events the dispatcher consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum IncomingEvent {
    /// A slash-command interaction.
    SlashCommand(SlashCommandEvent),
    /// A received chat message.
    ChatMessage(ChatMessageEvent),
    /// A button interaction.
    Button(ButtonEvent),
}

impl IncomingEvent {
    /// Returns the high-level classification of this event.
    pub fn kind(&self) -> EventKind {
        match self {
            Self::SlashCommand(_) => EventKind::SlashCommand,
            Self::ChatMessage(_) => EventKind::ChatMessage,
            Self::Button(_) => EventKind::Button,
        }
    }

    /// Returns the inner slash-command event, if that is what this is.
    pub fn as_slash_command(&self) -> Option<&SlashCommandEvent> {
        match self {
            Self::SlashCommand(e) => Some(e),
            _ => None,
        }
    }

    /// Returns the inner chat-message event, if that is what this is.
    pub fn as_chat_message(&self) -> Option<&ChatMessageEvent> {
        match self {
            Self::ChatMessage(e) => Some(e),
            _ => None,
        }
    }

    /// Returns the inner button event, if that is what this is.
    pub fn as_button(&self) -> Option<&ButtonEvent> {
        match self {
            Self::Button(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SlashCommandEvent> for IncomingEvent {
    fn from(event: SlashCommandEvent) -> Self {
        Self::SlashCommand(event)
    }
}

impl From<ChatMessageEvent> for IncomingEvent {
    fn from(event: ChatMessageEvent) -> Self {
        Self::ChatMessage(event)
    }
}

impl From<ButtonEvent> for IncomingEvent {
    fn from(event: ButtonEvent) -> Self {
        Self::Button(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::option::OptionValue;

    fn slash(command: &str) -> SlashCommandEvent {
        SlashCommandEvent {
            command: command.to_string(),
            options: vec![CommandOption::new(
                "message",
                OptionValue::String("hi".into()),
            )],
            user: UserRef::new("1", "tester"),
            channel: ChannelRef::named("10", "general"),
            guild: Some(GuildRef::new("100", "Test Guild")),
        }
    }

    #[test]
    fn option_lookup_by_name() {
        let event = slash("ping");
        assert!(event.option("message").is_some());
        assert!(event.option("missing").is_none());
    }

    #[test]
    fn kind_matches_variant() {
        assert_eq!(
            IncomingEvent::from(slash("ping")).kind(),
            EventKind::SlashCommand
        );
    }

    #[test]
    fn direct_message_is_not_from_guild() {
        let event = ChatMessageEvent {
            content: "hello".into(),
            user: UserRef::new("1", "tester"),
            channel: ChannelRef::direct("55"),
            guild: None,
        };
        assert!(!event.is_from_guild());
    }
}
