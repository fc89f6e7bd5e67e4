//! Match rules.
//!
//! A [`MatchRule`] is the declarative condition attached to a handler at
//! registration time. There is one rule shape per event kind:
//!
//! - [`SlashCommandRule`] — matches on the command name
//! - [`ChatMessageRule`] — a conjunction of optional sub-filters
//! - [`ButtonRule`] — matches a component id, or everything
//!
//! Rules are plain data; evaluation lives in [`matcher`](super::matcher).

use serde::{Deserialize, Serialize};

use crate::foundation::event::EventKind;
use crate::foundation::option::OptionKind;

/// Default description attached to slash commands declared without one.
pub const DEFAULT_DESCRIPTION: &str = "<no description provided>";

/// A declared slash-command option: name, platform kind, and description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionDecl {
    /// Option name, matched against handler parameter names at resolution.
    pub name: String,
    /// The platform type the option is published with.
    pub kind: OptionKind,
    /// Short description shown by the platform UI.
    pub description: String,
}

impl OptionDecl {
    /// Declares an option.
    pub fn new(name: impl Into<String>, kind: OptionKind, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            description: description.into(),
        }
    }
}

/// Match rule for slash-command interactions.
///
/// When `command` is absent the handler's own declared name serves as the
/// command identifier, both for matching and for publication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlashCommandRule {
    /// The command name. The platform only accepts lower-case names;
    /// publication lowercases and warns about anything else.
    pub command: Option<String>,
    /// Description published with the command, truncated to 100 characters.
    pub description: String,
    /// Declared options, in publication order.
    pub options: Vec<OptionDecl>,
}

impl SlashCommandRule {
    /// Rule with an explicitly declared command name.
    pub fn named(command: impl Into<String>) -> Self {
        Self {
            command: Some(command.into()),
            description: DEFAULT_DESCRIPTION.to_string(),
            options: Vec::new(),
        }
    }

    /// Rule without a declared name; the handler's name is used instead.
    pub fn unnamed() -> Self {
        Self {
            command: None,
            description: DEFAULT_DESCRIPTION.to_string(),
            options: Vec::new(),
        }
    }

    /// Sets the published description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Appends a declared option.
    pub fn option(mut self, option: OptionDecl) -> Self {
        self.options.push(option);
        self
    }
}

/// Match rule for chat messages.
///
/// Every populated sub-filter must pass (logical AND); an absent filter is a
/// wildcard on that dimension. `ignore_bots` runs before the sub-filters and
/// short-circuits for bot-authored messages. `ignore_case` folds only the
/// content and name filters — id filters always compare exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessageRule {
    /// Substring the message content must contain.
    pub content_contains: Option<String>,
    /// Guild name the message must originate from.
    pub guild_name: Option<String>,
    /// Guild id the message must originate from.
    pub guild_id: Option<String>,
    /// Channel name the message must originate from. Only guild channels
    /// have names; direct messages never satisfy this filter.
    pub channel_name: Option<String>,
    /// Channel id the message must originate from.
    pub channel_id: Option<String>,
    /// Skip bot-authored messages entirely.
    pub ignore_bots: bool,
    /// Case-insensitive comparison for content and name filters.
    pub ignore_case: bool,
}

impl Default for ChatMessageRule {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatMessageRule {
    /// A rule matching every chat message.
    pub fn new() -> Self {
        Self {
            content_contains: None,
            guild_name: None,
            guild_id: None,
            channel_name: None,
            channel_id: None,
            ignore_bots: false,
            ignore_case: true,
        }
    }

    /// Requires the message content to contain `needle`.
    pub fn content_contains(mut self, needle: impl Into<String>) -> Self {
        self.content_contains = Some(needle.into());
        self
    }

    /// Requires the message to come from the named guild.
    pub fn guild_name(mut self, name: impl Into<String>) -> Self {
        self.guild_name = Some(name.into());
        self
    }

    /// Requires the message to come from the guild with this id.
    pub fn guild_id(mut self, id: impl Into<String>) -> Self {
        self.guild_id = Some(id.into());
        self
    }

    /// Requires the message to come from the named guild channel.
    pub fn channel_name(mut self, name: impl Into<String>) -> Self {
        self.channel_name = Some(name.into());
        self
    }

    /// Requires the message to come from the channel with this id.
    pub fn channel_id(mut self, id: impl Into<String>) -> Self {
        self.channel_id = Some(id.into());
        self
    }

    /// Skips bot-authored messages before any sub-filter runs.
    pub fn ignore_bots(mut self, ignore: bool) -> Self {
        self.ignore_bots = ignore;
        self
    }

    /// Controls case folding for content and name filters.
    pub fn ignore_case(mut self, ignore: bool) -> Self {
        self.ignore_case = ignore;
        self
    }
}

/// Match rule for button interactions.
///
/// A rule without a component id is a catch-all invoked on every button
/// event. A declared id matches exactly, case-sensitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ButtonRule {
    /// The component id to match, or `None` for a catch-all.
    pub component_id: Option<String>,
}

impl ButtonRule {
    /// A catch-all rule matching every button event.
    pub fn any() -> Self {
        Self { component_id: None }
    }

    /// Matches only the button with exactly this component id.
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            component_id: Some(id.into()),
        }
    }
}

/// Tagged union over the per-kind rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MatchRule {
    /// Slash-command rule.
    SlashCommand(SlashCommandRule),
    /// Chat-message rule.
    ChatMessage(ChatMessageRule),
    /// Button rule.
    Button(ButtonRule),
}

impl MatchRule {
    /// The event kind this rule applies to.
    pub fn kind(&self) -> EventKind {
        match self {
            Self::SlashCommand(_) => EventKind::SlashCommand,
            Self::ChatMessage(_) => EventKind::ChatMessage,
            Self::Button(_) => EventKind::Button,
        }
    }
}

impl From<SlashCommandRule> for MatchRule {
    fn from(rule: SlashCommandRule) -> Self {
        Self::SlashCommand(rule)
    }
}

impl From<ChatMessageRule> for MatchRule {
    fn from(rule: ChatMessageRule) -> Self {
        Self::ChatMessage(rule)
    }
}

impl From<ButtonRule> for MatchRule {
    fn from(rule: ButtonRule) -> Self {
        Self::Button(rule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_rule_defaults() {
        let rule = ChatMessageRule::new();
        assert!(!rule.ignore_bots);
        assert!(rule.ignore_case);
        assert!(rule.content_contains.is_none());
    }

    #[test]
    fn rule_kind_follows_variant() {
        assert_eq!(
            MatchRule::from(ButtonRule::any()).kind(),
            EventKind::Button
        );
        assert_eq!(
            MatchRule::from(SlashCommandRule::named("ping")).kind(),
            EventKind::SlashCommand
        );
    }
}
