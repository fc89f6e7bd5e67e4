//! Slash-command option values.
//!
//! A slash-command interaction carries zero or more options, each a named,
//! typed value already decoded by the gateway. [`OptionKind`] enumerates the
//! platform's option types; [`OptionValue`] carries the decoded value for
//! each kind. The two always agree: the kind of a [`CommandOption`] is
//! derived from its value, never stored separately.

use serde::{Deserialize, Serialize};

use super::entity::{AttachmentRef, ChannelRef, MentionableRef, RoleRef, UserRef};

/// The platform-level type of a slash-command option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionKind {
    /// Free-form text.
    String,
    /// Whole number (the platform transports these as 64-bit).
    Integer,
    /// True/false flag.
    Boolean,
    /// A user picked from the guild.
    User,
    /// A channel picked from the guild.
    Channel,
    /// A role picked from the guild.
    Role,
    /// A user or role.
    Mentionable,
    /// Floating-point number (transported as 64-bit).
    Number,
    /// An uploaded file.
    Attachment,
}

impl std::fmt::Display for OptionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::User => "user",
            Self::Channel => "channel",
            Self::Role => "role",
            Self::Mentionable => "mentionable",
            Self::Number => "number",
            Self::Attachment => "attachment",
        };
        f.write_str(name)
    }
}

/// A decoded option value, one variant per [`OptionKind`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionValue {
    /// Free-form text.
    String(String),
    /// Whole number.
    Integer(i64),
    /// True/false flag.
    Boolean(bool),
    /// Floating-point number.
    Number(f64),
    /// Referenced user.
    User(UserRef),
    /// Referenced channel.
    Channel(ChannelRef),
    /// Referenced role.
    Role(RoleRef),
    /// Referenced user or role.
    Mentionable(MentionableRef),
    /// Uploaded attachment.
    Attachment(AttachmentRef),
}

impl OptionValue {
    /// Returns the [`OptionKind`] this value belongs to.
    pub fn kind(&self) -> OptionKind {
        match self {
            Self::String(_) => OptionKind::String,
            Self::Integer(_) => OptionKind::Integer,
            Self::Boolean(_) => OptionKind::Boolean,
            Self::Number(_) => OptionKind::Number,
            Self::User(_) => OptionKind::User,
            Self::Channel(_) => OptionKind::Channel,
            Self::Role(_) => OptionKind::Role,
            Self::Mentionable(_) => OptionKind::Mentionable,
            Self::Attachment(_) => OptionKind::Attachment,
        }
    }

    /// Renders the value as display text, used for interaction logging.
    pub fn display_string(&self) -> String {
        match self {
            Self::String(s) => s.clone(),
            Self::Integer(i) => i.to_string(),
            Self::Boolean(b) => b.to_string(),
            Self::Number(n) => n.to_string(),
            Self::User(u) => u.name.clone(),
            Self::Channel(c) => c.name.clone().unwrap_or_else(|| c.id.clone()),
            Self::Role(r) => r.name.clone(),
            Self::Mentionable(m) => m.id().to_string(),
            Self::Attachment(a) => a.filename.clone(),
        }
    }
}

/// A named option as it arrived on a slash-command interaction.
///
/// The order of options on an event is the order the platform reported them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandOption {
    /// Option name, unique within one interaction.
    pub name: String,
    /// The decoded value.
    pub value: OptionValue,
}

impl CommandOption {
    /// Creates a named option.
    pub fn new(name: impl Into<String>, value: OptionValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// Returns the platform type of this option.
    pub fn kind(&self) -> OptionKind {
        self.value.kind()
    }
}
