//! Platform entity references.
//!
//! Events and resolved slash-command options carry references to platform
//! entities (users, guilds, channels, roles, attachments). These are plain
//! decoded snapshots handed over by the gateway; Herald never fetches or
//! refreshes them.

use serde::{Deserialize, Serialize};

/// A reference to a platform user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRef {
    /// Platform-assigned user id.
    pub id: String,
    /// Display name at the time the event was decoded.
    pub name: String,
    /// Whether the account is a bot account.
    #[serde(default)]
    pub is_bot: bool,
}

impl UserRef {
    /// Creates a non-bot user reference.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            is_bot: false,
        }
    }

    /// Creates a bot-account user reference.
    pub fn bot(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            is_bot: true,
            ..Self::new(id, name)
        }
    }
}

/// A reference to a guild (server).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuildRef {
    /// Platform-assigned guild id.
    pub id: String,
    /// Guild name.
    pub name: String,
}

impl GuildRef {
    /// Creates a guild reference.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A reference to a message channel.
///
/// Direct-message channels have no name; `name` is `None` for those.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelRef {
    /// Platform-assigned channel id.
    pub id: String,
    /// Channel name, absent for direct-message channels.
    #[serde(default)]
    pub name: Option<String>,
}

impl ChannelRef {
    /// Creates a named (guild) channel reference.
    pub fn named(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: Some(name.into()),
        }
    }

    /// Creates a direct-message channel reference.
    pub fn direct(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
        }
    }
}

/// A reference to a guild role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleRef {
    /// Platform-assigned role id.
    pub id: String,
    /// Role name.
    pub name: String,
}

impl RoleRef {
    /// Creates a role reference.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A mentionable entity: either a user or a role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MentionableRef {
    /// A mentioned user.
    User(UserRef),
    /// A mentioned role.
    Role(RoleRef),
}

impl MentionableRef {
    /// Returns the id of the referenced entity.
    pub fn id(&self) -> &str {
        match self {
            Self::User(u) => &u.id,
            Self::Role(r) => &r.id,
        }
    }
}

/// A reference to an uploaded attachment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentRef {
    /// Platform-assigned attachment id.
    pub id: String,
    /// Original file name.
    pub filename: String,
    /// Download URL.
    pub url: String,
    /// MIME type, if the platform reported one.
    #[serde(default)]
    pub content_type: Option<String>,
    /// Size in bytes.
    pub size: u64,
}
