//! Handler parameter plans.
//!
//! Each handler declares, at registration time, an ordered list of
//! [`ParamSpec`]s — the resolution plan the engine follows to build the call
//! frame for an invocation. The plan is fixed once registered and never
//! re-derived per call.

use serde::{Deserialize, Serialize};

/// The concrete value type a named option should be converted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueTarget {
    /// Text, passed through from a string option.
    Str,
    /// 64-bit integer, passed through from an integer option.
    Long,
    /// 32-bit integer, narrowed from the platform's 64-bit representation.
    /// The narrowing truncates (two's complement) with no overflow check.
    Int,
    /// Boolean passthrough.
    Bool,
    /// 64-bit float, passed through from a number option.
    Double,
    /// 32-bit float, narrowed from the platform's 64-bit representation.
    Float,
    /// Referenced user, passed through unconverted.
    User,
    /// Referenced channel, passed through unconverted.
    Channel,
    /// Referenced role, passed through unconverted.
    Role,
    /// Referenced user-or-role, passed through unconverted.
    Mentionable,
    /// Referenced attachment, passed through unconverted.
    Attachment,
}

impl ValueTarget {
    /// Whether absence of the option is an error for this target.
    ///
    /// Plain value targets have no absent representation, so a missing
    /// option fails resolution. Reference targets (and text) degrade to the
    /// absent sentinel instead.
    pub fn requires_value(self) -> bool {
        matches!(
            self,
            Self::Long | Self::Int | Self::Bool | Self::Double | Self::Float
        )
    }
}

/// What a declared parameter is resolved from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamTarget {
    /// The incoming event object itself.
    Event,
    /// All string-typed option values of a slash command, in platform order,
    /// regardless of declared option names.
    StringList,
    /// The raw content of a chat message.
    RawContent,
    /// A named slash-command option, converted to the given target type.
    Option(ValueTarget),
}

/// One declared handler parameter: a name plus its resolution target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamSpec {
    /// Parameter name. For [`ParamTarget::Option`] this is the option name
    /// looked up on the event; informational otherwise.
    pub name: String,
    /// Where the value comes from.
    pub target: ParamTarget,
}

impl ParamSpec {
    /// Declares a parameter receiving the event object.
    pub fn event() -> Self {
        Self {
            name: "event".to_string(),
            target: ParamTarget::Event,
        }
    }

    /// Declares a parameter receiving every string option value.
    pub fn string_list() -> Self {
        Self {
            name: "args".to_string(),
            target: ParamTarget::StringList,
        }
    }

    /// Declares a parameter receiving the chat-message content.
    pub fn raw_content() -> Self {
        Self {
            name: "content".to_string(),
            target: ParamTarget::RawContent,
        }
    }

    /// Declares a parameter resolved from the option with the same name.
    pub fn option(name: impl Into<String>, target: ValueTarget) -> Self {
        Self {
            name: name.into(),
            target: ParamTarget::Option(target),
        }
    }
}
