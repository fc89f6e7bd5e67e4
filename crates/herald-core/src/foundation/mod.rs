//! Foundation layer: entity references, option values, and the event model.

pub mod entity;
pub mod event;
pub mod option;

pub use entity::{AttachmentRef, ChannelRef, GuildRef, MentionableRef, RoleRef, UserRef};
pub use event::{ButtonEvent, ChatMessageEvent, EventKind, IncomingEvent, SlashCommandEvent};
pub use option::{CommandOption, OptionKind, OptionValue};
