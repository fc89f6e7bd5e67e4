//! Call frames.
//!
//! A [`CallFrame`] is the ordered list of resolved argument values handed to
//! a handler invocation. Arguments are built by the
//! [`resolver`](super::resolver) from the handler's parameter plan; a
//! parameter no rule could satisfy resolves to [`CallArgument::Absent`]
//! rather than failing the call.

use crate::foundation::entity::{AttachmentRef, ChannelRef, MentionableRef, RoleRef, UserRef};
use crate::foundation::event::IncomingEvent;

/// One resolved call argument.
#[derive(Debug, Clone, PartialEq)]
pub enum CallArgument {
    /// The incoming event object.
    Event(IncomingEvent),
    /// All string option values of a slash command, in platform order.
    Strings(Vec<String>),
    /// Text value.
    Str(String),
    /// 64-bit integer value.
    Long(i64),
    /// 32-bit integer value (narrowed).
    Int(i32),
    /// Boolean value.
    Bool(bool),
    /// 64-bit float value.
    Double(f64),
    /// 32-bit float value (narrowed).
    Float(f32),
    /// Referenced user.
    User(UserRef),
    /// Referenced channel.
    Channel(ChannelRef),
    /// Referenced role.
    Role(RoleRef),
    /// Referenced user-or-role.
    Mentionable(MentionableRef),
    /// Referenced attachment.
    Attachment(AttachmentRef),
    /// The absent-value sentinel injected for unresolvable parameters.
    Absent,
}

impl CallArgument {
    /// Whether this is the absent-value sentinel.
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

/// The ordered argument list for one handler invocation.
#[derive(Debug, Clone, Default)]
pub struct CallFrame {
    args: Vec<CallArgument>,
}

impl CallFrame {
    /// Wraps resolved arguments into a frame.
    pub fn new(args: Vec<CallArgument>) -> Self {
        Self { args }
    }

    /// An empty frame, for zero-parameter handlers.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of arguments in the frame.
    pub fn len(&self) -> usize {
        self.args.len()
    }

    /// Whether the frame carries no arguments.
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// Returns the argument at `index`.
    pub fn get(&self, index: usize) -> Option<&CallArgument> {
        self.args.get(index)
    }

    /// Returns the first event argument in the frame, wherever declared.
    pub fn event(&self) -> Option<&IncomingEvent> {
        self.args.iter().find_map(|arg| match arg {
            CallArgument::Event(event) => Some(event),
            _ => None,
        })
    }

    /// Returns the text value at `index`, if it is one.
    pub fn str(&self, index: usize) -> Option<&str> {
        match self.get(index)? {
            CallArgument::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Returns the string-list value at `index`, if it is one.
    pub fn strings(&self, index: usize) -> Option<&[String]> {
        match self.get(index)? {
            CallArgument::Strings(v) => Some(v.as_slice()),
            _ => None,
        }
    }

    /// Returns the 64-bit integer at `index`, if it is one.
    pub fn long(&self, index: usize) -> Option<i64> {
        match self.get(index)? {
            CallArgument::Long(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the 32-bit integer at `index`, if it is one.
    pub fn int(&self, index: usize) -> Option<i32> {
        match self.get(index)? {
            CallArgument::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the boolean at `index`, if it is one.
    pub fn boolean(&self, index: usize) -> Option<bool> {
        match self.get(index)? {
            CallArgument::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the 64-bit float at `index`, if it is one.
    pub fn double(&self, index: usize) -> Option<f64> {
        match self.get(index)? {
            CallArgument::Double(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the 32-bit float at `index`, if it is one.
    pub fn float(&self, index: usize) -> Option<f32> {
        match self.get(index)? {
            CallArgument::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the user reference at `index`, if it is one.
    pub fn user(&self, index: usize) -> Option<&UserRef> {
        match self.get(index)? {
            CallArgument::User(u) => Some(u),
            _ => None,
        }
    }

    /// Returns the channel reference at `index`, if it is one.
    pub fn channel(&self, index: usize) -> Option<&ChannelRef> {
        match self.get(index)? {
            CallArgument::Channel(c) => Some(c),
            _ => None,
        }
    }

    /// Returns the role reference at `index`, if it is one.
    pub fn role(&self, index: usize) -> Option<&RoleRef> {
        match self.get(index)? {
            CallArgument::Role(r) => Some(r),
            _ => None,
        }
    }

    /// Returns the mentionable reference at `index`, if it is one.
    pub fn mentionable(&self, index: usize) -> Option<&MentionableRef> {
        match self.get(index)? {
            CallArgument::Mentionable(m) => Some(m),
            _ => None,
        }
    }

    /// Returns the attachment reference at `index`, if it is one.
    pub fn attachment(&self, index: usize) -> Option<&AttachmentRef> {
        match self.get(index)? {
            CallArgument::Attachment(a) => Some(a),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::entity::{ChannelRef, UserRef};
    use crate::foundation::event::ButtonEvent;

    #[test]
    fn typed_accessors_match_variants() {
        let frame = CallFrame::new(vec![
            CallArgument::Str("hello".into()),
            CallArgument::Int(7),
            CallArgument::Absent,
        ]);
        assert_eq!(frame.str(0), Some("hello"));
        assert_eq!(frame.int(1), Some(7));
        assert_eq!(frame.str(1), None);
        assert!(frame.get(2).unwrap().is_absent());
        assert_eq!(frame.len(), 3);
    }

    #[test]
    fn event_accessor_finds_event_anywhere() {
        let event = IncomingEvent::Button(ButtonEvent {
            component_id: "ok".into(),
            user: UserRef::new("1", "tester"),
            channel: ChannelRef::direct("9"),
            guild: None,
        });
        let frame = CallFrame::new(vec![
            CallArgument::Absent,
            CallArgument::Event(event.clone()),
        ]);
        assert_eq!(frame.event(), Some(&event));
        assert!(CallFrame::empty().event().is_none());
    }
}
