//! Argument resolution.
//!
//! Builds the [`CallFrame`] for a matched handler immediately before
//! invocation, following the descriptor's fixed parameter plan:
//!
//! - `Event` parameters receive the incoming event itself.
//! - `StringList` parameters (slash commands) receive every string-typed
//!   option value in platform order, regardless of declared names.
//! - `RawContent` parameters (chat messages) receive the message content.
//! - `Option` parameters resolve by name through a fixed, total conversion
//!   table keyed by (option kind, declared target); unsupported pairs fail
//!   with [`ResolveError::UnsupportedConversion`], never a silent coercion.
//!
//! A parameter no rule can satisfy degrades to [`CallArgument::Absent`]
//! with a warning — except value-kind options, whose absence is a
//! [`ResolveError::MissingRequiredOption`] that aborts the invocation
//! before the handler body runs.

use tracing::warn;

use crate::error::ResolveError;
use crate::foundation::event::IncomingEvent;
use crate::foundation::option::{CommandOption, OptionKind, OptionValue};
use crate::routing::descriptor::HandlerDescriptor;
use crate::routing::frame::{CallArgument, CallFrame};
use crate::routing::param::{ParamSpec, ParamTarget, ValueTarget};

/// Resolves the full call frame for one invocation.
pub fn resolve(
    descriptor: &HandlerDescriptor,
    event: &IncomingEvent,
) -> Result<CallFrame, ResolveError> {
    let mut args = Vec::with_capacity(descriptor.params().len());
    for param in descriptor.params() {
        args.push(resolve_param(descriptor, param, event)?);
    }
    Ok(CallFrame::new(args))
}

fn resolve_param(
    descriptor: &HandlerDescriptor,
    param: &ParamSpec,
    event: &IncomingEvent,
) -> Result<CallArgument, ResolveError> {
    match &param.target {
        ParamTarget::Event => Ok(CallArgument::Event(event.clone())),

        ParamTarget::StringList => match event {
            IncomingEvent::SlashCommand(slash) => {
                let strings = slash
                    .options
                    .iter()
                    .filter_map(|opt| match &opt.value {
                        OptionValue::String(s) => Some(s.clone()),
                        _ => None,
                    })
                    .collect();
                Ok(CallArgument::Strings(strings))
            }
            _ => Ok(absent(descriptor, param, "string list on a non-command event")),
        },

        ParamTarget::RawContent => match event {
            IncomingEvent::ChatMessage(message) => {
                Ok(CallArgument::Str(message.content.clone()))
            }
            _ => Ok(absent(descriptor, param, "raw content on a non-message event")),
        },

        ParamTarget::Option(target) => match event {
            IncomingEvent::SlashCommand(slash) => match slash.option(&param.name) {
                Some(option) => convert(option, *target, descriptor.name()),
                None if target.requires_value() => Err(ResolveError::MissingRequiredOption {
                    option: param.name.clone(),
                    handler: descriptor.name().to_string(),
                }),
                None => Ok(absent(descriptor, param, "option not provided")),
            },
            _ => Ok(absent(descriptor, param, "option lookup on a non-command event")),
        },
    }
}

fn absent(descriptor: &HandlerDescriptor, param: &ParamSpec, reason: &str) -> CallArgument {
    warn!(
        handler = %descriptor.name(),
        owner = %descriptor.owner(),
        param = %param.name,
        reason,
        "Parameter could not be resolved, injecting absent value"
    );
    CallArgument::Absent
}

/// The fixed conversion table from a carried option value to a declared
/// parameter target. Total over all (kind, target) pairs: anything not
/// listed is an [`ResolveError::UnsupportedConversion`].
pub fn convert(
    option: &CommandOption,
    target: ValueTarget,
    handler: &str,
) -> Result<CallArgument, ResolveError> {
    let converted = match (&option.value, target) {
        (OptionValue::String(s), ValueTarget::Str) => CallArgument::Str(s.clone()),

        (OptionValue::Integer(i), ValueTarget::Long) => CallArgument::Long(*i),
        // Deliberate lossy narrowing: two's-complement truncation, no
        // overflow check.
        (OptionValue::Integer(i), ValueTarget::Int) => CallArgument::Int(*i as i32),

        (OptionValue::Boolean(b), ValueTarget::Bool) => CallArgument::Bool(*b),

        (OptionValue::Number(n), ValueTarget::Double) => CallArgument::Double(*n),
        (OptionValue::Number(n), ValueTarget::Float) => CallArgument::Float(*n as f32),

        (OptionValue::User(u), ValueTarget::User) => CallArgument::User(u.clone()),
        (OptionValue::Channel(c), ValueTarget::Channel) => CallArgument::Channel(c.clone()),
        (OptionValue::Role(r), ValueTarget::Role) => CallArgument::Role(r.clone()),
        (OptionValue::Mentionable(m), ValueTarget::Mentionable) => {
            CallArgument::Mentionable(m.clone())
        }
        (OptionValue::Attachment(a), ValueTarget::Attachment) => {
            CallArgument::Attachment(a.clone())
        }

        (value, target) => {
            return Err(unsupported(option.name.clone(), value.kind(), target, handler));
        }
    };
    Ok(converted)
}

fn unsupported(
    option: String,
    from: OptionKind,
    to: ValueTarget,
    handler: &str,
) -> ResolveError {
    warn!(
        option = %option,
        %from,
        ?to,
        handler = %handler,
        "Unsupported option conversion"
    );
    ResolveError::UnsupportedConversion {
        option,
        from,
        to,
        handler: handler.to_string(),
    }
}
