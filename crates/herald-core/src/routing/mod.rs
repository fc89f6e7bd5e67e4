//! Routing layer: rules, descriptors, registry, matching, resolution, and
//! dispatch.

pub mod context;
pub mod descriptor;
pub mod dispatcher;
pub mod frame;
pub mod matcher;
pub mod param;
pub mod publish;
pub mod registry;
pub mod resolver;
pub mod rule;

pub use context::DispatchContext;
pub use descriptor::{HandlerDecl, HandlerDescriptor, HandlerFn, HandlerSet, OwnerInstance};
pub use dispatcher::{DispatchReport, Dispatcher};
pub use frame::{CallArgument, CallFrame};
pub use param::{ParamSpec, ParamTarget, ValueTarget};
pub use publish::{CommandData, MAX_DESCRIPTION_LEN, OptionData, command_data};
pub use registry::{HandlerRegistry, RegistryState};
pub use rule::{ButtonRule, ChatMessageRule, MatchRule, OptionDecl, SlashCommandRule};
