//! Slash-command publication metadata.
//!
//! At startup the external gateway registers every declared slash command
//! with the platform so it shows up in the client's command picker. The
//! engine's only part in this is describing the commands: name, description,
//! and declared options. Publication is a one-time side effect, not part of
//! steady-state dispatch.
//!
//! Platform constraints applied here:
//!
//! - command names must be lower-case — declared names are lowercased, with
//!   a log line pointing at the offending declaration;
//! - descriptions are capped at 100 characters — longer ones are truncated,
//!   not rejected.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::foundation::option::OptionKind;
use crate::routing::registry::RegistryState;
use crate::routing::rule::MatchRule;

/// Maximum description length the platform accepts.
pub const MAX_DESCRIPTION_LEN: usize = 100;

/// A declared option as published to the platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionData {
    /// Option name.
    pub name: String,
    /// Platform option type.
    pub kind: OptionKind,
    /// Short description.
    pub description: String,
}

/// One publishable slash command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandData {
    /// Lower-case command name.
    pub name: String,
    /// Description, at most [`MAX_DESCRIPTION_LEN`] characters.
    pub description: String,
    /// Declared options in publication order.
    pub options: Vec<OptionData>,
}

/// Describes every registered slash command for gateway publication.
pub fn command_data(registry: &RegistryState) -> Vec<CommandData> {
    registry
        .slash_commands()
        .iter()
        .filter_map(|descriptor| {
            let MatchRule::SlashCommand(rule) = descriptor.rule() else {
                return None;
            };

            let name = match &rule.command {
                Some(command) => {
                    if command.chars().any(|c| c.is_uppercase()) {
                        info!(
                            command = %command,
                            "The platform does not allow upper-case letters in slash commands; publishing the lower-cased name"
                        );
                    }
                    command.to_lowercase()
                }
                None => {
                    debug!(
                        handler = %descriptor.name(),
                        "No command name declared, using the handler name"
                    );
                    descriptor.name().to_lowercase()
                }
            };

            Some(CommandData {
                description: clamp_description(&name, &rule.description),
                name,
                options: rule
                    .options
                    .iter()
                    .map(|opt| OptionData {
                        name: opt.name.clone(),
                        kind: opt.kind,
                        description: clamp_description(&opt.name, &opt.description),
                    })
                    .collect(),
            })
        })
        .collect()
}

/// Truncates a description to the platform limit. Lossy and logged, never
/// an error.
fn clamp_description(subject: &str, description: &str) -> String {
    if description.chars().count() <= MAX_DESCRIPTION_LEN {
        return description.to_string();
    }
    info!(
        subject = %subject,
        "Description exceeds {MAX_DESCRIPTION_LEN} characters and will be truncated"
    );
    description.chars().take(MAX_DESCRIPTION_LEN).collect()
}
