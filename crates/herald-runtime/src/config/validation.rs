//! Configuration validation utilities.

use std::collections::HashSet;

use super::error::{ConfigError, ConfigResult};
use super::schema::{BotConfig, HeraldConfig, LogOutput};

/// Validates the entire configuration.
pub fn validate_config(config: &HeraldConfig) -> ConfigResult<()> {
    validate_logging_config(config)?;
    validate_bots_config(&config.bots)?;
    Ok(())
}

/// Validates logging settings.
fn validate_logging_config(config: &HeraldConfig) -> ConfigResult<()> {
    if config.logging.output == LogOutput::File && config.logging.file_path.is_none() {
        return Err(ConfigError::missing_field("logging.file_path"));
    }
    Ok(())
}

/// Validates all bot configurations.
fn validate_bots_config(bots: &[BotConfig]) -> ConfigResult<()> {
    let mut seen_ids = HashSet::new();

    for bot in bots {
        if !seen_ids.insert(&bot.id) {
            return Err(ConfigError::DuplicateBotId(bot.id.clone()));
        }
        validate_bot_config(bot)?;
    }

    Ok(())
}

/// Validates a single bot configuration.
fn validate_bot_config(bot: &BotConfig) -> ConfigResult<()> {
    if bot.id.is_empty() {
        return Err(ConfigError::missing_field("bot.id"));
    }

    if bot.id.contains(' ') {
        return Err(ConfigError::validation(format!(
            "Bot id '{}' cannot contain spaces",
            bot.id
        )));
    }

    if bot.token.is_empty() {
        return Err(ConfigError::missing_field(format!("bots.{}.token", bot.id)));
    }

    if let Some(activity) = &bot.activity
        && activity.text.is_empty()
    {
        return Err(ConfigError::validation(format!(
            "Bot '{}' declares an activity with empty text",
            bot.id
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{ActivityConfig, ActivityKind};

    fn bot(id: &str, token: &str) -> BotConfig {
        BotConfig {
            id: id.to_string(),
            name: None,
            token: token.to_string(),
            activity: None,
            handler_sets: Vec::new(),
            enabled: true,
            settings: Default::default(),
        }
    }

    #[test]
    fn accepts_a_minimal_config() {
        let config = HeraldConfig {
            bots: vec![bot("main", "secret")],
            ..Default::default()
        };
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn rejects_duplicate_bot_ids() {
        let config = HeraldConfig {
            bots: vec![bot("main", "a"), bot("main", "b")],
            ..Default::default()
        };
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::DuplicateBotId(id)) if id == "main"
        ));
    }

    #[test]
    fn rejects_empty_token() {
        let config = HeraldConfig {
            bots: vec![bot("main", "")],
            ..Default::default()
        };
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::MissingField { .. })
        ));
    }

    #[test]
    fn rejects_empty_activity_text() {
        let mut b = bot("main", "secret");
        b.activity = Some(ActivityConfig {
            kind: ActivityKind::Playing,
            text: String::new(),
        });
        let config = HeraldConfig {
            bots: vec![b],
            ..Default::default()
        };
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::ValidationError { .. })
        ));
    }

    #[test]
    fn file_output_requires_a_path() {
        let mut config = HeraldConfig::default();
        config.logging.output = LogOutput::File;
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::MissingField { field }) if field == "logging.file_path"
        ));
    }
}
