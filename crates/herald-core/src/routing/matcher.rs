//! Filter matching.
//!
//! Evaluates a registered handler's [`MatchRule`] against an incoming event.
//! Matching is a plain synchronous computation with no side effects; the
//! dispatcher decides what to do with the verdicts (first-match-wins for
//! slash commands, fan-out for chat messages and buttons).

use crate::foundation::event::{ButtonEvent, ChatMessageEvent, IncomingEvent, SlashCommandEvent};
use crate::routing::descriptor::HandlerDescriptor;
use crate::routing::rule::{ButtonRule, ChatMessageRule, MatchRule, SlashCommandRule};

/// Evaluates a descriptor's rule against an event.
///
/// Returns `false` when the rule and event kinds disagree.
pub fn matches(descriptor: &HandlerDescriptor, event: &IncomingEvent) -> bool {
    match (descriptor.rule(), event) {
        (MatchRule::SlashCommand(rule), IncomingEvent::SlashCommand(event)) => {
            matches_slash_command(rule, descriptor.name(), event)
        }
        (MatchRule::ChatMessage(rule), IncomingEvent::ChatMessage(event)) => {
            matches_chat_message(rule, event)
        }
        (MatchRule::Button(rule), IncomingEvent::Button(event)) => matches_button(rule, event),
        _ => false,
    }
}

/// Slash-command name matching.
///
/// The incoming command name matches either the declared command under
/// ordinal case-insensitive comparison, or the handler's own name under
/// exact comparison — the fallback identifier for rules declared without a
/// command.
pub fn matches_slash_command(
    rule: &SlashCommandRule,
    handler_name: &str,
    event: &SlashCommandEvent,
) -> bool {
    if let Some(command) = &rule.command
        && event.command.eq_ignore_ascii_case(command)
    {
        return true;
    }
    event.command == handler_name
}

/// Chat-message filter conjunction.
///
/// `ignore_bots` runs first and short-circuits for bot authors; then every
/// populated sub-filter must pass. An absent sub-filter is a wildcard.
pub fn matches_chat_message(rule: &ChatMessageRule, event: &ChatMessageEvent) -> bool {
    if rule.ignore_bots && event.user.is_bot {
        return false;
    }

    matches_content(rule, event)
        && matches_guild_name(rule, event)
        && matches_guild_id(rule, event)
        && matches_channel_name(rule, event)
        && matches_channel_id(rule, event)
}

fn matches_content(rule: &ChatMessageRule, event: &ChatMessageEvent) -> bool {
    let Some(filter) = non_empty(&rule.content_contains) else {
        return true;
    };
    if rule.ignore_case {
        event
            .content
            .to_lowercase()
            .contains(&filter.to_lowercase())
    } else {
        event.content.contains(filter)
    }
}

fn matches_guild_name(rule: &ChatMessageRule, event: &ChatMessageEvent) -> bool {
    let Some(expected) = non_empty(&rule.guild_name) else {
        return true;
    };
    // Direct messages carry no guild; fail closed.
    let Some(guild) = &event.guild else {
        return false;
    };
    eq_folded(&guild.name, expected, rule.ignore_case)
}

fn matches_guild_id(rule: &ChatMessageRule, event: &ChatMessageEvent) -> bool {
    let Some(expected) = non_empty(&rule.guild_id) else {
        return true;
    };
    let Some(guild) = &event.guild else {
        return false;
    };
    // Ids compare exactly regardless of ignore_case.
    guild.id == expected
}

fn matches_channel_name(rule: &ChatMessageRule, event: &ChatMessageEvent) -> bool {
    let Some(expected) = non_empty(&rule.channel_name) else {
        return true;
    };
    // Only guild channels have a comparable name; direct messages fail closed.
    if !event.is_from_guild() {
        return false;
    }
    match &event.channel.name {
        Some(name) => eq_folded(name, expected, rule.ignore_case),
        None => false,
    }
}

fn matches_channel_id(rule: &ChatMessageRule, event: &ChatMessageEvent) -> bool {
    let Some(expected) = non_empty(&rule.channel_id) else {
        return true;
    };
    event.channel.id == expected
}

/// Button matching: a rule without an id matches every button event; a
/// declared id matches exactly, case-sensitively.
pub fn matches_button(rule: &ButtonRule, event: &ButtonEvent) -> bool {
    match &rule.component_id {
        None => true,
        Some(id) => event.component_id == *id,
    }
}

fn non_empty(filter: &Option<String>) -> Option<&str> {
    filter.as_deref().filter(|f| !f.is_empty())
}

fn eq_folded(actual: &str, expected: &str, ignore_case: bool) -> bool {
    if ignore_case {
        actual.to_lowercase() == expected.to_lowercase()
    } else {
        actual == expected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::entity::{ChannelRef, GuildRef, UserRef};

    fn slash_event(command: &str) -> SlashCommandEvent {
        SlashCommandEvent {
            command: command.to_string(),
            options: Vec::new(),
            user: UserRef::new("1", "tester"),
            channel: ChannelRef::named("10", "general"),
            guild: None,
        }
    }

    fn guild_message(content: &str) -> ChatMessageEvent {
        ChatMessageEvent {
            content: content.to_string(),
            user: UserRef::new("1", "tester"),
            channel: ChannelRef::named("10", "general"),
            guild: Some(GuildRef::new("100", "Herald HQ")),
        }
    }

    fn direct_message(content: &str) -> ChatMessageEvent {
        ChatMessageEvent {
            content: content.to_string(),
            user: UserRef::new("1", "tester"),
            channel: ChannelRef::direct("55"),
            guild: None,
        }
    }

    #[test]
    fn slash_name_is_case_insensitive() {
        let rule = SlashCommandRule::named("ping");
        assert!(matches_slash_command(&rule, "do_ping", &slash_event("ping")));
        assert!(matches_slash_command(&rule, "do_ping", &slash_event("PING")));
        assert!(matches_slash_command(&rule, "do_ping", &slash_event("PiNg")));
        assert!(!matches_slash_command(&rule, "do_ping", &slash_event("pong")));
    }

    #[test]
    fn slash_falls_back_to_handler_name_exactly() {
        let rule = SlashCommandRule::unnamed();
        assert!(matches_slash_command(&rule, "ping", &slash_event("ping")));
        // The fallback identifier compares exactly, unlike the declared name.
        assert!(!matches_slash_command(&rule, "ping", &slash_event("PING")));
    }

    #[test]
    fn chat_filters_combine_with_and() {
        let rule = ChatMessageRule::new()
            .content_contains("hello")
            .guild_name("Herald HQ")
            .channel_name("random");

        // Content and guild pass, channel does not.
        assert!(!matches_chat_message(&rule, &guild_message("hello world")));

        let rule = ChatMessageRule::new()
            .content_contains("hello")
            .guild_name("Herald HQ")
            .channel_name("general");
        assert!(matches_chat_message(&rule, &guild_message("hello world")));
    }

    #[test]
    fn ignore_bots_short_circuits_before_sub_filters() {
        let rule = ChatMessageRule::new()
            .content_contains("hello")
            .ignore_bots(true);
        let mut event = guild_message("hello world");
        event.user = UserRef::bot("2", "helper-bot");
        // Every other filter would match; the pre-filter still rejects.
        assert!(!matches_chat_message(&rule, &event));
    }

    #[test]
    fn content_filter_respects_case_flag() {
        let event = guild_message("Hello World");
        assert!(matches_chat_message(
            &ChatMessageRule::new().content_contains("hello"),
            &event
        ));
        assert!(!matches_chat_message(
            &ChatMessageRule::new()
                .content_contains("hello")
                .ignore_case(false),
            &event
        ));
    }

    #[test]
    fn guild_id_filter_never_folds_case() {
        let mut event = guild_message("hi");
        event.guild = Some(GuildRef::new("abcDEF", "Herald HQ"));
        assert!(matches_chat_message(
            &ChatMessageRule::new().guild_id("abcDEF"),
            &event
        ));
        // ignore_case defaults to true but must not apply to ids.
        assert!(!matches_chat_message(
            &ChatMessageRule::new().guild_id("ABCDEF"),
            &event
        ));
    }

    #[test]
    fn channel_name_fails_closed_for_direct_messages() {
        let rule = ChatMessageRule::new().channel_name("general");
        assert!(!matches_chat_message(&rule, &direct_message("hello")));
    }

    #[test]
    fn guild_filters_fail_closed_for_direct_messages() {
        assert!(!matches_chat_message(
            &ChatMessageRule::new().guild_name("Herald HQ"),
            &direct_message("hello")
        ));
        assert!(!matches_chat_message(
            &ChatMessageRule::new().guild_id("100"),
            &direct_message("hello")
        ));
    }

    #[test]
    fn channel_id_filter_applies_to_direct_messages() {
        let rule = ChatMessageRule::new().channel_id("55");
        assert!(matches_chat_message(&rule, &direct_message("hello")));
        let rule = ChatMessageRule::new().channel_id("56");
        assert!(!matches_chat_message(&rule, &direct_message("hello")));
    }

    #[test]
    fn empty_string_filter_is_a_wildcard() {
        let rule = ChatMessageRule::new().content_contains("");
        assert!(matches_chat_message(&rule, &guild_message("anything")));
    }

    fn button_event(id: &str) -> ButtonEvent {
        ButtonEvent {
            component_id: id.to_string(),
            user: UserRef::new("1", "tester"),
            channel: ChannelRef::named("10", "general"),
            guild: None,
        }
    }

    #[test]
    fn button_without_id_matches_everything() {
        let rule = ButtonRule::any();
        assert!(matches_button(&rule, &button_event("confirm")));
        assert!(matches_button(&rule, &button_event("cancel")));
    }

    #[test]
    fn button_id_matches_exactly_and_case_sensitively() {
        let rule = ButtonRule::with_id("confirm");
        assert!(matches_button(&rule, &button_event("confirm")));
        assert!(!matches_button(&rule, &button_event("Confirm")));
        assert!(!matches_button(&rule, &button_event("cancel")));
    }
}
