//! Input handling for the TUI application.
//!
//! Maps terminal key events to application messages. Mapping is
//! context-aware: while the reply composer is open, printable characters
//! feed the draft instead of triggering shortcuts.

use super::messages::AppMsg;

/// Which input surface currently owns the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Browsing the review list.
    Browsing,
    /// The reply composer is open and captures printable input.
    Composing,
}

/// Maps a key event to an application message.
///
/// Returns `None` for unrecognised key events, allowing them to be ignored.
#[must_use]
#[expect(
    clippy::missing_const_for_fn,
    reason = "KeyCode match patterns prevent const evaluation"
)]
pub fn map_key_to_message(
    key: &bubbletea_rs::event::KeyMsg,
    context: InputContext,
) -> Option<AppMsg> {
    use crossterm::event::KeyCode;

    if context == InputContext::Composing {
        return match key.key {
            KeyCode::Char(character) => Some(AppMsg::ComposerInsertChar(character)),
            KeyCode::Backspace => Some(AppMsg::ComposerBackspace),
            KeyCode::Enter => Some(AppMsg::SubmitReply),
            KeyCode::Esc => Some(AppMsg::EscapePressed),
            _ => None,
        };
    }

    match key.key {
        KeyCode::Char('q') => Some(AppMsg::Quit),
        KeyCode::Char('j') | KeyCode::Down => Some(AppMsg::CursorDown),
        KeyCode::Char('k') | KeyCode::Up => Some(AppMsg::CursorUp),
        KeyCode::Home | KeyCode::Char('g') => Some(AppMsg::Home),
        KeyCode::End | KeyCode::Char('G') => Some(AppMsg::End),
        KeyCode::Char('e') => Some(AppMsg::BeginEdit),
        KeyCode::Char('r') => Some(AppMsg::BeginReply),
        KeyCode::Enter => Some(AppMsg::CommitEdit),
        KeyCode::Esc => Some(AppMsg::EscapePressed),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use bubbletea_rs::event::KeyMsg;
    use crossterm::event::{KeyCode, KeyModifiers};
    use rstest::rstest;

    use super::{InputContext, map_key_to_message};
    use crate::tui::messages::AppMsg;

    fn key(code: KeyCode) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers: KeyModifiers::empty(),
        }
    }

    #[rstest]
    #[case(KeyCode::Char('q'))]
    #[case(KeyCode::Char('r'))]
    #[case(KeyCode::Char('e'))]
    fn browsing_shortcuts_map_to_messages(#[case] code: KeyCode) {
        assert!(map_key_to_message(&key(code), InputContext::Browsing).is_some());
    }

    #[test]
    fn printable_keys_feed_the_composer_while_composing() {
        let msg = map_key_to_message(&key(KeyCode::Char('q')), InputContext::Composing);

        assert!(matches!(msg, Some(AppMsg::ComposerInsertChar('q'))));
    }

    #[test]
    fn enter_submits_while_composing() {
        let msg = map_key_to_message(&key(KeyCode::Enter), InputContext::Composing);

        assert!(matches!(msg, Some(AppMsg::SubmitReply)));
    }

    #[test]
    fn escape_always_maps_to_escape() {
        for context in [InputContext::Browsing, InputContext::Composing] {
            let msg = map_key_to_message(&key(KeyCode::Esc), context);
            assert!(matches!(msg, Some(AppMsg::EscapePressed)));
        }
    }

    #[test]
    fn unknown_keys_are_ignored() {
        assert!(map_key_to_message(&key(KeyCode::F(5)), InputContext::Browsing).is_none());
    }
}
