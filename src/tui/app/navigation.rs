//! Cursor movement over the review list.

use bubbletea_rs::Cmd;

use crate::tui::messages::AppMsg;

use super::ReviewApp;

impl ReviewApp {
    /// Moves the cursor for a navigation message, clamping to the list.
    pub(super) fn handle_navigation_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        if self.reviews.is_empty() {
            return None;
        }
        let last = self.reviews.len() - 1;
        self.cursor = match msg {
            AppMsg::CursorUp => self.cursor.saturating_sub(1),
            AppMsg::CursorDown => self.cursor.saturating_add(1).min(last),
            AppMsg::Home => 0,
            AppMsg::End => last,
            _ => self.cursor,
        };
        self.notice = None;
        None
    }
}

#[cfg(test)]
#[path = "navigation_tests.rs"]
mod tests;
