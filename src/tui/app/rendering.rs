//! View rendering for the review moderation TUI.

use chrono::{DateTime, Utc};

use crate::i18n::Message;
use crate::markup::sanitize;
use crate::tui::state::{ErrorKey, ReviewMode};

use super::ReviewApp;

impl ReviewApp {
    /// Renders the full frame as plain terminal text.
    pub(crate) fn render_view(&self, now: DateTime<Utc>) -> String {
        let mut sections = vec![self.render_header()];
        if self.reviews.is_empty() {
            sections.push(self.catalog().text(&Message::NoReviews));
        } else {
            sections.push(self.render_review_list());
            sections.push(self.render_selected_item(now));
        }
        sections.push(self.render_status_bar());
        sections.join("\n\n")
    }

    fn render_header(&self) -> String {
        self.addon.as_ref().map_or_else(
            || "Loading listing...".to_owned(),
            |addon| {
                let name = sanitize(&addon.name, &[]).plain_text();
                format!("{name} reviews ({})", self.reviews.len())
            },
        )
    }

    fn render_review_list(&self) -> String {
        let lines: Vec<String> = self
            .reviews
            .iter()
            .enumerate()
            .map(|(index, review)| {
                let prefix = if index == self.cursor { "> " } else { "  " };
                let title = sanitize(review.title.as_deref().unwrap_or("(untitled)"), &[]).plain_text();
                let author = sanitize(&review.author.name, &[]).plain_text();
                let stars = review.rating.map_or_else(String::new, |rating| {
                    let summary = self.catalog().text(&Message::RatedOutOfFive {
                        stars: rating.stars(),
                    });
                    format!(" ({summary})")
                });
                format!("{prefix}{title}{stars} - {author}")
            })
            .collect();
        lines.join("\n")
    }

    fn render_selected_item(&self, now: DateTime<Utc>) -> String {
        let Some(review) = self.selected_review() else {
            return String::new();
        };
        let handle = self.errors.handle(ErrorKey::for_reply(review.id));
        let mut ctx = self.selected_item_context();
        ctx.error_handle = Some(&handle);
        let tree = ctx.view(self.catalog(), now);
        tree.render_to_string()
    }

    fn render_status_bar(&self) -> String {
        if let Some(notice) = self.notice_message() {
            return format!("! {notice}");
        }
        match self.selected_view_state().mode() {
            ReviewMode::ReplyingIdle | ReviewMode::ReplyingSubmitting => {
                "[Enter] Submit  [Esc] Cancel".to_owned()
            }
            ReviewMode::Editing => "[Enter] Done  [Esc] Cancel".to_owned(),
            ReviewMode::Viewing => "[j/k] Move  [q] Quit".to_owned(),
        }
    }
}

#[cfg(test)]
#[path = "rendering_tests.rs"]
mod tests;
