//! `Model` trait implementation for the review moderation TUI.
//!
//! Handles initialisation from module-level seed storage, update dispatch,
//! and viewport normalisation of the rendered frame.

use std::any::Any;

use bubbletea_rs::{Cmd, Model};
use chrono::Utc;
use unicode_width::UnicodeWidthChar;

use super::ReviewApp;
use crate::tui::input::map_key_to_message;
use crate::tui::messages::AppMsg;

impl Model for ReviewApp {
    fn init() -> (Self, Option<Cmd>) {
        let model = crate::tui::get_initial_listing().map_or_else(Self::empty, |seed| {
            let gateway = crate::tui::get_reply_gateway();
            let reply_max_length = crate::tui::get_reply_max_length();
            Self::new(seed, gateway, reply_max_length)
        });
        (model, None)
    }

    fn update(&mut self, msg: Box<dyn Any + Send>) -> Option<Cmd> {
        if let Some(app_msg) = msg.downcast_ref::<AppMsg>() {
            return self.handle_message(app_msg);
        }

        if let Some(key_msg) = msg.downcast_ref::<bubbletea_rs::event::KeyMsg>() {
            let mapped = map_key_to_message(key_msg, self.input_context());
            if let Some(app_msg) = mapped {
                return self.handle_message(&app_msg);
            }
            return None;
        }

        if let Some(size_msg) = msg.downcast_ref::<bubbletea_rs::event::WindowSizeMsg>() {
            return self.handle_message(&AppMsg::WindowResized {
                width: size_msg.width,
                height: size_msg.height,
            });
        }

        None
    }

    fn view(&self) -> String {
        self.normalise_viewport(&self.render_view(Utc::now()))
    }
}

impl ReviewApp {
    /// Normalises the rendered frame to terminal dimensions.
    ///
    /// Rows are clamped to one column less than terminal width to avoid
    /// autowrap behaviour, and padded with spaces so rows shorter than the
    /// previous frame do not leave stale trailing cells after resize.
    fn normalise_viewport(&self, output: &str) -> String {
        let width = self.width.max(1) as usize;
        let safe_width = width.saturating_sub(1).max(1);
        let height = self.height.max(1) as usize;

        let mut lines: Vec<String> = output
            .lines()
            .map(|line| pad_or_truncate_line(line, safe_width))
            .collect();
        lines.truncate(height);

        let missing = height.saturating_sub(lines.len());
        let blank = " ".repeat(safe_width);
        lines.extend(std::iter::repeat_with(|| blank.clone()).take(missing));

        let mut normalised = lines.join("\n");
        normalised.push('\n');
        normalised
    }
}

/// Pads or truncates one line to `width` display columns.
///
/// Frames are plain text here; styled escape sequences never survive the
/// markup sanitiser, so column accounting only needs character widths.
fn pad_or_truncate_line(line: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }

    let mut output = String::new();
    let mut visible_width = 0usize;

    for ch in line.chars() {
        let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if char_width == 0 {
            output.push(ch);
            continue;
        }

        if visible_width.saturating_add(char_width) > width {
            break;
        }

        output.push(ch);
        visible_width = visible_width.saturating_add(char_width);
    }

    if visible_width < width {
        output.push_str(&" ".repeat(width - visible_width));
    }

    output
}
