//! Render tree produced by review components.
//!
//! Components describe what to display as a tree of [`RenderNode`] values;
//! flattening the tree to terminal text is a separate, final step. This keeps
//! affordance and layout decisions testable without scraping strings.

use crate::markup::{InlineNode, SafeMarkup};

/// Width of the indeterminate-length placeholder shown while data loads.
const PLACEHOLDER_WIDTH: usize = 24;

/// Indentation applied to each nested level.
const NESTED_INDENT: &str = "    ";

/// One renderable node in a review item's output tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderNode {
    /// A heading line, e.g. a review title.
    Header(SafeMarkup),
    /// Body text.
    Paragraph(SafeMarkup),
    /// The author/timestamp line under a title.
    Byline(SafeMarkup),
    /// Indeterminate-length placeholder shown while the review loads.
    Placeholder,
    /// Star-rating indicator for a top-level review.
    Rating {
        /// Star count, 1..=5.
        stars: u8,
    },
    /// A user-clickable affordance with its key hint.
    Action {
        /// Localised label.
        label: String,
        /// Key that triggers the affordance.
        key_hint: char,
    },
    /// Inline reply composer shown while replying.
    Composer {
        /// Current draft text.
        draft: String,
        /// Characters still available in the draft.
        remaining: usize,
        /// Submit label ("publish" vs "update" semantics).
        submit_label: String,
        /// Label shown while a submission is outstanding.
        busy_label: String,
        /// Whether a submission is outstanding.
        submitting: bool,
    },
    /// An error surfaced by the error-handler capability.
    ErrorBanner(String),
    /// Ordered children rendered at the same depth.
    Group(Vec<RenderNode>),
    /// A nested review item (the one-level developer reply).
    Nested(Box<RenderNode>),
}

impl RenderNode {
    /// Convenience constructor for a group node.
    #[must_use]
    pub const fn group(children: Vec<Self>) -> Self {
        Self::Group(children)
    }

    /// Flattens the tree into terminal lines.
    #[must_use]
    pub fn render_to_string(&self) -> String {
        let mut lines = Vec::new();
        self.collect_lines(0, &mut lines);
        let mut output = lines.join("\n");
        output.push('\n');
        output
    }

    /// Returns whether any node in the tree satisfies `predicate`.
    #[must_use]
    pub fn any(&self, predicate: &dyn Fn(&Self) -> bool) -> bool {
        if predicate(self) {
            return true;
        }
        match self {
            Self::Group(children) => children.iter().any(|child| child.any(predicate)),
            Self::Nested(child) => child.any(predicate),
            _ => false,
        }
    }

    fn collect_lines(&self, depth: usize, lines: &mut Vec<String>) {
        match self {
            Self::Header(markup) => push_markup_lines(markup, depth, "", lines),
            Self::Paragraph(markup) => push_markup_lines(markup, depth, "", lines),
            Self::Byline(markup) => push_markup_lines(markup, depth, "-- ", lines),
            Self::Placeholder => lines.push(indented(depth, &"\u{2591}".repeat(PLACEHOLDER_WIDTH))),
            Self::Rating { stars } => lines.push(indented(depth, &star_bar(*stars))),
            Self::Action { label, key_hint } => {
                lines.push(indented(depth, &format!("[{key_hint}] {label}")));
            }
            Self::Composer {
                draft,
                remaining,
                submit_label,
                busy_label,
                submitting,
            } => {
                lines.push(indented(depth, &format!("> {draft}\u{258c}")));
                let status = if *submitting {
                    busy_label.clone()
                } else {
                    format!("[Enter] {submit_label}  [Esc] Cancel  ({remaining} left)")
                };
                lines.push(indented(depth, &status));
            }
            Self::ErrorBanner(message) => lines.push(indented(depth, &format!("! {message}"))),
            Self::Group(children) => {
                for child in children {
                    child.collect_lines(depth, lines);
                }
            }
            Self::Nested(child) => child.collect_lines(depth.saturating_add(1), lines),
        }
    }
}

fn indented(depth: usize, content: &str) -> String {
    format!("{}{content}", NESTED_INDENT.repeat(depth))
}

fn push_markup_lines(markup: &SafeMarkup, depth: usize, prefix: &str, lines: &mut Vec<String>) {
    let mut current = String::new();
    current.push_str(prefix);
    for node in markup.nodes() {
        match node {
            InlineNode::Text(text) => current.push_str(text),
            InlineNode::LineBreak => {
                lines.push(indented(depth, &current));
                current = String::new();
            }
        }
    }
    lines.push(indented(depth, &current));
}

fn star_bar(stars: u8) -> String {
    let filled = usize::from(stars.min(5));
    let hollow = 5_usize.saturating_sub(filled);
    let mut bar = "\u{2605}".repeat(filled);
    bar.push_str(&"\u{2606}".repeat(hollow));
    bar
}

#[cfg(test)]
mod tests {
    use crate::markup::{AllowedTag, SafeMarkup, sanitize};

    use super::RenderNode;

    #[test]
    fn paragraph_line_breaks_become_separate_lines() {
        let node = RenderNode::Paragraph(sanitize("one\ntwo", &[AllowedTag::LineBreak]));

        assert_eq!(node.render_to_string(), "one\ntwo\n");
    }

    #[test]
    fn nested_nodes_indent_one_level() {
        let node = RenderNode::group(vec![
            RenderNode::Header(SafeMarkup::from_trusted("Review")),
            RenderNode::Nested(Box::new(RenderNode::Paragraph(SafeMarkup::from_trusted(
                "Reply",
            )))),
        ]);

        assert_eq!(node.render_to_string(), "Review\n    Reply\n");
    }

    #[test]
    fn rating_renders_filled_and_hollow_stars() {
        let node = RenderNode::Rating { stars: 3 };

        assert_eq!(
            node.render_to_string(),
            "\u{2605}\u{2605}\u{2605}\u{2606}\u{2606}\n"
        );
    }

    #[test]
    fn composer_shows_busy_label_while_submitting() {
        let node = RenderNode::Composer {
            draft: "Thanks".to_owned(),
            remaining: 10,
            submit_label: "Publish reply".to_owned(),
            busy_label: "Publishing reply…".to_owned(),
            submitting: true,
        };

        let rendered = node.render_to_string();
        assert!(rendered.contains("Publishing reply…"));
        assert!(!rendered.contains("[Enter]"));
    }

    #[test]
    fn any_walks_nested_groups() {
        let node = RenderNode::group(vec![RenderNode::Nested(Box::new(RenderNode::group(
            vec![RenderNode::Placeholder],
        )))]);

        assert!(node.any(&|candidate| matches!(candidate, RenderNode::Placeholder)));
        assert!(!node.any(&|candidate| matches!(candidate, RenderNode::Rating { .. })));
    }
}
