//! Sanitisation boundary between user-authored text and the terminal.
//!
//! Review bodies are attacker-controlled. Nothing they contain may reach the
//! terminal as a control sequence or live markup: sanitisation reduces input
//! to inert text nodes plus an allow-list of formatting (currently only line
//! breaks). ANSI escape sequences and other control characters are stripped.

/// Formatting that may survive sanitisation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllowedTag {
    /// Newlines become explicit line-break nodes.
    LineBreak,
}

/// One sanitised inline node. `Text` content is always inert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineNode {
    /// A run of plain text.
    Text(String),
    /// An explicit line break.
    LineBreak,
}

/// Sanitised inline content, safe to hand to the renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SafeMarkup {
    nodes: Vec<InlineNode>,
}

impl SafeMarkup {
    /// Returns the sanitised nodes in display order.
    #[must_use]
    pub fn nodes(&self) -> &[InlineNode] {
        &self.nodes
    }

    /// Wraps text the application authored itself, bypassing sanitisation.
    ///
    /// Only for trusted strings such as catalogue messages; user-authored
    /// text must go through [`sanitize`].
    #[must_use]
    pub fn from_trusted(text: &str) -> Self {
        Self {
            nodes: vec![InlineNode::Text(text.to_owned())],
        }
    }

    /// Flattens the markup back to plain text, line breaks as `\n`.
    #[must_use]
    pub fn plain_text(&self) -> String {
        let mut output = String::new();
        for node in &self.nodes {
            match node {
                InlineNode::Text(text) => output.push_str(text),
                InlineNode::LineBreak => output.push('\n'),
            }
        }
        output
    }

    fn push_char(&mut self, character: char) {
        if let Some(InlineNode::Text(text)) = self.nodes.last_mut() {
            text.push(character);
        } else {
            self.nodes.push(InlineNode::Text(character.to_string()));
        }
    }

    fn push_break(&mut self) {
        self.nodes.push(InlineNode::LineBreak);
    }
}

/// Sanitises user-authored text into inert inline nodes.
///
/// Newlines (`\n` or `\r\n`) become [`InlineNode::LineBreak`] when
/// [`AllowedTag::LineBreak`] is in `allowed`, and collapse to a single space
/// otherwise. ANSI escape sequences and remaining control characters are
/// dropped; tabs soften to a space. Everything else is carried verbatim as
/// inert text, so markup-looking input such as `<script>` stays visible but
/// can never execute.
#[must_use]
pub fn sanitize(text: &str, allowed: &[AllowedTag]) -> SafeMarkup {
    let breaks_allowed = allowed.contains(&AllowedTag::LineBreak);
    let mut markup = SafeMarkup::default();
    let mut in_escape = false;

    for character in text.chars() {
        if in_escape {
            // CSI and related sequences end on an ASCII letter.
            if character.is_ascii_alphabetic() {
                in_escape = false;
            }
            continue;
        }

        match character {
            '\u{1b}' => in_escape = true,
            '\n' => {
                if breaks_allowed {
                    markup.push_break();
                } else {
                    markup.push_char(' ');
                }
            }
            '\r' => {}
            '\t' => markup.push_char(' '),
            c if c.is_control() => {}
            c => markup.push_char(c),
        }
    }

    markup
}
