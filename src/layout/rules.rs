//! Horizontal rules: section titles, banners and dividers.

use crate::style::settings::{BANNER_WIDTH, DIVIDER_WIDTH, RULE_DIVIDER, RULE_TITLE, TITLE_PADDING};
use crate::style::{compose, Attribute, Color};
use crate::text::{display_width, repeat_clamped, signed_diff};

/// Input for [`render_banner`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerSpec {
    pub message: String,
    /// Optional heading printed above the message, between rules.
    pub title: String,
    pub width: usize,
}

impl BannerSpec {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            title: String::new(),
            width: BANNER_WIDTH,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }
}

/// Input for [`render_divider`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DividerSpec {
    pub message: String,
    pub width: usize,
}

impl DividerSpec {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            width: DIVIDER_WIDTH,
        }
    }

    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn render(&self) -> String {
        render_divider(&self.message, self.width)
    }
}

/// Bold, colored title framed by `=` rules `TITLE_PADDING` cells wider
/// than the title.
pub fn render_title(title: &str, color: Color) -> String {
    let rule = repeat_clamped(RULE_TITLE, (display_width(title) + TITLE_PADDING) as isize);
    let indent = " ".repeat(TITLE_PADDING / 2);
    let style = [Attribute::Bold];

    let mut out = String::new();
    for line in [rule.clone(), format!("{indent}{title}"), rule] {
        out.push_str(&compose(&line, Some(color), None, &style));
        out.push('\n');
    }
    out
}

/// One rule line of `width` cells, with `message` set in the middle when
/// present.
///
/// Both sides get `(width - len - 2) / 2` rule characters, so an odd
/// remainder leaves the line one cell short.
pub fn render_divider(message: &str, width: usize) -> String {
    if message.is_empty() {
        return format!("{}\n", repeat_clamped(RULE_DIVIDER, width as isize));
    }
    let pad = signed_diff(width, display_width(message) + 2) / 2;
    if pad <= 0 {
        tracing::trace!(
            width,
            message_width = display_width(message),
            "divider message fills the width"
        );
    }
    let side = repeat_clamped(RULE_DIVIDER, pad);
    format!("{side} {message} {side}\n")
}

/// Message centered by left padding, closed by a `=` rule; a title adds a
/// leading rule and a centered bold heading.
pub fn render_banner(spec: &BannerSpec) -> String {
    let rule = repeat_clamped(RULE_TITLE, spec.width as isize);
    let mut out = String::new();

    if !spec.title.is_empty() {
        out.push_str(&rule);
        out.push('\n');
        out.push_str(&left_pad_centered(
            &compose(&spec.title, None, None, &[Attribute::Bold]),
            spec.width,
        ));
        out.push('\n');
    }

    out.push_str(&left_pad_centered(&spec.message, spec.width));
    out.push('\n');
    out.push_str(&rule);
    out.push('\n');
    out
}

fn left_pad_centered(text: &str, width: usize) -> String {
    let pad = signed_diff(width, display_width(text)) / 2;
    format!("{}{text}", repeat_clamped(' ', pad))
}
