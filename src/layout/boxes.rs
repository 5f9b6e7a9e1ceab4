//! Bordered text boxes.

use super::glyphs::BoxStyle;
use crate::text::{display_width, pad_to_width, repeat_clamped, signed_diff, Align};

/// Input for [`render_box`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoxSpec {
    /// Body text; split on `\n` into rows.
    pub body: String,
    /// Text merged into the top border. May be empty.
    pub title: String,
    pub style: BoxStyle,
    /// Manual correction to the top-border fill, for titles whose glyphs
    /// render wider or narrower than they measure.
    pub fix_offset: isize,
}

impl BoxSpec {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            ..Self::default()
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn style(mut self, style: BoxStyle) -> Self {
        self.style = style;
        self
    }

    pub fn fix_offset(mut self, offset: isize) -> Self {
        self.fix_offset = offset;
        self
    }

    fn lines(&self) -> Vec<&str> {
        self.body
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect()
    }
}

/// Render a box around `spec.body`.
///
/// Every body row is padded to the widest row, so with a title no wider than
/// that row plus one and no offset, all output rows share one display width.
pub fn render_box(spec: &BoxSpec) -> String {
    let g = spec.style.glyphs();
    let lines = spec.lines();
    let inner = lines.iter().map(|l| display_width(l)).max().unwrap_or(0);

    let title_width = display_width(&spec.title);
    let top_fill = signed_diff(inner + 1, title_width) + spec.fix_offset;
    if top_fill < 0 {
        tracing::trace!(
            inner,
            title_width,
            top_fill,
            "box title wider than body; fill clamped"
        );
    }

    let mut out = String::new();
    out.push(g.top_left);
    out.push_str(&spec.title);
    out.push_str(&repeat_clamped(g.horizontal, top_fill));
    out.push(' ');
    out.push(g.top_right);
    out.push('\n');

    for line in &lines {
        out.push(g.vertical);
        out.push(' ');
        out.push_str(&pad_to_width(line, inner, Align::Left));
        out.push(' ');
        out.push(g.vertical);
        out.push('\n');
    }

    out.push(g.bottom_left);
    out.push_str(&repeat_clamped(g.horizontal, (inner + 2) as isize));
    out.push(g.bottom_right);
    out.push('\n');
    out
}
