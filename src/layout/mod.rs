//! Display-width-aware layout for boxes, tables, titles, banners and dividers.
//!
//! Every function here is pure: it takes a spec, measures with
//! [`crate::text::display_width`], and returns the finished multi-line string
//! (each line `\n`-terminated). Geometry that would need a negative fill is
//! clamped to zero fill instead of failing.

mod boxes;
pub mod glyphs;
mod rules;
mod table;

pub use boxes::{render_box, BoxSpec};
pub use glyphs::{BorderGlyphs, BoxStyle};
pub use rules::{render_banner, render_divider, render_title, BannerSpec, DividerSpec};
pub use table::{render_table, TableSpec};
