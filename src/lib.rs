//! ansiframe - display-width-aware terminal layout with ANSI styling.
//!
//! The crate renders styled text, boxes, tables, titles, banners and
//! dividers for ANSI terminals. Layout is measured by visible width, so
//! embedded color codes never break alignment.
//!
//! # Quick start
//!
//! ```
//! use ansiframe::layout::{render_table, TableSpec};
//! use ansiframe::style::{compose, Color};
//! use ansiframe::text::display_width;
//!
//! let ok = compose("ok", Some(Color::Green), None, &[]);
//! let table = TableSpec::new(["Check", "Result"]).row(["build", ok.as_str()]);
//! let rendered = render_table(&table);
//!
//! let widths: Vec<usize> = rendered.lines().map(display_width).collect();
//! assert!(widths.windows(2).all(|w| w[0] == w[1]));
//! ```

pub mod app;
pub mod config;
pub mod console;
pub mod error;
pub mod layout;
pub mod style;
#[cfg(test)]
pub mod testsupport;
pub mod text;
