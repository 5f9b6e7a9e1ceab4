//! Bordered tables with per-column alignment.

use super::glyphs::{BorderGlyphs, SINGLE};
use crate::style::{compose, Attribute};
use crate::text::{display_width, pad_to_width, repeat_clamped, Align};

/// Input for [`render_table`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableSpec {
    /// Merged into the first column's top-border fill.
    pub title: String,
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// Alignment by column index; missing entries are `Align::Left`.
    pub align: Vec<Align>,
}

impl TableSpec {
    pub fn new<I, S>(header: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            header: header.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
        self
    }

    pub fn align(mut self, column: usize, align: Align) -> Self {
        if self.align.len() <= column {
            self.align.resize(column + 1, Align::Left);
        }
        self.align[column] = align;
        self
    }

    /// Widest of the header and every row; short rows are padded with
    /// empty cells at render time.
    pub fn column_count(&self) -> usize {
        self.rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(self.header.len()))
            .max()
            .unwrap_or(0)
    }

    /// Display width of the widest cell in each column, header included.
    pub fn column_widths(&self) -> Vec<usize> {
        let mut widths = vec![0usize; self.column_count()];
        for cells in std::iter::once(&self.header).chain(self.rows.iter()) {
            for (idx, cell) in cells.iter().enumerate() {
                widths[idx] = widths[idx].max(display_width(cell));
            }
        }
        widths
    }

    fn alignment(&self, column: usize) -> Align {
        self.align.get(column).copied().unwrap_or_default()
    }
}

/// Render `spec` as a single-line bordered table.
///
/// Output order: top border (title merged in), header row in bold,
/// separator, data rows, bottom border. A table without header cells skips
/// the header row and separator.
pub fn render_table(spec: &TableSpec) -> String {
    let g = &SINGLE;
    let widths = spec.column_widths();
    let mut out = String::new();

    out.push_str(&top_border(g, &widths, &spec.title));
    if !spec.header.is_empty() {
        out.push_str(&cell_row(g, spec, &spec.header, &widths, true));
        out.push_str(&rule_row(g, &widths, g.tee_left, g.cross, g.tee_right));
    }
    for cells in &spec.rows {
        out.push_str(&cell_row(g, spec, cells, &widths, false));
    }
    out.push_str(&rule_row(g, &widths, g.bottom_left, g.tee_up, g.bottom_right));
    out
}

fn top_border(g: &BorderGlyphs, widths: &[usize], title: &str) -> String {
    let title_width = display_width(title);
    let mut line = String::new();
    line.push(g.top_left);
    line.push_str(title);
    if widths.is_empty() {
        line.push(g.top_right);
        line.push('\n');
        return line;
    }
    for (idx, width) in widths.iter().enumerate() {
        let mut fill = (width + 2) as isize;
        if idx == 0 {
            fill -= title_width as isize;
            if fill < 0 {
                tracing::trace!(
                    title_width,
                    column_width = width,
                    "table title wider than first column; fill clamped"
                );
            }
        } else {
            line.push(g.tee_down);
        }
        line.push_str(&repeat_clamped(g.horizontal, fill));
    }
    line.push(g.top_right);
    line.push('\n');
    line
}

fn rule_row(g: &BorderGlyphs, widths: &[usize], left: char, mid: char, right: char) -> String {
    let mut line = String::new();
    line.push(left);
    for (idx, width) in widths.iter().enumerate() {
        if idx > 0 {
            line.push(mid);
        }
        line.push_str(&repeat_clamped(g.horizontal, (width + 2) as isize));
    }
    line.push(right);
    line.push('\n');
    line
}

fn cell_row(
    g: &BorderGlyphs,
    spec: &TableSpec,
    cells: &[String],
    widths: &[usize],
    bold: bool,
) -> String {
    let mut line = String::new();
    line.push(g.vertical);
    for (idx, width) in widths.iter().enumerate() {
        let raw = cells.get(idx).map(String::as_str).unwrap_or("");
        let text = if bold && !raw.is_empty() {
            compose(raw, None, None, &[Attribute::Bold])
        } else {
            raw.to_string()
        };
        line.push(' ');
        line.push_str(&pad_to_width(&text, *width, spec.alignment(idx)));
        line.push(' ');
        line.push(g.vertical);
    }
    line.push('\n');
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testsupport::line_widths;
    use crate::text::strip_escapes;

    fn users() -> TableSpec {
        TableSpec::new(["ID", "Name"])
            .title("Users")
            .row(["1", "Al"])
            .row(["22", "Bob"])
    }

    #[test]
    fn column_widths_take_max_of_header_and_rows() {
        assert_eq!(users().column_widths(), vec![2, 4]);
    }

    #[test]
    fn border_runs_are_column_width_plus_two() {
        let out = render_table(&users());
        let rows: Vec<&str> = out.lines().collect();
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[2], "├────┼──────┤");
        assert_eq!(rows[5], "└────┴──────┘");
    }

    #[test]
    fn header_is_bold_and_rows_are_left_aligned() {
        let out = render_table(&users());
        let rows: Vec<&str> = out.lines().collect();
        assert!(rows[1].contains("\x1b[1mID\x1b[0m"));
        assert_eq!(strip_escapes(rows[1]), "│ ID │ Name │");
        assert_eq!(rows[3], "│ 1  │ Al   │");
        assert_eq!(rows[4], "│ 22 │ Bob  │");
    }

    #[test]
    fn title_fits_first_column_keeps_table_rectangular() {
        let spec = TableSpec::new(["Identifier", "Name"])
            .title("Users")
            .row(["1", "Al"]);
        let out = render_table(&spec);
        assert!(out.starts_with("┌Users───────┬"));
        let widths = line_widths(&out);
        assert!(widths.windows(2).all(|w| w[0] == w[1]), "widths: {widths:?}");
    }

    #[test]
    fn wide_title_clamps_first_fill() {
        let out = render_table(&users());
        assert_eq!(out.lines().next(), Some("┌Users┬──────┐"));
    }

    #[test]
    fn center_and_right_alignment_pad_per_column() {
        let spec = TableSpec::new(["Item", "Qty"])
            .row(["a", "7"])
            .align(0, Align::Center)
            .align(1, Align::Right);
        let out = render_table(&spec);
        let rows: Vec<&str> = out.lines().collect();
        assert_eq!(rows[3], "│  a   │   7 │");
    }

    #[test]
    fn short_rows_render_empty_cells() {
        let spec = TableSpec::new(["A", "B", "C"]).row(["x"]);
        let out = render_table(&spec);
        assert_eq!(out.lines().nth(3), Some("│ x │   │   │"));
    }

    #[test]
    fn rows_wider_than_header_add_columns() {
        let spec = TableSpec::new(["A"]).row(["x", "yy"]);
        assert_eq!(spec.column_count(), 2);
        let out = render_table(&spec);
        assert_eq!(out.lines().nth(3), Some("│ x │ yy │"));
    }

    #[test]
    fn styled_cells_measure_by_visible_width() {
        let spec = TableSpec::new(["Status"]).row(["\x1b[32mok\x1b[0m"]);
        let widths = line_widths(&render_table(&spec));
        assert!(widths.iter().all(|w| *w == 10), "widths: {widths:?}");
    }

    #[test]
    fn headerless_table_skips_header_and_separator() {
        let spec = TableSpec::default().row(["a", "b"]);
        let out = render_table(&spec);
        assert_eq!(out, "┌───┬───┐\n│ a │ b │\n└───┴───┘\n");
    }

    #[test]
    fn empty_table_renders_borders_only() {
        let out = render_table(&TableSpec::default().title("Empty"));
        assert_eq!(out, "┌Empty┐\n└┘\n");
    }

    #[cfg(feature = "fuzz-tests")]
    mod prop_tests {
        use super::*;
        use proptest::prelude::*;

        fn cell() -> impl Strategy<Value = String> {
            proptest::string::string_regex("[a-z✔ ]{0,8}").expect("regex")
        }

        proptest! {
            #[test]
            fn untitled_tables_are_rectangular(
                header in proptest::collection::vec(cell(), 1..5),
                rows in proptest::collection::vec(proptest::collection::vec(cell(), 0..6), 0..6),
            ) {
                let spec = TableSpec { header, rows, ..TableSpec::default() };
                let widths = line_widths(&render_table(&spec));
                prop_assert!(widths.windows(2).all(|w| w[0] == w[1]), "widths: {:?}", widths);
            }
        }
    }
}
