/// Fixed-width table rendering

use crate::error::{KitError, Result};
use crate::terminal::Terminal;
use std::fmt::Display;
use tracing::debug;

const SEPARATOR: char = '|';
const DIVIDER: char = '-';
const ELLIPSIS: &str = "...";

/// Spaces per indent unit
const INDENT_UNIT: usize = 2;

/// A record that can describe its own columns
pub trait TableRecord {
    /// Column headers, in display order
    fn columns() -> Vec<&'static str>;

    /// Cell text for this record, one entry per column
    fn cells(&self) -> Vec<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Table {
    width: usize,
    indent: usize,
}

impl Table {
    /// `width` is the total character width of a row; `indent` is a left margin
    /// in units of two spaces.
    pub fn new(width: usize, indent: usize) -> Result<Self> {
        if width == 0 {
            return Err(KitError::invalid_config("table width must be positive"));
        }

        Ok(Table { width, indent })
    }

    /// Width of each cell in a row of `cells` cells, excluding its separator
    pub fn column_width(&self, cells: usize) -> Result<usize> {
        if cells == 0 {
            return Err(KitError::EmptyRow);
        }

        let width = self.width.saturating_sub(cells) / cells;
        if width == 0 {
            return Err(KitError::invalid_config(format!(
                "a {}-wide table cannot fit {} columns",
                self.width, cells
            )));
        }

        Ok(width)
    }

    /// Render one row, plus a divider line beneath it when `divider` is set
    pub fn format_row<D: Display>(&self, cells: &[D], divider: bool) -> Result<Vec<String>> {
        let width = self.column_width(cells.len())?;
        let margin = self.margin();

        let mut row = margin.clone();
        for cell in cells {
            row.push_str(&format_cell(&cell.to_string(), width));
            row.push(SEPARATOR);
        }

        let mut lines = vec![row];
        if divider {
            lines.push(format!(
                "{}{}",
                margin,
                DIVIDER.to_string().repeat(self.width - 1)
            ));
        }

        Ok(lines)
    }

    pub fn print_row<T: Terminal, D: Display>(
        &self,
        term: &mut T,
        cells: &[D],
        divider: bool,
    ) -> Result<()> {
        for line in self.format_row(cells, divider)? {
            term.write_line(&line)?;
        }

        Ok(())
    }

    /// Print a header row of `columns`, then one row per item using `extract`.
    ///
    /// The table is preceded by `indent` blank lines. Every extracted row must
    /// have as many cells as there are columns.
    pub fn build_table<T, R, D, F>(
        &self,
        term: &mut T,
        columns: &[&str],
        items: &[R],
        extract: F,
    ) -> Result<()>
    where
        T: Terminal,
        D: Display,
        F: Fn(&R) -> Vec<D>,
    {
        let rows: Vec<Vec<D>> = items.iter().map(&extract).collect();

        if let Some(bad) = rows.iter().find(|row| row.len() != columns.len()) {
            return Err(KitError::invalid_config(format!(
                "row has {} cells but the table has {} columns",
                bad.len(),
                columns.len()
            )));
        }

        self.column_width(columns.len())?;

        debug!(columns = columns.len(), rows = rows.len(), "building table");

        for _ in 0..self.indent {
            term.write_line("")?;
        }

        self.print_row(term, columns, true)?;
        for row in &rows {
            self.print_row(term, row, true)?;
        }

        Ok(())
    }

    /// `build_table` for records that carry their own column layout
    pub fn build_records<T: Terminal, R: TableRecord>(&self, term: &mut T, items: &[R]) -> Result<()> {
        self.build_table(term, &R::columns(), items, R::cells)
    }

    fn margin(&self) -> String {
        " ".repeat(self.indent * INDENT_UNIT)
    }
}

/// Fit `text` into exactly `width` characters.
///
/// Empty text becomes blanks, long text is cut and ends in `...`, short text is
/// centered with any odd space going to the right. Columns narrower than the
/// ellipsis show only dots.
pub fn format_cell(text: &str, width: usize) -> String {
    let len = text.chars().count();

    if len == 0 {
        return " ".repeat(width);
    }

    if len > width {
        if width < ELLIPSIS.len() {
            return ".".repeat(width);
        }

        let mut cut: String = text.chars().take(width - ELLIPSIS.len()).collect();
        cut.push_str(ELLIPSIS);
        return cut;
    }

    let padding = width - len;
    let left = padding / 2;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(padding - left))
}
