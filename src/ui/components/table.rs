//! Job table component renderer.
//!
//! Renders the board as columns: TITLE, COMPANY, LOCATION (wide panes
//! only), TYPE, SALARY and POSTED. Title cells carry search match
//! highlighting; the selected row is drawn with the selection colors across
//! the full width.

use super::WIDE_LAYOUT_COLS;
use crate::ui::helpers::{self, fit, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::JobRow;

const TYPE_WIDTH: usize = 11;
const SALARY_WIDTH: usize = 22;
const POSTED_WIDTH: usize = 13;
const GAP: &str = " ";

/// Column widths for one pane width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Columns {
    title: usize,
    company: usize,
    /// Zero when the location column is hidden.
    location: usize,
}

impl Columns {
    fn for_width(cols: usize) -> Self {
        // One leading space plus one gap per column boundary.
        let fixed = 1 + TYPE_WIDTH + SALARY_WIDTH + POSTED_WIDTH + 4;

        if cols >= WIDE_LAYOUT_COLS {
            let flexible = cols.saturating_sub(fixed + 1);
            let title = flexible * 2 / 5;
            let company = flexible * 3 / 10;
            Self {
                title,
                company,
                location: flexible.saturating_sub(title + company),
            }
        } else {
            let flexible = cols.saturating_sub(fixed);
            let title = flexible * 11 / 20;
            Self {
                title,
                company: flexible.saturating_sub(title),
                location: 0,
            }
        }
    }
}

/// Renders the column headings and returns the next free row.
pub fn render_table_headers(row: usize, theme: &Theme, cols: usize) -> usize {
    let columns = Columns::for_width(cols);

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!(" {}{GAP}{}{GAP}", fit("TITLE", columns.title), fit("COMPANY", columns.company));
    if columns.location > 0 {
        print!("{}{GAP}", fit("LOCATION", columns.location));
    }
    print!(
        "{}{GAP}{}{GAP}{}",
        fit("TYPE", TYPE_WIDTH),
        fit("SALARY", SALARY_WIDTH),
        fit("POSTED", POSTED_WIDTH)
    );
    print!("{}", Theme::reset());
    row + 1
}

/// Renders all rows starting at `row` and returns the next free row.
pub fn render_table_rows(row: usize, items: &[JobRow], theme: &Theme, cols: usize) -> usize {
    let columns = Columns::for_width(cols);
    let mut current_row = row;
    for item in items {
        current_row = render_table_row(current_row, item, theme, columns, cols);
    }
    current_row
}

fn render_table_row(row: usize, item: &JobRow, theme: &Theme, columns: Columns, cols: usize) -> usize {
    position_cursor(row, 1);

    let (normal_fg, dim_fg, salary_fg) = if item.is_selected {
        print!("{}", Theme::bg(&theme.colors.selection_bg));
        let fg = &theme.colors.selection_fg;
        (fg, fg, fg)
    } else {
        (&theme.colors.text_normal, &theme.colors.text_dim, &theme.colors.salary_fg)
    };

    print!("{}", Theme::fg(normal_fg));
    print!(" ");

    // Ranges past the truncation point would highlight the ellipsis.
    let title_cell = fit(&item.title, columns.title);
    let visible = if item.title.chars().count() > columns.title {
        columns.title.saturating_sub(1)
    } else {
        columns.title
    };
    let ranges: Vec<(usize, usize)> = item
        .highlight_ranges
        .iter()
        .filter(|(start, _)| *start < visible)
        .map(|&(start, end)| (start, end.min(visible)))
        .collect();
    helpers::render_highlighted_text(&title_cell, &ranges, theme, item.is_selected);
    print!("{GAP}");

    print!("{}", Theme::fg(dim_fg));
    print!("{}{GAP}", fit(&item.company, columns.company));
    if columns.location > 0 {
        print!("{}{GAP}", fit(&item.location, columns.location));
    }

    print!("{}", Theme::fg(normal_fg));
    print!("{}{GAP}", fit(&item.job_type, TYPE_WIDTH));
    print!("{}", Theme::fg(salary_fg));
    print!("{}{GAP}", fit(&item.salary, SALARY_WIDTH));
    print!("{}", Theme::fg(dim_fg));
    print!("{}", fit(&item.posted, POSTED_WIDTH));

    let used = 1 + columns.title + columns.company + TYPE_WIDTH + SALARY_WIDTH + POSTED_WIDTH + 4
        + if columns.location > 0 { columns.location + 1 } else { 0 };
    print!("{}", " ".repeat(cols.saturating_sub(used)));

    print!("{}", Theme::reset());
    row + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_panes_hide_location() {
        let narrow = Columns::for_width(90);
        assert_eq!(narrow.location, 0);
        assert_eq!(
            1 + narrow.title + narrow.company + TYPE_WIDTH + SALARY_WIDTH + POSTED_WIDTH + 4,
            90
        );
    }

    #[test]
    fn wide_panes_fill_the_width() {
        let wide = Columns::for_width(140);
        assert!(wide.location > 0);
        assert_eq!(
            1 + wide.title + wide.company + wide.location + 1 + TYPE_WIDTH + SALARY_WIDTH + POSTED_WIDTH + 4,
            140
        );
    }
}
