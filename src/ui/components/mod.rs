//! Composable UI component renderers.
//!
//! Each component prints one part of the frame at a given row and returns
//! the next free row.
//!
//! # Components
//!
//! - `header`: Title bar with the regional tagline and a screen summary
//! - `filters`: Type, state and district filter chips
//! - `search`: Search input box
//! - `table`: Job list columns with match highlighting
//! - `empty`: Message shown when nothing matches
//! - `menu`: Side menu entries
//! - `panel`: Side panels and the apply form
//! - `footer`: Keybinding hints and the error banner
//!
//! # Frame Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Body: listing, menu, panel or apply form]
//! [Error banner, when set]
//! [Border]
//! [Footer]
//! ```

mod empty;
mod filters;
mod footer;
mod header;
mod menu;
mod panel;
mod search;
mod table;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ApplyView, Body, PanelRow, UIViewModel};

use empty::render_empty_state;
use filters::render_filter_bar;
use footer::{render_error_banner, render_footer};
use header::render_header;
use menu::render_menu;
use panel::render_panel;
use search::render_search_bar;
use table::{render_table_headers, render_table_rows};

/// Pane width from which the job table shows a LOCATION column.
pub const WIDE_LAYOUT_COLS: usize = 100;

/// First row of the body, after the blank line, header and border.
const BODY_START_ROW: usize = 4;

/// Renders a horizontal border line at the specified row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders a full frame for a `rows` x `cols` pane.
pub fn render_frame(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    let mut current_row = 2; // Start at row 2 (skip blank line at row 1)

    current_row = render_header(current_row, &vm.header, theme, cols);
    render_border(current_row, &theme.colors.border, cols);

    let footer_row = rows.saturating_sub(1).max(BODY_START_ROW + 1);
    let border_row = footer_row - 1;
    let banner_row = vm.error_banner.as_ref().map(|_| border_row.saturating_sub(1));
    let body_end = banner_row.unwrap_or(border_row);
    let body_height = body_end.saturating_sub(BODY_START_ROW);

    render_body(&vm.body, theme, cols, body_height);

    if let (Some(row), Some(message)) = (banner_row, &vm.error_banner) {
        render_error_banner(row, message, theme, cols);
    }
    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);
}

fn render_body(body: &Body, theme: &Theme, cols: usize, height: usize) {
    let row = BODY_START_ROW;

    match body {
        Body::Listing {
            filter_bar,
            search_bar,
            rows,
            empty_state,
            ..
        } => {
            let mut current_row = render_filter_bar(row, filter_bar, theme, cols);
            if let Some(search) = search_bar {
                current_row = render_search_bar(current_row, search, theme, cols);
            }
            if let Some(empty) = empty_state {
                render_empty_state(current_row, empty, theme, cols);
                return;
            }
            current_row = render_table_headers(current_row, theme, cols);
            render_table_rows(current_row, rows, theme, cols);
        }
        Body::Menu { items } => {
            render_menu(row, items, theme, cols);
        }
        Body::Panel(view) => {
            render_panel(row, &view.title, &view.rows, theme, cols, height);
        }
        Body::Apply(view) => render_apply(row, view, theme, cols, height),
    }
}

fn render_apply(row: usize, view: &ApplyView, theme: &Theme, cols: usize, height: usize) {
    let title = format!("Apply: {} at {}", view.job_title, view.company);

    let mut rows = view.fields.clone();
    if let Some((text, kind)) = &view.notice {
        rows.push(PanelRow::Muted(String::new()));
        rows.push(PanelRow::Notice {
            text: text.clone(),
            kind: *kind,
        });
    }

    render_panel(row, &title, &rows, theme, cols, height);
}
