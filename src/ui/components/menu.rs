//! Side menu component renderer.

use crate::ui::helpers::{fit, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::MenuItem;

/// Renders one line per menu entry and returns the next free row.
///
/// ```text
///  ▸ Locations          Browse jobs by state
///    New vacancy        Post a job and see active listings
/// ```
pub fn render_menu(row: usize, items: &[MenuItem], theme: &Theme, cols: usize) -> usize {
    let title_width = items
        .iter()
        .map(|item| item.title.chars().count())
        .max()
        .unwrap_or(0)
        + 4;

    let mut current_row = row + 1;
    for item in items {
        position_cursor(current_row, 1);

        if item.is_selected {
            print!("{}", Theme::fg(&theme.colors.selection_fg));
            print!("{}", Theme::bg(&theme.colors.selection_bg));
            print!(" ▸ ");
        } else {
            print!("{}", Theme::fg(&theme.colors.text_normal));
            print!("   ");
        }
        print!("{}", Theme::bold());
        print!("{}", fit(item.title, title_width));
        print!("{}", Theme::reset());

        if item.is_selected {
            print!("{}", Theme::fg(&theme.colors.selection_fg));
            print!("{}", Theme::bg(&theme.colors.selection_bg));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_dim));
        }
        print!("{}", fit(item.hint, cols.saturating_sub(3 + title_width)));
        print!("{}", Theme::reset());

        current_row += 1;
    }
    current_row
}
