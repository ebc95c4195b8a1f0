//! Filter bar component renderer.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FilterBarInfo;

/// Renders the filter chips on one line and returns the next free row.
///
/// ```text
///  [t] Type: All   [s] State: Selangor   [d] District: All
/// ```
///
/// Chips with a value other than `All` use the accent color.
pub fn render_filter_bar(row: usize, bar: &FilterBarInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    let mut used = 0;
    for chip in &bar.chips {
        let text = format!(" [{}] {}: {}  ", chip.key, chip.label, chip.value);
        let len = text.chars().count();
        if used + len > cols {
            break;
        }

        if chip.active {
            print!("{}", Theme::bold());
            print!("{}", Theme::fg(&theme.colors.accent));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_dim));
        }
        print!("{text}");
        print!("{}", Theme::reset());
        used += len;
    }

    print!("{}", " ".repeat(cols.saturating_sub(used)));
    row + 1
}
