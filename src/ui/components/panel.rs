//! Panel and form body renderer.
//!
//! Both side panels and the apply form are vertical lists of
//! [`PanelRow`]s, one terminal line each. When the list is taller than the
//! space available, the window scrolls so the selected item or focused
//! field stays on screen.

use crate::ui::helpers::{fit, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{NoticeKind, PanelRow};

const LABEL_WIDTH: usize = 16;

/// Renders `title` followed by as many rows as fit in `height` lines.
///
/// Returns the next free row.
pub fn render_panel(row: usize, title: &str, rows: &[PanelRow], theme: &Theme, cols: usize, height: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.accent));
    print!("{}", fit(&format!(" {title}"), cols));
    print!("{}", Theme::reset());

    let body_height = height.saturating_sub(2);
    let anchor = rows.iter().position(|row| {
        matches!(
            row,
            PanelRow::Item { is_selected: true, .. } | PanelRow::Field { focused: true, .. }
        )
    });
    let (start, end) = visible_window(rows.len(), anchor.unwrap_or(0), body_height);

    let mut current_row = row + 2;
    for panel_row in &rows[start..end] {
        render_row(current_row, panel_row, theme, cols);
        current_row += 1;
    }
    current_row
}

/// The `[start, end)` slice of `len` rows to show in `height` lines so that
/// `anchor` is visible, roughly centered.
fn visible_window(len: usize, anchor: usize, height: usize) -> (usize, usize) {
    if len <= height {
        return (0, len);
    }
    let start = anchor.saturating_sub(height / 2).min(len - height);
    (start, start + height)
}

fn render_row(row: usize, panel_row: &PanelRow, theme: &Theme, cols: usize) {
    position_cursor(row, 1);

    match panel_row {
        PanelRow::Heading(text) => {
            print!("{}", Theme::bold());
            print!("{}", Theme::fg(&theme.colors.header_fg));
            print!("{}", fit(&format!(" {text}"), cols));
        }
        PanelRow::Item { text, detail, selectable, is_selected } => {
            let marker = if *is_selected { " ▸ " } else { "   " };
            let text_width = (cols / 2).max(LABEL_WIDTH);
            if *is_selected {
                print!("{}", Theme::fg(&theme.colors.selection_fg));
                print!("{}", Theme::bg(&theme.colors.selection_bg));
            } else if *selectable {
                print!("{}", Theme::fg(&theme.colors.text_normal));
            } else {
                print!("{}", Theme::fg(&theme.colors.text_dim));
            }
            print!("{marker}{}", fit(text, text_width));
            if !*is_selected {
                print!("{}", Theme::fg(&theme.colors.text_dim));
            }
            print!("{}", fit(detail, cols.saturating_sub(3 + text_width)));
        }
        PanelRow::Field { label, value, focused, error } => {
            let marker = if *focused { " ▸ " } else { "   " };
            print!("{}", Theme::fg(&theme.colors.text_dim));
            print!("{marker}{}", fit(&format!("{label}:"), LABEL_WIDTH));

            let caret = if *focused { "▏" } else { "" };
            let shown = format!("{value}{caret}");
            let error_text = error.as_ref().map(|message| format!("  {message}"));
            let error_len = error_text.as_ref().map_or(0, |text| text.chars().count());
            let value_width = cols.saturating_sub(3 + LABEL_WIDTH + error_len);

            if *focused {
                print!("{}", Theme::bold());
                print!("{}", Theme::fg(&theme.colors.accent));
            } else {
                print!("{}", Theme::fg(&theme.colors.text_normal));
            }
            print!("{}", fit(&shown, value_width));
            if let Some(text) = error_text {
                print!("{}", Theme::reset());
                print!("{}", Theme::fg(&theme.colors.error_fg));
                print!("{text}");
            }
        }
        PanelRow::Notice { text, kind } => {
            let color = match kind {
                NoticeKind::Info => &theme.colors.accent,
                NoticeKind::Success => &theme.colors.success_fg,
                NoticeKind::Error => &theme.colors.error_fg,
            };
            print!("{}", Theme::fg(color));
            print!("{}", fit(&format!("   {text}"), cols));
        }
        PanelRow::Muted(text) => {
            print!("{}", Theme::dim());
            print!("{}", Theme::fg(&theme.colors.text_dim));
            print!("{}", fit(&format!("   {text}"), cols));
        }
    }

    print!("{}", Theme::reset());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_lists_show_everything() {
        assert_eq!(visible_window(5, 4, 10), (0, 5));
    }

    #[test]
    fn window_follows_anchor() {
        assert_eq!(visible_window(30, 0, 10), (0, 10));
        assert_eq!(visible_window(30, 15, 10), (10, 20));
        assert_eq!(visible_window(30, 29, 10), (20, 30));
    }
}
