//! Header component renderer.
//!
//! Title on the left, screen summary on the right, one full-width line.

use crate::ui::helpers::{fit, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the header bar at `row` and returns the next free row.
///
/// # Layout
///
/// ```text
///  JobFinder  Find your next role in Malaysia                22 of 22 jobs
/// ```
///
/// On panes too narrow for both, the subtitle is dropped.
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title = format!(" {}", header.title);
    let subtitle = format!("{} ", header.subtitle);
    let title_len = title.chars().count();
    let subtitle_len = subtitle.chars().count();

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }

    if title_len + subtitle_len < cols {
        print!("{title}");
        print!("{}", " ".repeat(cols - title_len - subtitle_len));
        print!("{}", Theme::fg(&theme.colors.accent));
        print!("{subtitle}");
    } else {
        print!("{}", fit(&title, cols));
    }

    print!("{}", Theme::reset());
    row + 1
}
