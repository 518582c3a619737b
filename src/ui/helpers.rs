//! Helper functions for UI rendering.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use super::theme::Palette;

/// Shrink a rect by a uniform margin on all sides.
pub fn inner_rect(area: Rect, margin: u16) -> Rect {
    Rect {
        x: area.x + margin,
        y: area.y + margin,
        width: area.width.saturating_sub(margin * 2),
        height: area.height.saturating_sub(margin * 2),
    }
}

/// Base text style for a detail panel, dimmed while a selection commit is
/// pending (the terminal's cross-fade).
pub fn detail_style(palette: &Palette, transitioning: bool) -> Style {
    let style = Style::default().fg(palette.text);
    if transitioning {
        style.add_modifier(Modifier::DIM)
    } else {
        style
    }
}

/// Truncate a string to `max_chars`, appending an ellipsis when shortened.
pub fn truncate_label(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let kept: String = s.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", kept)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inner_rect_shrinks_symmetrically() {
        let area = Rect::new(0, 0, 20, 10);
        let inner = inner_rect(area, 1);
        assert_eq!(inner, Rect::new(1, 1, 18, 8));
    }

    #[test]
    fn test_inner_rect_saturates() {
        let area = Rect::new(0, 0, 1, 1);
        let inner = inner_rect(area, 2);
        assert_eq!(inner.width, 0);
        assert_eq!(inner.height, 0);
    }

    #[test]
    fn test_truncate_label() {
        assert_eq!(truncate_label("short", 10), "short");
        assert_eq!(truncate_label("a longer label", 8), "a longe…");
    }
}
