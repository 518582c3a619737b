//! Menu-bar header rendering.
//!
//! The header imitates the macOS menu bar the product lives in: brand and
//! navigation on the left, status cluster (theme, bar style, battery,
//! clock) on the right. `HeaderLayout` decides the chrome: no shape at
//! all, one full-width bordered bar, or two split sections.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Screen};
use crate::header::HeaderLayout;

use super::layout::LayoutContext;
use super::theme::Palette;

/// Rows the header occupies for the given layout mode.
pub fn header_height(layout: HeaderLayout) -> u16 {
    match layout {
        HeaderLayout::NoShape => 1,
        HeaderLayout::Full | HeaderLayout::Split => 3,
    }
}

pub fn render_header(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) {
    let palette = Palette::for_mode(app.is_dark);
    match app.header.layout {
        HeaderLayout::NoShape => {
            // Borderless: one bare line spanning the full width
            let line = Line::from(merged_spans(app, &palette, ctx));
            frame.render_widget(Paragraph::new(line), area);
        }
        HeaderLayout::Full => {
            let bar = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(palette.border));
            let inner = bar.inner(area);
            frame.render_widget(bar, area);
            frame.render_widget(
                Paragraph::new(Line::from(merged_spans(app, &palette, ctx))),
                inner,
            );
        }
        HeaderLayout::Split => {
            let status_width = status_spans_width(app).min(area.width.saturating_sub(8));
            let chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Min(10), Constraint::Length(status_width + 4)])
                .split(area);

            let left = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(palette.border));
            let left_inner = left.inner(chunks[0]);
            frame.render_widget(left, chunks[0]);
            frame.render_widget(
                Paragraph::new(Line::from(menu_spans(app, &palette, ctx))),
                left_inner,
            );

            let right = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(palette.border));
            let right_inner = right.inner(chunks[1]);
            frame.render_widget(right, chunks[1]);
            frame.render_widget(
                Paragraph::new(Line::from(status_spans(app, &palette))),
                right_inner,
            );
        }
    }
}

/// Menu and status in one run, for the single-section layouts.
fn merged_spans(app: &App, palette: &Palette, ctx: &LayoutContext) -> Vec<Span<'static>> {
    let mut spans = menu_spans(app, palette, ctx);
    spans.push(Span::raw("   "));
    spans.extend(status_spans(app, palette));
    spans
}

/// Brand plus one tab per screen, the active one marked.
fn menu_spans(app: &App, palette: &Palette, ctx: &LayoutContext) -> Vec<Span<'static>> {
    let mut spans: Vec<Span<'static>> = vec![
        Span::raw(" "),
        Span::styled(
            "◉ Glow",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
    ];

    for (idx, screen) in Screen::ALL.iter().enumerate() {
        let is_active = app.screen == *screen;
        let label = if ctx.is_extra_small() && *screen == Screen::Changelog {
            "Log"
        } else {
            screen.title()
        };

        if is_active {
            spans.push(Span::styled(
                "▶ ".to_string(),
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                label.to_string(),
                Style::default()
                    .fg(palette.text)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(
                format!("  {}", label),
                Style::default().fg(palette.dim),
            ));
        }

        if idx < Screen::ALL.len() - 1 {
            spans.push(Span::raw(if ctx.is_extra_small() { " " } else { "   " }));
        }
    }

    spans
}

/// Right-hand status cluster: theme, bar style, icon chevron, battery,
/// clock. The togglable icons hide behind the chevron like the product's
/// own hidden section.
fn status_spans(app: &App, palette: &Palette) -> Vec<Span<'static>> {
    let mut spans: Vec<Span<'static>> = Vec::new();

    if app.header.icons_visible {
        let theme_glyph = if app.is_dark { "☾" } else { "☼" };
        spans.push(Span::styled(
            theme_glyph.to_string(),
            Style::default().fg(palette.text),
        ));
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("⟳ {}", app.header.layout.label()),
            Style::default().fg(palette.text_secondary),
        ));
        spans.push(Span::raw("  "));
    }

    let chevron = if app.header.icons_visible { "❯" } else { "❮" };
    spans.push(Span::styled(
        chevron.to_string(),
        Style::default().fg(palette.dim),
    ));
    spans.push(Span::raw("  "));
    spans.push(Span::styled(
        "▮▮▮▯".to_string(),
        Style::default().fg(palette.text_secondary),
    ));
    spans.push(Span::raw("  "));
    spans.push(Span::styled(
        app.header.clock_display.clone(),
        Style::default().fg(palette.text),
    ));
    spans.push(Span::raw(" "));

    spans
}

/// Display width of the status cluster, for sizing the split section.
fn status_spans_width(app: &App) -> u16 {
    let palette = Palette::dark();
    status_spans(app, &palette)
        .iter()
        .map(|span| span.content.chars().count() as u16)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{MemoryPreferenceStore, ThemeResolver};

    fn test_app() -> App {
        let resolver =
            ThemeResolver::with_probe(Box::new(MemoryPreferenceStore::new()), || true);
        App::new(resolver).expect("app")
    }

    fn span_text(spans: &[Span<'static>]) -> String {
        spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_menu_marks_active_screen() {
        let mut app = test_app();
        let palette = Palette::dark();
        let ctx = LayoutContext::new(120, 40);

        let text = span_text(&menu_spans(&app, &palette, &ctx));
        let marker = text.find('▶').unwrap();
        assert!(marker < text.find("Features").unwrap());

        app.next_screen();
        let text = span_text(&menu_spans(&app, &palette, &ctx));
        assert!(text.find('▶').unwrap() > text.find("Features").unwrap());
        assert!(text.find('▶').unwrap() < text.find("FAQ").unwrap());
    }

    #[test]
    fn test_status_hides_icons_behind_chevron() {
        let mut app = test_app();
        app.header.clock_display = "Tue Mar 10 1:05 p.m.".to_string();
        let palette = Palette::dark();

        let visible = span_text(&status_spans(&app, &palette));
        assert!(visible.contains('☾'));
        assert!(visible.contains("split"));
        assert!(visible.contains("Tue Mar 10 1:05 p.m."));

        app.toggle_header_icons();
        let hidden = span_text(&status_spans(&app, &palette));
        assert!(!hidden.contains('☾'));
        assert!(!hidden.contains("split"));
        // Battery and clock are always-visible icons
        assert!(hidden.contains("Tue Mar 10 1:05 p.m."));
        assert!(hidden.contains('❮'));
    }

    #[test]
    fn test_header_height_per_layout() {
        assert_eq!(header_height(HeaderLayout::NoShape), 1);
        assert_eq!(header_height(HeaderLayout::Full), 3);
        assert_eq!(header_height(HeaderLayout::Split), 3);
    }

    #[test]
    fn test_light_theme_swaps_glyph() {
        let mut app = test_app();
        app.toggle_theme();
        let palette = Palette::light();
        let text = span_text(&status_spans(&app, &palette));
        assert!(text.contains('☼'));
        assert!(!text.contains('☾'));
    }
}
