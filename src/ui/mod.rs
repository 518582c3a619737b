//! UI rendering for the Glow tour.
//!
//! Pure read-side of the application: every render function takes the
//! `App` state and a `LayoutContext` and draws into the frame. State
//! transitions live in `crate::app` and the state modules; nothing here
//! mutates.

mod changelog;
mod faq;
mod features;
mod header;
mod helpers;
mod layout;
pub mod theme;

pub use header::header_height;
pub use layout::{breakpoints, LayoutContext};

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::app::{App, Screen};

use changelog::render_changelog;
use faq::render_faq;
use features::render_features;
use header::render_header;
use theme::Palette;

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render the UI based on current screen.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let ctx = LayoutContext::new(area.width, area.height);
    let palette = Palette::for_mode(app.is_dark);

    // Theme background behind everything
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.bg).fg(palette.text)),
        area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height(app.header.layout)),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    render_header(frame, chunks[0], app, &ctx);

    match app.screen {
        Screen::Features => render_features(frame, chunks[1], app, &ctx),
        Screen::Faq => render_faq(frame, chunks[1], app, &ctx),
        Screen::Changelog => render_changelog(frame, chunks[1], app, &ctx),
    }

    render_keybind_hints(frame, chunks[2], &palette, &ctx);
}

fn render_keybind_hints(
    frame: &mut Frame,
    area: ratatui::layout::Rect,
    palette: &Palette,
    ctx: &LayoutContext,
) {
    let hints = if ctx.is_compact() {
        " ⇥ screen  ↑↓ select  t theme  s style  q quit"
    } else {
        " ⇥ screen   ↑/↓ select   t theme   s bar style   i icons   q quit"
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            hints,
            Style::default().fg(palette.dim),
        ))),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{MemoryPreferenceStore, ThemeResolver};
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::{Duration, Instant};

    fn create_test_app() -> App {
        let resolver =
            ThemeResolver::with_probe(Box::new(MemoryPreferenceStore::new()), || true);
        App::new(resolver).expect("app")
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_render_features_screen_smoke() {
        let app = create_test_app();
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| render(f, &app)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Glow"));
        assert!(text.contains("3-Section Organization"));
    }

    #[test]
    fn test_render_each_screen_and_layout_mode() {
        let mut app = create_test_app();
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();

        for _ in 0..Screen::ALL.len() {
            for _ in 0..3 {
                app.cycle_header_layout();
                terminal.draw(|f| render(f, &app)).unwrap();
            }
            app.next_screen();
        }
    }

    #[test]
    fn test_render_changelog_shows_timeline_nodes() {
        let mut app = create_test_app();
        app.go_to_screen(Screen::Changelog);
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| render(f, &app)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("v0.8.0"));
        assert!(text.contains("v1.0.0"));
        assert!(text.contains("Internal alpha"));
    }

    #[test]
    fn test_render_survives_tiny_terminal() {
        let mut app = create_test_app();
        let mut terminal = Terminal::new(TestBackend::new(20, 6)).unwrap();
        for _ in 0..Screen::ALL.len() {
            terminal.draw(|f| render(f, &app)).unwrap();
            app.next_screen();
        }
    }

    #[test]
    fn test_transitioning_detail_still_shows_active_item() {
        let start = Instant::now();
        let mut app = create_test_app();
        app.select_down(start); // pending: second feature

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| render(f, &app)).unwrap();
        let text = buffer_text(&terminal);
        // Panel still renders the committed item while dimmed
        assert!(text.contains("Visible Section - Always displayed icons"));

        app.tick(start + Duration::from_millis(120));
        terminal.draw(|f| render(f, &app)).unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains("Customizable keyboard shortcuts"));
    }
}
