//! Changelog screen: release detail panel over the timeline track.
//!
//! Timeline nodes sit in chronological order; the track fills up to the
//! active node per `App::changelog_progress`.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::catalog::Release;

use super::helpers::detail_style;
use super::layout::LayoutContext;
use super::theme::{kind_color, tag_color, Palette};

pub fn render_changelog(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) {
    let palette = Palette::for_mode(app.is_dark);

    let timeline_height = if ctx.is_compact() { 3 } else { 4 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(timeline_height)])
        .split(area);

    render_release_detail(frame, chunks[0], app, &palette);
    render_timeline(frame, chunks[1], app, &palette);
}

fn render_release_detail(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let release = app.changelog.active();
    let base = detail_style(palette, app.changelog.is_transitioning());
    let accent = tag_color(release.tag);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.border))
        .title(Span::styled(
            format!(" v{} ", release.version),
            base.add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = vec![
        Line::from(vec![
            Span::styled(
                format!("v{}", release.version),
                base.add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(format!("⟨{}⟩", release.tag.label()), base.fg(accent)),
            Span::raw("  "),
            Span::styled(release.date.to_string(), base.fg(palette.text_secondary)),
        ]),
        Line::raw(""),
        Line::from(Span::styled(
            release.summary.to_string(),
            base.fg(palette.text_secondary),
        )),
    ];

    for group in release.changes {
        lines.push(Line::raw(""));
        lines.push(Line::from(vec![
            Span::styled("● ".to_string(), base.fg(kind_color(group.kind))),
            Span::styled(
                group.kind.label().to_string(),
                base.fg(kind_color(group.kind)).add_modifier(Modifier::BOLD),
            ),
        ]));
        for item in group.items {
            lines.push(Line::from(vec![
                Span::styled("  ❯ ".to_string(), base.fg(kind_color(group.kind))),
                Span::styled(item.to_string(), base),
            ]));
        }
    }

    // trim: false keeps the change-item indentation on wrapped rows
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

fn render_timeline(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    if area.height == 0 || area.width < 4 {
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    frame.render_widget(
        Paragraph::new(track_line(app, area.width, palette)),
        rows[0],
    );

    // One centered label column per node
    let releases = app.changelog.items();
    let constraints: Vec<Constraint> =
        vec![Constraint::Ratio(1, releases.len() as u32); releases.len()];
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(rows[1]);

    let highlight = app.changelog.highlight_index();
    for (idx, release) in releases.iter().enumerate() {
        frame.render_widget(
            node_label(release, idx == highlight, palette),
            columns[idx],
        );
    }
}

/// The horizontal track: node dots at column centers, fill up to the
/// progress percentage.
fn track_line(app: &App, width: u16, palette: &Palette) -> Line<'static> {
    let width = width as usize;
    let count = app.changelog.len();
    let positions: Vec<usize> = (0..count)
        .map(|i| (i * 2 + 1) * width / (count * 2))
        .collect();

    let last_node = positions.last().copied().unwrap_or(0);
    let first_node = positions.first().copied().unwrap_or(0);
    let span_cols = last_node.saturating_sub(first_node);
    let filled_to = first_node + (app.changelog_progress() / 100.0 * span_cols as f64).round() as usize;

    let active = app.changelog.active_index();
    let mut spans: Vec<Span<'static>> = Vec::with_capacity(width);
    for col in 0..width {
        let node = positions.iter().position(|p| *p == col);
        let (glyph, style) = match node {
            Some(idx) if idx == active => (
                "●",
                Style::default()
                    .fg(tag_color(app.changelog.items()[idx].tag))
                    .add_modifier(Modifier::BOLD),
            ),
            Some(idx) => ("○", Style::default().fg(tag_color(app.changelog.items()[idx].tag))),
            None if col >= first_node && col <= filled_to => {
                ("━", Style::default().fg(palette.accent))
            }
            None if col > first_node && col < last_node => {
                ("─", Style::default().fg(palette.dim))
            }
            None => (" ", Style::default()),
        };
        spans.push(Span::styled(glyph.to_string(), style));
    }
    Line::from(spans)
}

fn node_label(release: &Release, highlighted: bool, palette: &Palette) -> Paragraph<'static> {
    let style = if highlighted {
        Style::default()
            .fg(palette.text)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.dim)
    };
    let lines = vec![
        Line::from(Span::styled(format!("v{}", release.version), style)),
        Line::from(Span::styled(
            release.date.to_string(),
            Style::default().fg(palette.dim),
        )),
    ];
    Paragraph::new(lines).alignment(Alignment::Center)
}
