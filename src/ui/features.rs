//! Features showcase screen: feature list plus detail panel.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;

use super::helpers::{detail_style, truncate_label};
use super::layout::LayoutContext;
use super::theme::{badge_color, Palette};

pub fn render_features(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) {
    let palette = Palette::for_mode(app.is_dark);

    let chunks = if ctx.should_stack_panels() {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(area)
    } else {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(area)
    };

    render_feature_list(frame, chunks[0], app, &palette, ctx);
    render_feature_detail(frame, chunks[1], app, &palette);
}

fn render_feature_list(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    palette: &Palette,
    ctx: &LayoutContext,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.border))
        .title(Span::styled(
            " Features ",
            Style::default().fg(palette.accent),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let highlight = app.features.highlight_index();
    let max_label = inner.width.saturating_sub(12) as usize;
    let mut lines: Vec<Line> = Vec::new();

    for (idx, feature) in app.features.items().iter().enumerate() {
        let selected = idx == highlight;
        let marker = if selected { "▶ " } else { "  " };
        let title_style = if selected {
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.dim)
        };

        let mut spans = vec![
            Span::styled(marker.to_string(), Style::default().fg(palette.accent)),
            Span::styled(truncate_label(feature.title, max_label), title_style),
        ];
        if !ctx.is_compact() {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                format!("[{}]", feature.badge),
                Style::default().fg(badge_color(feature.badge_type)),
            ));
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_feature_detail(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let feature = app.features.active();
    let base = detail_style(palette, app.features.is_transitioning());

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.border))
        .title(Span::styled(
            format!(" {} ", feature.title),
            base.add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            format!("[{}]", feature.badge),
            base.fg(badge_color(feature.badge_type)),
        )),
        Line::raw(""),
        Line::from(Span::styled(
            feature.description.to_string(),
            base.fg(palette.text_secondary),
        )),
        Line::raw(""),
    ];
    for detail in feature.details {
        lines.push(Line::from(vec![
            Span::styled("❯ ".to_string(), base.fg(badge_color(feature.badge_type))),
            Span::styled(detail.to_string(), base),
        ]));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}
