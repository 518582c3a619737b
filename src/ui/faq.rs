//! FAQ showcase screen: question list plus answer panel.

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
use super::theme::Palette;

pub fn render_faq(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) {
    let palette = Palette::for_mode(app.is_dark);

    let chunks = if ctx.should_stack_panels() {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area)
    } else {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(area)
    };

    render_question_list(frame, chunks[0], app, &palette);
    render_answer(frame, chunks[1], app, &palette, ctx);
}

fn render_question_list(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.border))
        .title(Span::styled(
            " Questions ",
            Style::default().fg(palette.accent),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let highlight = app.faq.highlight_index();
    let max_label = inner.width.saturating_sub(5) as usize;
    let lines: Vec<Line> = app
        .faq
        .items()
        .iter()
        .enumerate()
        .map(|(idx, faq)| {
            let selected = idx == highlight;
            let marker = if selected { "▶ " } else { "  " };
            let style = if selected {
                Style::default()
                    .fg(palette.text)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.dim)
            };
            Line::from(vec![
                Span::styled(marker.to_string(), Style::default().fg(palette.accent)),
                Span::styled(truncate_label(faq.question, max_label), style),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_answer(frame: &mut Frame, area: Rect, app: &App, palette: &Palette, ctx: &LayoutContext) {
    let faq = app.faq.active();
    let base = detail_style(palette, app.faq.is_transitioning());

    let title = if ctx.is_compact() {
        " Answer ".to_string()
    } else {
        format!(" {} ", truncate_label(faq.question, area.width.saturating_sub(6) as usize))
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.border))
        .title(Span::styled(title, base.add_modifier(Modifier::BOLD)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(vec![
            Span::styled("? ".to_string(), base.fg(palette.accent)),
            Span::styled(faq.question.to_string(), base.add_modifier(Modifier::BOLD)),
        ]),
        Line::raw(""),
        Line::from(Span::styled(faq.answer.to_string(), base)),
    ];

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}
