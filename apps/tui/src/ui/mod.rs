pub mod screens;
pub mod widgets;

use std::time::Instant;

use crate::app::{App, AppScreen};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs};
use ratatui::Frame;

fn render_header(app: &App, f: &mut Frame<'_>, area: Rect) {
    let titles = AppScreen::ALL
        .iter()
        .map(|screen| TextLine::from(screen.label()))
        .collect::<Vec<_>>();

    let tabs = Tabs::new(titles)
        .select(app.screen.index())
        .block(
            Block::default()
                .title("CarStats")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Rgb(0, 0, 238))
                .add_modifier(Modifier::BOLD),
        )
        .divider(Span::raw("|"));

    f.render_widget(tabs, area);
}

fn render_footer(app: &App, f: &mut Frame<'_>, area: Rect) {
    let mut spans = vec![Span::styled(
        "Tab: switch | F1: help | q: quit",
        Style::default().fg(Color::Gray),
    )];
    if !app.status_message.is_empty() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            app.status_message.as_str(),
            Style::default().fg(Color::Yellow),
        ));
    }
    f.render_widget(Paragraph::new(TextLine::from(spans)), area);
}

pub fn ui(app: &App, f: &mut Frame<'_>, now: Instant) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(f.area());

    render_header(app, f, chunks[0]);
    match app.screen {
        AppScreen::Overview => screens::overview::render_overview(app, f, chunks[1]),
        AppScreen::Race => screens::race::render_race(app, f, chunks[1], now),
    }
    render_footer(app, f, chunks[2]);

    if app.show_help {
        widgets::popup::render_help_popup(f);
    }
}
