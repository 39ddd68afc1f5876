use std::time::Instant;

use crate::app::App;
use crate::ui::widgets::race_bars::RaceChart;
use carstats::race::Controls;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

fn playback_label(app: &App) -> &'static str {
    let state = app.playback();
    match (state.running, state.paused) {
        (false, _) => "stopped",
        (true, false) => "playing",
        (true, true) => "paused",
    }
}

fn control_spans(controls: Controls) -> Vec<Span<'static>> {
    let buttons = [
        ("[s] start", controls.start),
        ("[p] pause", controls.pause),
        ("[p] resume", controls.resume),
        ("[<] back", controls.step_backward),
        ("[>] forward", controls.step_forward),
        ("[[] rewind", controls.rewind),
    ];
    let style = Style::default()
        .fg(Color::Rgb(0, 0, 238))
        .add_modifier(Modifier::BOLD);

    buttons
        .into_iter()
        .filter(|(_, enabled)| *enabled)
        .flat_map(|(label, _)| [Span::styled(label, style), Span::raw("  ")])
        .collect()
}

pub fn render_race(app: &App, f: &mut Frame<'_>, area: Rect, now: Instant) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let series = app.animator.series();
    let state = app.playback();
    let frame = app.race_frame(now);

    let title = match &frame {
        Some(frame) => format!(
            "Brand Race {} ({}/{}, {})",
            frame.timestamp,
            state.current_tick_index + 1,
            series.len(),
            playback_label(app)
        ),
        None => "Brand Race".to_string(),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(chunks[0]);
    f.render_widget(block, chunks[0]);

    match &frame {
        Some(frame) => {
            let reference_height = app.animator.settings().layout.available_height;
            f.render_widget(RaceChart::new(frame, reference_height), inner);
        }
        None => {
            let message = if series.is_empty() {
                "No race data loaded"
            } else {
                "Press s to start the race"
            };
            f.render_widget(
                Paragraph::new(message)
                    .style(Style::default().fg(Color::Gray))
                    .alignment(Alignment::Center),
                inner,
            );
        }
    }

    f.render_widget(
        Paragraph::new(TextLine::from(control_spans(app.controls()))),
        chunks[1],
    );
}

#[cfg(test)]
mod tests {
    use super::control_spans;
    use carstats::race::Controls;

    #[test]
    fn only_legal_controls_are_listed() {
        let controls = Controls {
            resume: true,
            step_forward: true,
            ..Controls::default()
        };
        let labels: Vec<String> = control_spans(controls)
            .iter()
            .map(|span| span.content.to_string())
            .filter(|label| !label.trim().is_empty())
            .collect();
        assert_eq!(labels, vec!["[p] resume", "[>] forward"]);
    }
}
