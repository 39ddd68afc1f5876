use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

const HELP_KEYS: [(&str, &str); 10] = [
    ("Tab / 1 / 2", "Switch screen"),
    ("s / Enter", "Start the race (when stopped)"),
    ("p / Space", "Pause or resume"),
    ("Right / l", "Step forward (paused)"),
    ("Left / h", "Step back (paused)"),
    ("[", "Rewind five ticks (paused)"),
    ("Up / Down", "Scroll countries"),
    ("PgUp / PgDn", "Scroll countries by a page"),
    ("F1 / ?", "Toggle this help"),
    ("q / Esc", "Quit"),
];

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

pub fn render_help_popup(f: &mut Frame<'_>) {
    let area = centered_rect(60, 60, f.area());
    f.render_widget(Clear, area);

    let lines: Vec<TextLine<'_>> = HELP_KEYS
        .iter()
        .map(|(keys, action)| {
            TextLine::from(vec![
                Span::styled(
                    format!("{keys:<14}"),
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                ),
                Span::raw(*action),
            ])
        })
        .collect();

    let help = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .title("Help")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use super::centered_rect;
    use ratatui::layout::Rect;

    #[test]
    fn popup_is_centered() {
        let area = centered_rect(50, 50, Rect::new(0, 0, 100, 40));
        assert_eq!(area, Rect::new(25, 10, 50, 20));
    }
}
