use crate::app::App;
use crate::ui::widgets::charts::render_brand_shares;
use crate::ui::widgets::tables::render_country_table;
use carstats::stats::format_thousands;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn render_overview(app: &App, f: &mut Frame<'_>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let total = Paragraph::new(format!("{} cars on the road", format_thousands(app.world_total)))
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title("World Total")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(total, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_country_table(
        &app.countries,
        &app.choropleth,
        app.country_offset,
        f,
        body[0],
    );
    render_brand_shares(&app.brands, f, body[1]);
}
