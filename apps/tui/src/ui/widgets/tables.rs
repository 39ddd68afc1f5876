use carstats::stats::{format_thousands, ChoroplethScale};
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Row, Table};
use ratatui::Frame;

/// Keeps `offset` inside the range that still fills the visible rows.
pub const fn clamp_offset(total_rows: usize, max_visible_rows: usize, offset: usize) -> usize {
    let max_offset = total_rows.saturating_sub(max_visible_rows);
    if offset > max_offset {
        max_offset
    } else {
        offset
    }
}

fn text_color(lightness: Option<f64>) -> Color {
    match lightness {
        Some(lightness) if lightness < 55.0 => Color::White,
        _ => Color::Black,
    }
}

/// Countries ranked by registered cars, each row shaded by its choropleth color.
pub fn render_country_table(
    countries: &[(&'static str, u64)],
    scale: &ChoroplethScale,
    offset: usize,
    f: &mut Frame<'_>,
    area: Rect,
) {
    let visible_rows = usize::from(area.height.saturating_sub(3));
    let offset = clamp_offset(countries.len(), visible_rows, offset);

    let rows: Vec<Row<'_>> = countries
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible_rows)
        .map(|(index, (name, cars))| {
            let style = Style::default()
                .bg(scale.color(*cars))
                .fg(text_color(scale.lightness(*cars)));
            Row::new(vec![
                Cell::from(format!("{}", index + 1)),
                Cell::from(*name),
                Cell::from(format_thousands(*cars)),
            ])
            .style(style)
        })
        .collect();

    let title = format!(
        "Cars by Country ({}-{} of {})",
        offset + 1,
        offset + rows.len(),
        countries.len()
    );
    let table = Table::new(
        rows,
        [
            Constraint::Length(4),
            Constraint::Percentage(55),
            Constraint::Percentage(45),
        ],
    )
    .header(
        Row::new(vec!["#", "Country", "Cars"])
            .style(Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD)),
    )
    .block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    f.render_widget(table, area);
}
