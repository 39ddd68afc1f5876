use std::f64::consts::TAU;

use carstats::stats::{format_thousands, BrandTotal};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::canvas::{Canvas, Points};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub const PIE_COLORS: [Color; 12] = [
    Color::Rgb(0x1f, 0x77, 0xb4),
    Color::Rgb(0xff, 0x7f, 0x0e),
    Color::Rgb(0x2c, 0xa0, 0x2c),
    Color::Rgb(0xd6, 0x27, 0x28),
    Color::Rgb(0x94, 0x67, 0xbd),
    Color::Rgb(0x8c, 0x56, 0x4b),
    Color::Rgb(0xe3, 0x77, 0xc2),
    Color::Rgb(0x7f, 0x7f, 0x7f),
    Color::Rgb(0xbc, 0xbd, 0x22),
    Color::Rgb(0x17, 0xbe, 0xcf),
    Color::Rgb(0x9e, 0xda, 0xe5),
    Color::Rgb(0xc5, 0xb0, 0xd5),
];

// Hole and gap of the ring, relative to the outer radius
const INNER_RADIUS: f64 = 0.47;
const PADDING_ANGLE: f64 = TAU / 360.0;
const ANGLE_STEP: f64 = 0.01;
const RADIUS_STEPS: usize = 12;

pub const fn pie_color(index: usize) -> Color {
    PIE_COLORS[index % PIE_COLORS.len()]
}

fn chart_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
}

/// Start and end angle of each slice, counter-clockwise from 3 o'clock,
/// with a small gap after every slice.
pub fn slice_angles(brands: &[BrandTotal]) -> Vec<(f64, f64)> {
    let total: u64 = brands.iter().map(|brand| brand.value).sum();
    if total == 0 {
        return Vec::new();
    }

    let padding = if brands.len() > 1 { PADDING_ANGLE } else { 0.0 };
    let usable = (brands.len() as f64).mul_add(-padding, TAU);
    let mut start = 0.0;
    brands
        .iter()
        .map(|brand| {
            let sweep = usable * brand.value as f64 / total as f64;
            let angles = (start, start + sweep);
            start += sweep + padding;
            angles
        })
        .collect()
}

/// Points filling the ring segment between two angles.
fn ring_points(start: f64, end: f64) -> Vec<(f64, f64)> {
    let mut points = Vec::new();
    let mut angle = start;
    while angle <= end {
        for step in 0..=RADIUS_STEPS {
            let fraction = step as f64 / RADIUS_STEPS as f64;
            let radius = (1.0 - INNER_RADIUS).mul_add(fraction, INNER_RADIUS);
            points.push((radius * angle.cos(), radius * angle.sin()));
        }
        angle += ANGLE_STEP;
    }
    points
}

/// Largest rect inside `area` whose braille dots form a square.
const fn square_canvas(area: Rect) -> Rect {
    let height = if area.height < area.width / 2 {
        area.height
    } else {
        area.width / 2
    };
    let width = height * 2;
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn legend_lines(brands: &[BrandTotal]) -> Vec<TextLine<'_>> {
    brands
        .iter()
        .enumerate()
        .map(|(index, brand)| {
            TextLine::from(vec![
                Span::styled("■ ", Style::default().fg(pie_color(index))),
                Span::styled(
                    brand.name.as_str(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!(
                    " {:.1}% ({})",
                    brand.percent,
                    format_thousands(brand.value)
                )),
            ])
        })
        .collect()
}

/// Ring pie of each brand's share of the world fleet, with a legend.
pub fn render_brand_shares(brands: &[BrandTotal], f: &mut Frame<'_>, area: Rect) {
    let block = chart_block("Brand Shares");
    if brands.is_empty() {
        let paragraph = Paragraph::new("No brand data available")
            .block(block)
            .alignment(ratatui::layout::Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    }

    let inner = block.inner(area);
    f.render_widget(block, area);

    let split = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(6),
            Constraint::Length(u16::try_from(brands.len()).unwrap_or(u16::MAX)),
        ])
        .split(inner);

    let slices: Vec<(Color, Vec<(f64, f64)>)> = slice_angles(brands)
        .into_iter()
        .enumerate()
        .map(|(index, (start, end))| (pie_color(index), ring_points(start, end)))
        .collect();

    f.render_widget(
        Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([-1.0, 1.0])
            .y_bounds([-1.0, 1.0])
            .paint(|ctx| {
                for (color, coords) in &slices {
                    ctx.draw(&Points {
                        coords: coords.as_slice(),
                        color: *color,
                    });
                }
            }),
        square_canvas(split[0]),
    );
    f.render_widget(Paragraph::new(legend_lines(brands)), split[1]);
}
