use carstats::race::axis::axis_ticks;
use carstats::race::format::format_value;
use carstats::race::{palette_color, BarFrame, PlanFrame};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Widget;

const PARTIAL_BLOCKS: [&str; 8] = [" ", "▏", "▎", "▍", "▌", "▋", "▊", "▉"];
const FULL_BLOCK: &str = "█";
const MAX_LABEL_WIDTH: u16 = 16;
const VALUE_WIDTH: u16 = 8;
const AXIS_TICKS: usize = 5;
// Bars fainter than this are not drawn
const MIN_VISIBLE_OPACITY: f64 = 0.05;

/// Draws one sampled frame of the bar race.
///
/// Plan coordinates are in layout units; `reference_height` units map onto
/// the rows below the axis line.
pub struct RaceChart<'a> {
    frame: &'a PlanFrame,
    reference_height: f64,
}

impl<'a> RaceChart<'a> {
    pub const fn new(frame: &'a PlanFrame, reference_height: f64) -> Self {
        Self {
            frame,
            reference_height,
        }
    }
}

/// Scales an RGB color toward black to fake transparency.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn faded(rgb: (u8, u8, u8), opacity: f64) -> Color {
    let scale = |channel: u8| (f64::from(channel) * opacity.clamp(0.0, 1.0)).round() as u8;
    Color::Rgb(scale(rgb.0), scale(rgb.1), scale(rgb.2))
}

/// Cells for a bar covering `length` of `width`, in eighth blocks.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn bar_cells(length: f64, width: u16) -> String {
    let eighths = (length.clamp(0.0, 1.0) * f64::from(width) * 8.0).round() as usize;
    let mut cells = FULL_BLOCK.repeat(eighths / 8);
    if eighths % 8 > 0 {
        cells.push_str(PARTIAL_BLOCKS[eighths % 8]);
    }
    cells
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_cells(value: f64) -> u16 {
    value.round().clamp(0.0, f64::from(u16::MAX)) as u16
}

fn text_width(text: &str) -> u16 {
    u16::try_from(text.chars().count()).unwrap_or(u16::MAX)
}

impl RaceChart<'_> {
    fn label_width(&self) -> u16 {
        let longest = self
            .frame
            .bars
            .iter()
            .map(|bar| text_width(&bar.label))
            .max()
            .unwrap_or(0);
        longest.min(MAX_LABEL_WIDTH) + 1
    }

    fn render_axis(&self, x: u16, y: u16, width: u16, buf: &mut Buffer) {
        let max = self.frame.axis_max;
        if max <= 0.0 || width == 0 {
            return;
        }
        let style = Style::default().fg(Color::Gray);
        for tick in axis_ticks(max, AXIS_TICKS) {
            let offset = to_cells(tick / max * f64::from(width - 1));
            let text = format_value(tick);
            let start = (x + offset).min((x + width).saturating_sub(text_width(&text)));
            buf.set_string(start, y, text, style);
        }
    }

    fn render_bar(&self, bar: &BarFrame, area: Rect, label_width: u16, buf: &mut Buffer) {
        if bar.opacity < MIN_VISIBLE_OPACITY {
            return;
        }

        let scale = f64::from(area.height) / self.reference_height;
        let top = to_cells(bar.y * scale);
        if top >= area.height {
            return;
        }
        let rows = to_cells(bar.height * scale).max(1).min(area.height - top);
        let label_row = area.y + top + rows / 2;

        let bar_width = area.width.saturating_sub(label_width + VALUE_WIDTH);
        let color = faded(palette_color(bar.color_index), bar.opacity);
        let cells = bar_cells(bar.length, bar_width);
        let cell_count = text_width(&cells);

        for row in 0..rows {
            buf.set_string(
                area.x + label_width,
                area.y + top + row,
                &cells,
                Style::default().fg(color),
            );
        }

        let label: String = bar
            .label
            .chars()
            .take(usize::from(label_width - 1))
            .collect();
        let label_x = area.x + (label_width - 1).saturating_sub(text_width(&label));
        let label_style = if bar.opacity < 0.5 {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        };
        buf.set_string(label_x, label_row, &label, label_style);

        let value_width = text_width(&bar.value_text);
        if bar.value_inside && cell_count > value_width + 1 {
            buf.set_string(
                area.x + label_width + cell_count - value_width - 1,
                label_row,
                &bar.value_text,
                Style::default().fg(Color::Black).bg(color),
            );
        } else {
            buf.set_string(
                area.x + label_width + cell_count + 1,
                label_row,
                &bar.value_text,
                Style::default().fg(Color::Gray),
            );
        }
    }
}

impl Widget for RaceChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 2 || area.width <= MAX_LABEL_WIDTH + VALUE_WIDTH {
            return;
        }

        let label_width = self.label_width();
        let bar_width = area.width.saturating_sub(label_width + VALUE_WIDTH);
        self.render_axis(area.x + label_width, area.y, bar_width, buf);

        let bars_area = Rect {
            x: area.x,
            y: area.y + 1,
            width: area.width,
            height: area.height - 1,
        };
        for bar in &self.frame.bars {
            self.render_bar(bar, bars_area, label_width, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{bar_cells, faded, RaceChart};
    use carstats::race::layout::BandLayout;
    use carstats::race::{BarFrame, PlanFrame};
    use ratatui::buffer::Buffer;
    use ratatui::layout::Rect;
    use ratatui::style::Color;
    use ratatui::widgets::Widget;

    fn frame_with(bar: BarFrame) -> PlanFrame {
        PlanFrame {
            timestamp: 2020,
            axis_max: 200.0,
            layout: BandLayout {
                height: 28.0,
                band_height: 28.0,
                step: 31.1,
                band_count: 1,
            },
            bars: vec![bar],
        }
    }

    fn toyota(opacity: f64) -> BarFrame {
        BarFrame {
            label: "Toyota".to_string(),
            color_index: 0,
            y: 0.0,
            height: 28.0,
            magnitude: 100.0,
            length: 0.5,
            opacity,
            value_text: "100".to_string(),
            value_inside: false,
        }
    }

    fn buffer_text(buf: &Buffer, area: Rect) -> String {
        (0..area.height)
            .flat_map(|y| (0..area.width).map(move |x| (x, y)))
            .map(|(x, y)| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn bar_cells_use_partial_blocks() {
        assert_eq!(bar_cells(0.0, 10), "");
        assert_eq!(bar_cells(1.0, 3), "███");
        assert_eq!(bar_cells(0.5, 3), "█▌");
    }

    #[test]
    fn fading_darkens_the_color() {
        assert_eq!(faded((200, 100, 50), 1.0), Color::Rgb(200, 100, 50));
        assert_eq!(faded((200, 100, 50), 0.5), Color::Rgb(100, 50, 25));
    }

    #[test]
    fn renders_label_value_and_bar() {
        let frame = frame_with(toyota(1.0));
        let area = Rect::new(0, 0, 60, 10);
        let mut buf = Buffer::empty(area);
        RaceChart::new(&frame, 400.0).render(area, &mut buf);

        let text = buffer_text(&buf, area);
        assert!(text.contains("Toyota"));
        assert!(text.contains("100"));
        assert!(text.contains('█'));
    }

    #[test]
    fn transparent_bars_are_skipped() {
        let frame = frame_with(toyota(0.0));
        let area = Rect::new(0, 0, 60, 10);
        let mut buf = Buffer::empty(area);
        RaceChart::new(&frame, 400.0).render(area, &mut buf);

        assert!(!buffer_text(&buf, area).contains("Toyota"));
    }
}
