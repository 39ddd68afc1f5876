use ratatui::style::Color;

/// Fill for regions without data.
pub const NO_DATA: Color = Color::Rgb(0xf8, 0xfa, 0xfc);

const HUE: f64 = 220.0;
const LIGHTEST: f64 = 90.0;
const LIGHTNESS_RANGE: f64 = 60.0;

/// Maps a value to a shade of blue: lighter for small values, darker for
/// values near the table maximum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChoroplethScale {
    max: f64,
}

impl ChoroplethScale {
    pub fn new(values: impl IntoIterator<Item = u64>) -> Self {
        let max = values.into_iter().max().unwrap_or(0).max(1);
        Self { max: max as f64 }
    }

    /// Lightness in percent, or `None` when there is no value to show.
    pub fn lightness(&self, value: u64) -> Option<f64> {
        if value == 0 {
            return None;
        }
        let ratio = (value as f64 / self.max).min(1.0);
        Some(LIGHTNESS_RANGE.mul_add(-ratio, LIGHTEST))
    }

    pub fn color(&self, value: u64) -> Color {
        self.lightness(value).map_or(NO_DATA, |lightness| {
            let (r, g, b) = hsl_to_rgb(HUE, 1.0, lightness / 100.0);
            Color::Rgb(r, g, b)
        })
    }
}

fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> (u8, u8, u8) {
    let chroma = (1.0 - 2.0_f64.mul_add(lightness, -1.0).abs()) * saturation;
    let sector = hue / 60.0;
    let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
    let (r, g, b) = match sector {
        s if s < 1.0 => (chroma, x, 0.0),
        s if s < 2.0 => (x, chroma, 0.0),
        s if s < 3.0 => (0.0, chroma, x),
        s if s < 4.0 => (0.0, x, chroma),
        s if s < 5.0 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    let m = lightness - chroma / 2.0;
    (to_channel(r + m), to_channel(g + m), to_channel(b + m))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_channel(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}
