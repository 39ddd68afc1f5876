use serde::Serialize;

const PADDING_INNER: f64 = 0.1;

/// Vertical band geometry for the visible bars, in drawing units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BandLayout {
    /// Height actually used by the bars, anchored at the top edge.
    pub height: f64,
    pub band_height: f64,
    pub step: f64,
    pub band_count: usize,
}

/// Sizing rules for [`layout`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutRules {
    pub available_height: f64,
    pub stretch_limit: bool,
    pub bar_height: f64,
    pub bar_gap: f64,
}

impl BandLayout {
    /// Top edge of the band at `rank`.
    pub fn row_y(&self, rank: usize) -> f64 {
        rank as f64 * self.step
    }

    /// Position just below the drawing area, where bars enter and exit.
    pub fn offscreen_y(&self) -> f64 {
        self.height + self.band_height
    }
}

/// Lays out `visible_count` bands. With the stretch limit on, a short list
/// uses a fixed bar height and gap instead of filling the whole height.
pub fn layout(visible_count: usize, rules: &LayoutRules) -> BandLayout {
    if visible_count == 0 {
        return BandLayout {
            height: rules.available_height,
            band_height: 0.0,
            step: 0.0,
            band_count: 0,
        };
    }

    let count = visible_count as f64;
    let mut height = rules.available_height;
    if rules.stretch_limit {
        let desired = count.mul_add(rules.bar_height, (count - 1.0) * rules.bar_gap);
        if desired < height {
            height = desired;
        }
    }

    let step = height / (count - PADDING_INNER);
    BandLayout {
        height,
        band_height: step * (1.0 - PADDING_INNER),
        step,
        band_count: visible_count,
    }
}
