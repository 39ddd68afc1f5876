//! Per-tick render plans.
//!
//! A [`RenderPlan`] holds everything a drawing surface needs to animate one
//! tick: where each bar starts and ends, how long it is, how opaque, and how
//! the axis moves. [`RenderPlan::frame`] samples it at any point of the tick,
//! so the surface never keeps animation state of its own.

use serde::Serialize;
use std::time::Duration;

use super::axis::{lerp, AxisTransition};
use super::format::{format_value, value_inside_bar};
use super::layout::BandLayout;
use super::rank::RankedEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BarPhase {
    Entering,
    Updating,
    Exiting,
}

/// One bar's movement over a tick.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarTransition {
    pub label: String,
    pub color_index: usize,
    pub phase: BarPhase,
    pub from_magnitude: f64,
    pub to_magnitude: f64,
    pub from_y: f64,
    pub to_y: f64,
    /// Rank after the tick; `None` for exiting bars.
    pub rank: Option<usize>,
}

impl BarTransition {
    pub fn magnitude_at(&self, progress: f64) -> f64 {
        lerp(self.from_magnitude, self.to_magnitude, progress)
    }

    pub fn y_at(&self, progress: f64) -> f64 {
        lerp(self.from_y, self.to_y, progress)
    }

    pub fn opacity_at(&self, progress: f64) -> f64 {
        match self.phase {
            BarPhase::Entering => lerp(0.0, 1.0, progress),
            BarPhase::Updating => 1.0,
            BarPhase::Exiting => lerp(1.0, 0.0, progress),
        }
    }
}

/// Everything emitted by the animator for one tick.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderPlan {
    pub tick_index: usize,
    pub timestamp: i64,
    pub previous_timestamp: Option<i64>,
    pub visible_entries: Vec<RankedEntry>,
    pub axis: AxisTransition,
    pub layout: BandLayout,
    pub bars: Vec<BarTransition>,
    #[serde(with = "duration_millis")]
    pub duration: Duration,
    /// Jumps straight to the end state instead of animating.
    pub instant: bool,
}

/// A bar as drawn at one moment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarFrame {
    pub label: String,
    pub color_index: usize,
    pub y: f64,
    pub height: f64,
    pub magnitude: f64,
    /// Bar length as a fraction of the axis maximum.
    pub length: f64,
    pub opacity: f64,
    pub value_text: String,
    pub value_inside: bool,
}

/// A sampled plan, ready to draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanFrame {
    pub timestamp: i64,
    pub axis_max: f64,
    pub layout: BandLayout,
    pub bars: Vec<BarFrame>,
}

impl RenderPlan {
    /// Fraction of the tick covered after `elapsed`.
    pub fn progress(&self, elapsed: Duration) -> f64 {
        if self.instant || self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    pub fn frame(&self, progress: f64) -> PlanFrame {
        let progress = if self.instant {
            1.0
        } else {
            progress.clamp(0.0, 1.0)
        };
        let axis_max = self.axis.max_at(progress);

        let mut bars: Vec<BarFrame> = self
            .bars
            .iter()
            .map(|bar| {
                let magnitude = bar.magnitude_at(progress);
                let length = if axis_max > 0.0 {
                    (magnitude / axis_max).clamp(0.0, 1.0)
                } else {
                    0.0
                };
                BarFrame {
                    label: bar.label.clone(),
                    color_index: bar.color_index,
                    y: bar.y_at(progress),
                    height: self.layout.band_height,
                    magnitude,
                    length,
                    opacity: bar.opacity_at(progress),
                    value_text: format_value(magnitude),
                    value_inside: value_inside_bar(magnitude),
                }
            })
            .collect();

        // Exiting bars are drawn below the others.
        bars.sort_by(|a, b| a.y.total_cmp(&b.y));

        PlanFrame {
            timestamp: self.timestamp,
            axis_max,
            layout: self.layout,
            bars,
        }
    }

    /// Rows currently on the board, top to bottom.
    pub fn final_frame(&self) -> PlanFrame {
        self.frame(1.0)
    }
}

mod duration_millis {
    use serde::Serializer;
    use std::time::Duration;

    #[allow(clippy::trivially_copy_pass_by_ref)]
    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u128(duration.as_millis())
    }
}

#[cfg(test)]
mod tests {
    use super::{BarPhase, BarTransition, RenderPlan};
    use crate::race::axis::AxisTransition;
    use crate::race::layout::BandLayout;
    use std::time::Duration;

    fn plan(bars: Vec<BarTransition>, instant: bool) -> RenderPlan {
        RenderPlan {
            tick_index: 1,
            timestamp: 2020,
            previous_timestamp: Some(2019),
            visible_entries: Vec::new(),
            axis: AxisTransition {
                from_max: 100.0,
                to_max: 200.0,
            },
            layout: BandLayout {
                height: 64.0,
                band_height: 28.0,
                step: 36.0,
                band_count: 2,
            },
            bars,
            duration: Duration::from_millis(500),
            instant,
        }
    }

    fn bar(phase: BarPhase, from: (f64, f64), to: (f64, f64)) -> BarTransition {
        BarTransition {
            label: "A".to_string(),
            color_index: 0,
            phase,
            from_magnitude: from.0,
            to_magnitude: to.0,
            from_y: from.1,
            to_y: to.1,
            rank: Some(0),
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        let diff = (actual - expected).abs();
        assert!(diff < 1e-9, "expected {expected}, got {actual}, diff {diff}");
    }

    #[test]
    fn entering_bar_rises_from_below_and_fades_in() {
        let plan = plan(vec![bar(BarPhase::Entering, (0.0, 92.0), (50.0, 0.0))], false);

        let start = plan.frame(0.0);
        assert_close(start.bars[0].y, 92.0);
        assert_close(start.bars[0].opacity, 0.0);
        assert_close(start.bars[0].magnitude, 0.0);

        let end = plan.frame(1.0);
        assert_close(end.bars[0].y, 0.0);
        assert_close(end.bars[0].opacity, 1.0);
        assert_close(end.bars[0].length, 0.25);
    }

    #[test]
    fn exiting_bar_fades_out_with_its_last_value() {
        let plan = plan(vec![bar(BarPhase::Exiting, (40.0, 36.0), (40.0, 92.0))], false);
        let end = plan.frame(1.0);
        assert_close(end.bars[0].opacity, 0.0);
        assert_close(end.bars[0].y, 92.0);
        assert_close(end.bars[0].magnitude, 40.0);
    }

    #[test]
    fn value_text_interpolates_the_number() {
        let plan = plan(vec![bar(BarPhase::Updating, (1_000.0, 0.0), (3_000.0, 0.0))], false);
        assert_eq!(plan.frame(0.5).bars[0].value_text, "2.0K");
        assert_close(plan.frame(0.5).axis_max, 150.0);
    }

    #[test]
    fn instant_plans_ignore_progress() {
        let plan = plan(vec![bar(BarPhase::Updating, (10.0, 36.0), (20.0, 0.0))], true);
        assert_close(plan.progress(Duration::ZERO), 1.0);
        assert_close(plan.frame(0.0).bars[0].magnitude, 20.0);
    }

    #[test]
    fn progress_is_clamped() {
        let plan = plan(Vec::new(), false);
        assert_close(plan.progress(Duration::from_millis(250)), 0.5);
        assert_close(plan.progress(Duration::from_secs(3)), 1.0);
    }
}
