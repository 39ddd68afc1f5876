use serde::Serialize;

const NICE_TICK_COUNT: f64 = 10.0;
const NICE_MAX_ITERATIONS: usize = 10;

/// Step between axis ticks for `[start, stop]` split into roughly `count`
/// parts. Negative results are inverse steps (`-1 / step`) used for spans
/// below one tick unit.
fn tick_increment(start: f64, stop: f64, count: f64) -> f64 {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10_f64.powf(power);
    let factor = if error >= 50_f64.sqrt() {
        10.0
    } else if error >= 10_f64.sqrt() {
        5.0
    } else if error >= 2_f64.sqrt() {
        2.0
    } else {
        1.0
    };
    if power >= 0.0 {
        factor * 10_f64.powf(power)
    } else {
        -(10_f64.powf(-power)) / factor
    }
}

/// Extends `[0, max]` outward so both ends land on round tick values.
pub fn nice_max(max: f64) -> f64 {
    if !max.is_finite() || max <= 0.0 {
        return 0.0;
    }

    let mut start = 0.0_f64;
    let mut stop = max;
    let mut previous_step: Option<f64> = None;

    for _ in 0..NICE_MAX_ITERATIONS {
        let step = tick_increment(start, stop, NICE_TICK_COUNT);
        if previous_step.is_some_and(|previous| (previous - step).abs() <= f64::EPSILON) {
            break;
        }
        if step > 0.0 {
            start = (start / step).floor() * step;
            stop = (stop / step).ceil() * step;
        } else if step < 0.0 {
            start = (start * step).ceil() / step;
            stop = (stop * step).floor() / step;
        } else {
            break;
        }
        previous_step = Some(step);
    }

    stop
}

/// Tick values across `[0, max]`, at most around `count` of them.
pub fn axis_ticks(max: f64, count: usize) -> Vec<f64> {
    if max <= 0.0 || count == 0 {
        return Vec::new();
    }
    let step = tick_increment(0.0, max, count as f64);
    let step = if step < 0.0 { -1.0 / step } else { step };
    if step <= 0.0 || !step.is_finite() {
        return Vec::new();
    }

    let mut ticks = Vec::new();
    let mut value = 0.0;
    while value <= max + step * 1e-9 {
        ticks.push(value);
        value += step;
    }
    ticks
}

/// Movement of the value axis maximum over one tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisTransition {
    pub from_max: f64,
    pub to_max: f64,
}

impl AxisTransition {
    pub const fn fixed(max: f64) -> Self {
        Self {
            from_max: max,
            to_max: max,
        }
    }

    pub fn max_at(&self, progress: f64) -> f64 {
        lerp(self.from_max, self.to_max, progress)
    }

    pub fn is_moving(&self) -> bool {
        (self.from_max - self.to_max).abs() > f64::EPSILON
    }
}

/// Axis domain memory. The maximum only moves when a new target differs
/// from the current value by more than the hysteresis fraction.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisDomain {
    current_max: Option<f64>,
    headroom: f64,
    hysteresis: f64,
}

impl AxisDomain {
    pub const fn new(headroom: f64, hysteresis: f64) -> Self {
        Self {
            current_max: None,
            headroom,
            hysteresis,
        }
    }

    pub fn current_max(&self) -> f64 {
        self.current_max.unwrap_or(0.0)
    }

    pub fn reset(&mut self) {
        self.current_max = None;
    }

    /// Target maximum for a tick whose largest visible value is `top_magnitude`.
    pub fn ideal_max(&self, top_magnitude: f64) -> f64 {
        nice_max(top_magnitude * self.headroom)
    }

    /// Computes the axis for a new tick, applying hysteresis.
    pub fn compute_axis_domain(&mut self, top_magnitude: f64) -> AxisTransition {
        let target = self.ideal_max(top_magnitude);
        self.retarget(target)
    }

    /// Moves the domain to `target` unless it is within the hysteresis band.
    pub fn retarget(&mut self, target: f64) -> AxisTransition {
        let previous = self.current_max();
        let update = match self.current_max {
            None => true,
            Some(current) if current <= 0.0 => true,
            Some(current) => (target - current).abs() / current > self.hysteresis,
        };

        if update {
            if self.current_max.is_some() {
                tracing::debug!(from = previous, to = target, "axis domain updated");
            }
            self.current_max = Some(target);
            AxisTransition {
                from_max: previous,
                to_max: target,
            }
        } else {
            AxisTransition::fixed(previous)
        }
    }
}

pub fn lerp(from: f64, to: f64, progress: f64) -> f64 {
    (to - from).mul_add(progress.clamp(0.0, 1.0), from)
}

#[cfg(test)]
mod tests {
    use super::{axis_ticks, nice_max, AxisDomain};

    fn assert_close(actual: f64, expected: f64) {
        let diff = (actual - expected).abs();
        assert!(diff < 1e-9, "expected {expected}, got {actual}, diff {diff}");
    }

    #[test]
    fn nice_max_rounds_to_tick_steps() {
        assert_close(nice_max(110.0), 110.0);
        assert_close(nice_max(9_900.0), 10_000.0);
        assert_close(nice_max(10_120.0), 11_000.0);
        assert_close(nice_max(0.42), 0.45);
    }

    #[test]
    fn nice_max_of_zero_is_zero() {
        assert_close(nice_max(0.0), 0.0);
        assert_close(nice_max(f64::NAN), 0.0);
    }

    #[test]
    fn first_domain_is_always_taken() {
        let mut axis = AxisDomain::new(1.1, 0.05);
        let transition = axis.compute_axis_domain(95.0);
        assert_close(transition.from_max, 0.0);
        assert_close(transition.to_max, 110.0);
        assert_close(axis.current_max(), 110.0);
    }

    #[test]
    fn small_target_changes_keep_the_domain() {
        let mut axis = AxisDomain::new(1.1, 0.05);
        axis.retarget(1_000.0);

        let transition = axis.retarget(1_040.0);
        assert!(!transition.is_moving());
        assert_close(axis.current_max(), 1_000.0);

        let transition = axis.retarget(960.0);
        assert!(!transition.is_moving());
        assert_close(axis.current_max(), 1_000.0);
    }

    #[test]
    fn large_target_changes_move_the_domain() {
        let mut axis = AxisDomain::new(1.1, 0.05);
        axis.compute_axis_domain(9_000.0);
        assert_close(axis.current_max(), 10_000.0);

        let unchanged = axis.compute_axis_domain(9_050.0);
        assert!(!unchanged.is_moving());

        let moved = axis.compute_axis_domain(9_200.0);
        assert_close(moved.from_max, 10_000.0);
        assert_close(moved.to_max, 11_000.0);
        assert_close(axis.current_max(), 11_000.0);
    }

    #[test]
    fn zero_domain_is_replaced() {
        let mut axis = AxisDomain::new(1.1, 0.05);
        axis.compute_axis_domain(0.0);
        assert_close(axis.current_max(), 0.0);
        axis.compute_axis_domain(45.0);
        assert_close(axis.current_max(), 50.0);
    }

    #[test]
    fn ticks_cover_the_domain() {
        let ticks = axis_ticks(10_000.0, 5);
        assert_eq!(ticks.len(), 6);
        assert_close(ticks[5], 10_000.0);
        assert!(axis_ticks(0.0, 5).is_empty());
    }
}
