//! Playback of a [`Series`] as a ranked bar race.
//!
//! The animator owns all playback memory: the tick index, the running and
//! paused flags, the single periodic timer, the previous tick's ranks (used
//! to break near-ties) and the previous tick's bars (used as interpolation
//! sources). Every render produces a fresh [`RenderPlan`].
//!
//! State machine:
//!
//! ```text
//!   stopped --start--> running --pause--> paused --resume--> running
//!                         |                 | step_forward / rewind
//!                         +--tick at end--> stopped
//! ```

use serde::Serialize;
use std::time::{Duration, Instant};

use super::axis::{AxisDomain, AxisTransition};
use super::layout::{layout, LayoutRules};
use super::plan::{BarPhase, BarTransition, RenderPlan};
use super::rank::{rank_entries, remember_ranks, RankMemory};
use super::series::{Entry, Series};
use super::timer::TickTimer;

/// Tunables for one playback session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaceSettings {
    pub tick: Duration,
    pub top_n: usize,
    /// Near-tie tolerance as a fraction of the tick's largest value.
    pub jitter: f64,
    pub headroom: f64,
    pub hysteresis: f64,
    pub layout: LayoutRules,
}

impl Default for RaceSettings {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(500),
            top_n: 25,
            jitter: 0.002,
            headroom: 1.1,
            hysteresis: 0.05,
            layout: LayoutRules {
                available_height: 400.0,
                stretch_limit: true,
                bar_height: 28.0,
                bar_gap: 8.0,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PlaybackState {
    pub current_tick_index: usize,
    pub running: bool,
    pub paused: bool,
}

/// A bar as it stood at the end of the previous tick.
#[derive(Debug, Clone, PartialEq)]
struct ShownBar {
    label: String,
    magnitude: f64,
    y: f64,
}

#[derive(Debug)]
pub struct Animator {
    series: Series,
    settings: RaceSettings,
    state: PlaybackState,
    timer: Option<TickTimer>,
    last_rank: RankMemory,
    axis: AxisDomain,
    shown: Vec<ShownBar>,
    previous_timestamp: Option<i64>,
    plan: Option<RenderPlan>,
}

impl Animator {
    pub fn new(series: Series, settings: RaceSettings) -> Self {
        Self {
            series,
            settings,
            state: PlaybackState::default(),
            timer: None,
            last_rank: RankMemory::new(),
            axis: AxisDomain::new(settings.headroom, settings.hysteresis),
            shown: Vec::new(),
            previous_timestamp: None,
            plan: None,
        }
    }

    pub const fn series(&self) -> &Series {
        &self.series
    }

    pub const fn settings(&self) -> &RaceSettings {
        &self.settings
    }

    pub const fn state(&self) -> PlaybackState {
        self.state
    }

    /// The most recent render plan, if anything has been rendered.
    pub const fn plan(&self) -> Option<&RenderPlan> {
        self.plan.as_ref()
    }

    pub const fn timer_armed(&self) -> bool {
        self.timer.is_some()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.timer.as_ref().map(TickTimer::next_due)
    }

    fn last_index(&self) -> usize {
        self.series.last_index().unwrap_or(0)
    }

    /// Label/value pairs of the snapshot at `index`, clamped to the last one.
    pub fn load_tick(&self, index: usize) -> Vec<Entry> {
        self.series
            .snapshot(index)
            .map(|snapshot| snapshot.entries().to_vec())
            .unwrap_or_default()
    }

    /// Starts playback from the first snapshot. Ignored while a session is
    /// running, paused or not.
    pub fn start(&mut self, now: Instant) -> Option<&RenderPlan> {
        if self.state.running || self.timer.is_some() {
            tracing::trace!(state = ?self.state, "start ignored");
            return None;
        }

        self.state = PlaybackState::default();
        self.last_rank.clear();
        self.axis.reset();
        self.shown.clear();
        self.previous_timestamp = None;
        self.plan = None;

        if self.series.is_empty() {
            tracing::debug!("start on empty series; nothing to play");
            return None;
        }

        self.state.running = true;
        self.render(0, false);

        if self.last_index() == 0 {
            self.finish();
        } else {
            self.timer = Some(TickTimer::arm(self.settings.tick, now));
            tracing::debug!(snapshots = self.series.len(), "playback started");
        }

        self.plan.as_ref()
    }

    /// Advances one snapshot. Reaching the last snapshot stops playback.
    pub fn tick(&mut self) -> Option<&RenderPlan> {
        if !self.state.running || self.state.paused {
            return None;
        }
        if self.state.current_tick_index >= self.last_index() {
            self.finish();
            return None;
        }

        self.state.current_tick_index += 1;
        self.render(self.state.current_tick_index, false);

        if self.state.current_tick_index >= self.last_index() {
            self.finish();
        }

        self.plan.as_ref()
    }

    /// Fires the timer if it is due.
    pub fn poll(&mut self, now: Instant) -> Option<&RenderPlan> {
        let due = self.timer.as_mut().is_some_and(|timer| timer.poll(now));
        if due {
            self.tick()
        } else {
            None
        }
    }

    pub fn pause(&mut self) {
        if !self.state.running || self.state.paused {
            tracing::trace!(state = ?self.state, "pause ignored");
            return;
        }
        self.timer = None;
        self.state.paused = true;
        tracing::debug!(tick = self.state.current_tick_index, "playback paused");
    }

    pub fn resume(&mut self, now: Instant) {
        if !self.state.running || !self.state.paused {
            tracing::trace!(state = ?self.state, "resume ignored");
            return;
        }
        self.state.paused = false;
        self.timer = Some(TickTimer::arm(self.settings.tick, now));
        tracing::debug!(tick = self.state.current_tick_index, "playback resumed");
    }

    /// Moves one snapshot ahead while paused.
    pub fn step_forward(&mut self) -> Option<&RenderPlan> {
        if !self.paused_in_session() || self.state.current_tick_index >= self.last_index() {
            tracing::trace!(state = ?self.state, "step forward ignored");
            return None;
        }
        self.state.current_tick_index += 1;
        self.render(self.state.current_tick_index, false);
        self.plan.as_ref()
    }

    /// Jumps back `steps` snapshots while paused, without animating.
    pub fn rewind(&mut self, steps: usize) -> Option<&RenderPlan> {
        if !self.paused_in_session() {
            tracing::trace!(state = ?self.state, "rewind ignored");
            return None;
        }
        self.state.current_tick_index = self.state.current_tick_index.saturating_sub(steps);
        self.render(self.state.current_tick_index, true);
        self.plan.as_ref()
    }

    pub fn step_backward(&mut self) -> Option<&RenderPlan> {
        self.rewind(1)
    }

    /// Cancels the timer; used when the display goes away.
    pub fn teardown(&mut self) {
        self.timer = None;
        self.state.running = false;
        self.state.paused = false;
    }

    const fn paused_in_session(&self) -> bool {
        self.state.running && self.state.paused
    }

    fn finish(&mut self) {
        self.timer = None;
        self.state.running = false;
        self.state.paused = false;
        tracing::debug!(tick = self.state.current_tick_index, "playback finished");
    }

    fn render(&mut self, index: usize, instant: bool) {
        let Some(snapshot) = self.series.snapshot(index) else {
            return;
        };
        let timestamp = snapshot.timestamp();

        let ranked = rank_entries(
            snapshot.entries(),
            &self.last_rank,
            self.settings.top_n,
            self.settings.jitter,
        );
        let top = ranked.first().map_or(0.0, |entry| entry.magnitude);
        let axis = self.axis.compute_axis_domain(top);
        let bands = layout(ranked.len(), &self.settings.layout);

        let mut bars: Vec<BarTransition> = ranked
            .iter()
            .map(|entry| {
                let to_y = bands.row_y(entry.rank);
                let previous = self.shown.iter().find(|bar| bar.label == entry.label);
                let (phase, from_magnitude, from_y) = match previous {
                    Some(bar) if !instant => (BarPhase::Updating, bar.magnitude, bar.y),
                    Some(_) => (BarPhase::Updating, entry.magnitude, to_y),
                    None if instant => (BarPhase::Updating, entry.magnitude, to_y),
                    None => (BarPhase::Entering, 0.0, bands.offscreen_y()),
                };
                BarTransition {
                    label: entry.label.clone(),
                    color_index: self.series.color_index(&entry.label),
                    phase,
                    from_magnitude,
                    to_magnitude: entry.magnitude,
                    from_y,
                    to_y,
                    rank: Some(entry.rank),
                }
            })
            .collect();

        if !instant {
            bars.extend(
                self.shown
                    .iter()
                    .filter(|bar| !ranked.iter().any(|entry| entry.label == bar.label))
                    .map(|bar| BarTransition {
                        label: bar.label.clone(),
                        color_index: self.series.color_index(&bar.label),
                        phase: BarPhase::Exiting,
                        from_magnitude: bar.magnitude,
                        to_magnitude: bar.magnitude,
                        from_y: bar.y,
                        to_y: bands.offscreen_y(),
                        rank: None,
                    }),
            );
        }

        self.last_rank = remember_ranks(&ranked);
        self.shown = ranked
            .iter()
            .map(|entry| ShownBar {
                label: entry.label.clone(),
                magnitude: entry.magnitude,
                y: bands.row_y(entry.rank),
            })
            .collect();

        let plan = RenderPlan {
            tick_index: index,
            timestamp,
            previous_timestamp: self.previous_timestamp,
            visible_entries: ranked,
            axis: if instant {
                AxisTransition::fixed(axis.to_max)
            } else {
                axis
            },
            layout: bands,
            bars,
            duration: if instant {
                Duration::ZERO
            } else {
                self.settings.tick
            },
            instant,
        };
        self.previous_timestamp = Some(timestamp);
        self.plan = Some(plan);
    }
}

#[cfg(test)]
mod tests {
    use super::{Animator, RaceSettings};
    use crate::race::plan::BarPhase;
    use crate::race::series::{Series, Snapshot};
    use std::time::{Duration, Instant};

    fn series(years: &[(i64, &[(&str, f64)])]) -> Series {
        Series::from_snapshots(
            years
                .iter()
                .map(|(year, entries)| Snapshot::with_entries(*year, entries.iter().copied()))
                .collect(),
        )
    }

    fn counting_series(len: i64) -> Series {
        Series::from_snapshots(
            (0..len)
                .map(|i| Snapshot::with_entries(2000 + i, [("A", 10.0 + i as f64), ("B", 5.0)]))
                .collect(),
        )
    }

    fn labels_by_rank(animator: &Animator) -> Vec<String> {
        animator
            .plan()
            .map(|plan| {
                plan.visible_entries
                    .iter()
                    .map(|entry| entry.label.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    #[test]
    fn rank_swap_between_ticks() {
        let settings = RaceSettings {
            top_n: 2,
            ..RaceSettings::default()
        };
        let mut animator = Animator::new(
            series(&[(2019, &[("A", 100.0), ("B", 90.0)]), (2020, &[("A", 80.0), ("B", 95.0)])]),
            settings,
        );

        animator.start(Instant::now());
        assert_eq!(labels_by_rank(&animator), vec!["A", "B"]);

        let plan = animator.tick().cloned().unwrap();
        assert_eq!(plan.timestamp, 2020);
        assert_eq!(labels_by_rank(&animator), vec!["B", "A"]);

        let b = plan.bars.iter().find(|bar| bar.label == "B").unwrap();
        let a = plan.bars.iter().find(|bar| bar.label == "A").unwrap();
        assert_eq!(b.phase, BarPhase::Updating);
        assert!(b.from_y > b.to_y, "B moves up");
        assert!(a.from_y < a.to_y, "A moves down");
        assert!((a.from_magnitude - 100.0).abs() < f64::EPSILON);
        assert!((a.to_magnitude - 80.0).abs() < f64::EPSILON);
    }

    #[test]
    fn ticks_advance_one_at_a_time_until_the_end() {
        let mut animator = Animator::new(counting_series(5), RaceSettings::default());
        animator.start(Instant::now());
        assert_eq!(animator.state().current_tick_index, 0);

        for expected in 1..5 {
            assert!(animator.tick().is_some());
            assert_eq!(animator.state().current_tick_index, expected);
        }

        assert!(!animator.state().running);
        assert!(!animator.timer_armed());
        assert!(animator.tick().is_none());
        assert_eq!(animator.state().current_tick_index, 4);
    }

    #[test]
    fn empty_series_never_runs() {
        let mut animator = Animator::new(Series::default(), RaceSettings::default());
        assert!(animator.start(Instant::now()).is_none());
        assert!(!animator.state().running);
        assert!(!animator.timer_armed());
        assert!(animator.load_tick(3).is_empty());
    }

    #[test]
    fn single_snapshot_finishes_right_away() {
        let mut animator = Animator::new(counting_series(1), RaceSettings::default());
        assert!(animator.start(Instant::now()).is_some());
        assert!(!animator.state().running);
        assert!(!animator.timer_armed());
    }

    #[test]
    fn start_is_ignored_while_the_timer_runs() {
        let now = Instant::now();
        let mut animator = Animator::new(counting_series(5), RaceSettings::default());
        animator.start(now);
        animator.tick();
        assert!(animator.start(now).is_none());
        assert_eq!(animator.state().current_tick_index, 1);
    }

    #[test]
    fn start_is_ignored_while_paused() {
        let now = Instant::now();
        let mut animator = Animator::new(counting_series(5), RaceSettings::default());
        animator.start(now);
        animator.tick();
        animator.tick();
        animator.pause();

        assert!(animator.start(now).is_none());
        let state = animator.state();
        assert_eq!(state.current_tick_index, 2);
        assert!(state.running && state.paused);
        assert!(!animator.timer_armed());
    }

    #[test]
    fn pause_cancels_the_timer_and_resume_rearms_it() {
        let now = Instant::now();
        let mut animator = Animator::new(counting_series(5), RaceSettings::default());
        animator.start(now);

        animator.pause();
        assert!(animator.state().paused);
        assert!(!animator.timer_armed());
        assert!(animator.poll(now + Duration::from_secs(10)).is_none());
        assert!(animator.tick().is_none());
        assert_eq!(animator.state().current_tick_index, 0);

        let later = now + Duration::from_secs(20);
        animator.resume(later);
        assert!(!animator.state().paused);
        assert_eq!(animator.next_deadline(), Some(later + Duration::from_millis(500)));
        assert!(animator.poll(later + Duration::from_millis(500)).is_some());
        assert_eq!(animator.state().current_tick_index, 1);
    }

    #[test]
    fn controls_outside_their_state_are_ignored() {
        let now = Instant::now();
        let mut animator = Animator::new(counting_series(5), RaceSettings::default());

        animator.pause();
        animator.resume(now);
        assert!(animator.step_forward().is_none());
        assert!(animator.rewind(1).is_none());
        assert!(!animator.state().running);

        animator.start(now);
        animator.resume(now);
        assert!(!animator.state().paused);
        assert!(animator.step_forward().is_none());
        assert!(animator.rewind(2).is_none());
        assert_eq!(animator.state().current_tick_index, 0);
    }

    #[test]
    fn step_forward_stops_at_the_last_snapshot() {
        let mut animator = Animator::new(counting_series(3), RaceSettings::default());
        animator.start(Instant::now());
        animator.pause();

        assert!(animator.step_forward().is_some());
        assert!(animator.step_forward().is_some());
        assert!(animator.step_forward().is_none());
        assert_eq!(animator.state().current_tick_index, 2);
        assert!(animator.state().running);
    }

    #[test]
    fn rewind_clamps_at_zero_and_jumps_without_animation() {
        let mut animator = Animator::new(counting_series(8), RaceSettings::default());
        animator.start(Instant::now());
        for _ in 0..6 {
            animator.tick();
        }
        animator.pause();

        let plan = animator.rewind(2).cloned().unwrap();
        assert_eq!(animator.state().current_tick_index, 4);
        assert!(plan.instant);
        assert!(plan.bars.iter().all(|bar| bar.phase == BarPhase::Updating));
        assert!(!plan.axis.is_moving());

        animator.rewind(1_000_000);
        assert_eq!(animator.state().current_tick_index, 0);
    }

    #[test]
    fn entries_leaving_the_board_exit_downward() {
        let settings = RaceSettings {
            top_n: 1,
            ..RaceSettings::default()
        };
        let mut animator = Animator::new(
            series(&[(1, &[("A", 10.0), ("B", 5.0)]), (2, &[("A", 10.0), ("B", 50.0)])]),
            settings,
        );
        animator.start(Instant::now());
        let plan = animator.tick().cloned().unwrap();

        let a = plan.bars.iter().find(|bar| bar.label == "A").unwrap();
        let b = plan.bars.iter().find(|bar| bar.label == "B").unwrap();
        assert_eq!(a.phase, BarPhase::Exiting);
        assert!((a.to_y - plan.layout.offscreen_y()).abs() < 1e-9);
        assert_eq!(b.phase, BarPhase::Entering);
        assert!(b.from_magnitude.abs() < f64::EPSILON);
    }

    #[test]
    fn restart_after_finish_clears_memory() {
        let mut animator = Animator::new(counting_series(2), RaceSettings::default());
        let now = Instant::now();
        animator.start(now);
        animator.tick();
        assert!(!animator.state().running);

        let plan = animator.start(now).cloned().unwrap();
        assert_eq!(plan.tick_index, 0);
        assert_eq!(plan.previous_timestamp, None);
        assert!(plan.bars.iter().all(|bar| bar.phase == BarPhase::Entering));
    }

    #[test]
    fn teardown_cancels_the_timer() {
        let mut animator = Animator::new(counting_series(4), RaceSettings::default());
        animator.start(Instant::now());
        animator.teardown();
        assert!(!animator.timer_armed());
        assert!(!animator.state().running);
    }
}
