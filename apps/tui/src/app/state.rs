use std::time::Instant;

use carstats::race::{Animator, Controls, PlanFrame, PlaybackState, RaceSettings, Series};
use carstats::stats::{self, BrandTotal, ChoroplethScale};

/// Steps taken by the rewind control.
pub const REWIND_STEPS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppScreen {
    Overview,
    Race,
}

impl AppScreen {
    pub const ALL: [Self; 2] = [Self::Overview, Self::Race];

    pub const fn index(self) -> usize {
        match self {
            Self::Overview => 0,
            Self::Race => 1,
        }
    }

    /// The next tab, wrapping after the last one.
    pub const fn next(self) -> Self {
        match self {
            Self::Overview => Self::Race,
            Self::Race => Self::Overview,
        }
    }

    pub const fn previous(self) -> Self {
        match self {
            Self::Overview => Self::Race,
            Self::Race => Self::Overview,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Race => "Brand Race",
        }
    }
}

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub screen: AppScreen,
    pub show_help: bool,
    pub status_message: String,
    pub animator: Animator,
    /// When the current render plan began animating.
    pub plan_started: Instant,
    pub world_total: u64,
    pub brands: Vec<BrandTotal>,
    pub countries: Vec<(&'static str, u64)>,
    pub choropleth: ChoroplethScale,
    pub country_offset: usize,
}

impl App {
    pub fn new(series: Series, settings: RaceSettings) -> Self {
        let world_total = stats::world_total();
        Self {
            running: true,
            screen: AppScreen::Overview,
            show_help: false,
            status_message: String::new(),
            animator: Animator::new(series, settings),
            plan_started: Instant::now(),
            world_total,
            brands: stats::brand_totals(world_total),
            countries: stats::countries_by_cars(),
            choropleth: stats::choropleth(),
            country_offset: 0,
        }
    }

    /// Fires the playback timer when it is due.
    pub fn update(&mut self, now: Instant) {
        if self.animator.poll(now).is_some() {
            self.plan_started = now;
        }
    }

    pub fn playback(&self) -> PlaybackState {
        self.animator.state()
    }

    pub fn controls(&self) -> Controls {
        let last = self.animator.series().last_index().unwrap_or(0);
        Controls::for_state(self.animator.state(), last)
    }

    /// The race as it should look at `now`.
    pub fn race_frame(&self, now: Instant) -> Option<PlanFrame> {
        let plan = self.animator.plan()?;
        let progress = plan.progress(now.saturating_duration_since(self.plan_started));
        Some(plan.frame(progress))
    }

    pub fn start_race(&mut self, now: Instant) {
        if self.animator.series().is_empty() {
            self.status_message = "No race data loaded.".to_string();
            return;
        }
        if self.animator.start(now).is_some() {
            self.plan_started = now;
            self.status_message.clear();
        }
    }

    /// Pauses a running race or resumes a paused one.
    pub fn toggle_pause(&mut self, now: Instant) {
        let state = self.animator.state();
        if state.paused {
            self.animator.resume(now);
        } else {
            self.animator.pause();
        }
    }

    pub fn step_forward(&mut self, now: Instant) {
        if self.animator.step_forward().is_some() {
            self.plan_started = now;
        }
    }

    pub fn step_backward(&mut self, now: Instant) {
        if self.animator.step_backward().is_some() {
            self.plan_started = now;
        }
    }

    pub fn rewind(&mut self, now: Instant) {
        if self.animator.rewind(REWIND_STEPS).is_some() {
            self.plan_started = now;
        }
    }

    pub fn scroll_countries(&mut self, delta: isize) {
        let max = self.countries.len().saturating_sub(1);
        self.country_offset = self.country_offset.saturating_add_signed(delta).min(max);
    }

    pub fn quit(&mut self) {
        self.animator.teardown();
        self.running = false;
    }
}
