use serde::Serialize;

use super::animator::PlaybackState;

/// Which playback buttons are usable right now.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Controls {
    pub start: bool,
    pub pause: bool,
    pub resume: bool,
    pub step_forward: bool,
    pub step_backward: bool,
    pub rewind: bool,
}

impl Controls {
    pub const fn for_state(state: PlaybackState, last_index: usize) -> Self {
        let paused = state.running && state.paused;
        let can_go_back = paused && state.current_tick_index > 0;
        Self {
            start: !state.running,
            pause: state.running && !state.paused,
            resume: paused,
            step_forward: paused && state.current_tick_index < last_index,
            step_backward: can_go_back,
            rewind: can_go_back,
        }
    }
}
