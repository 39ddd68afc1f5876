//! Bar chart race engine: series loading, ranking, axis and layout
//! computation, and timer-driven playback that emits render plans.

pub mod animator;
pub mod axis;
pub mod controls;
pub mod format;
pub mod layout;
pub mod plan;
pub mod rank;
pub mod series;
pub mod timer;

pub use animator::{Animator, PlaybackState, RaceSettings};
pub use controls::Controls;
pub use plan::{BarFrame, PlanFrame, RenderPlan};
pub use series::{DatasetError, Series, Snapshot};

/// Ordinal palette; a label's color is its first-seen index modulo the length.
pub const PALETTE: [(u8, u8, u8); 10] = [
    (0x1f, 0x77, 0xb4),
    (0xff, 0x7f, 0x0e),
    (0x2c, 0xa0, 0x2c),
    (0xd6, 0x27, 0x28),
    (0x94, 0x67, 0xbd),
    (0x8c, 0x56, 0x4b),
    (0xe3, 0x77, 0xc2),
    (0x7f, 0x7f, 0x7f),
    (0xbc, 0xbd, 0x22),
    (0x17, 0xbe, 0xcf),
];

pub const fn palette_color(index: usize) -> (u8, u8, u8) {
    PALETTE[index % PALETTE.len()]
}
