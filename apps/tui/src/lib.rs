// Export our modules for use in binaries and tests
pub mod config;
pub mod race;
pub mod stats;

pub use race::{Animator, RaceSettings, RenderPlan, Series};
