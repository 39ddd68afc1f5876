pub mod charts;
pub mod popup;
pub mod race_bars;
pub mod tables;
