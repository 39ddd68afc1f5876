pub mod overview;
pub mod race;
