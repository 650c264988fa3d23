pub mod histogram;
pub mod streaks;
