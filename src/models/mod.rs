pub mod event;
pub mod narrative;
pub mod time_of_day;
