pub mod calculator;
pub mod facts;
pub mod logic;
pub mod narrative;
pub mod series;
