pub mod day_10;
pub mod day_16;
pub mod day_18;
pub mod day_20;
