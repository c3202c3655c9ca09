mod day_1;
mod day_2;
mod day_4;
pub mod day_7;
