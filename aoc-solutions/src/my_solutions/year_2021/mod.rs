pub mod day_18;
