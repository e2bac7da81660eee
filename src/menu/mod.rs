mod day;
mod dish;
mod weekly_menu;

pub use day::Day;
pub use dish::Dish;
pub use weekly_menu::{Menu, MenuBuilder};
