pub mod menu;
pub mod style;

pub use menu::{MenuOption, SelectMenu};
