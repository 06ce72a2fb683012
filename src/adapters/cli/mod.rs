//! CLI adapter - menu-driven terminal front end.

mod menu;

pub use menu::{Menu, MenuError, MenuOption};
