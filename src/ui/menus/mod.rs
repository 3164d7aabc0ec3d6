//! Menu system: the main menu and the entries it dispatches to

pub mod common;
pub mod main_menu;

pub use common::{CycleAction, MenuOption};
pub use main_menu::{MainMenu, Selection};
