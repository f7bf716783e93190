//! Custom widgets for the calculator screen

mod display;
mod keypad;
mod mode_tabs;
mod status_bar;

pub use display::CalcDisplay;
pub use keypad::{keypad_layout, Keypad};
pub use mode_tabs::{tab_layout, ModeTabs};
pub use status_bar::StatusBar;
