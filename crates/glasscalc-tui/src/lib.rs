//! glasscalc-tui - Terminal UI for glasscalc
//!
//! This crate provides the ratatui-based terminal interface. It drives an
//! Engine from glasscalc-app and adds rendering, keyboard and pointer event
//! polling, and the calculator widgets.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
