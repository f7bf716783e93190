//! glasscalc library
//!
//! Headless (NDJSON) frontend for the calculator engine. The terminal UI
//! lives in `glasscalc-tui`.

pub mod headless;

// Re-export main entry points
pub use headless::runner::run_headless;
