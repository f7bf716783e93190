//! # glasscalc-core - Core Domain Types
//!
//! Foundation crate for glasscalc. Provides domain types, error handling,
//! display formatting and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`Mode`] - Calculator mode and the symbols/functions legal in it
//! - [`Operator`] - Binary operators with canonical and display forms
//! - [`CalcFunction`] - Unary functions evaluated remotely
//! - [`EvalOutcome`], [`FailureKind`] - Result of one remote evaluation
//!
//! ### Formatting (`format`)
//! - [`format_display()`] - Bounded-width projection of the display value
//! - [`number_to_display()`] - Stringify a numeric service reply
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum grouped by layer
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait that logs context while converting errors
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use glasscalc_core::prelude::*;
//! ```

pub mod error;
pub mod format;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all glasscalc crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

pub use error::{Error, Result, ResultExt};
pub use format::{format_display, number_to_display, DISPLAY_PRECISION, MAX_DISPLAY_LEN};
pub use types::{
    normalize_operators, AppPhase, CalcFunction, EvalOutcome, FailureKind, Mode, Operator,
    NETWORK_ERROR_MESSAGE, UNKNOWN_ERROR_MESSAGE,
};
