//! Mode switching

use crate::state::AppState;
use glasscalc_core::prelude::*;
use glasscalc_core::Mode;

use super::{expression, UpdateResult};

/// Activate `mode` and reset all other calculator state
pub fn select_mode(state: &mut AppState, mode: Mode) -> UpdateResult {
    if state.mode != mode {
        info!("Switching to {} mode", mode);
    }
    state.mode = mode;
    expression::clear_all(state)
}
