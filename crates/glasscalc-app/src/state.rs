//! Application state (Model in TEA pattern)

use crate::config::Settings;
use glasscalc_core::{format_display, AppPhase, CalcFunction, Mode};

/// What an outstanding remote call is computing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvaluationKind {
    Expression,
    Function(CalcFunction),
}

/// Evaluation lifecycle. At most one call is outstanding at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EvaluationPhase {
    #[default]
    Idle,
    Pending {
        request_id: u64,
        kind: EvaluationKind,
    },
}

/// Error message currently occupying the display
#[derive(Debug, Clone)]
pub struct TransientError {
    pub message: String,
    /// Matches the `ErrorExpired` message that may clear it
    pub generation: u64,
}

/// Reachability of the evaluation service, from the startup probe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ServerStatus {
    #[default]
    Unknown,
    Online,
    Offline,
}

/// What the renderer should draw in the display area
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayView {
    pub text: String,
    pub error: bool,
    pub loading: bool,
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    /// Application phase
    pub phase: AppPhase,

    /// Active calculator mode
    pub mode: Mode,

    /// Expression being assembled
    pub expression: String,

    /// Raw display value; never empty
    pub display: String,

    /// Set by a successful evaluation, cleared by the next accepted append
    pub just_calculated: bool,

    /// Outstanding remote call, if any
    pub evaluation: EvaluationPhase,

    /// Error shown instead of the display value
    pub error: Option<TransientError>,

    /// Bumped every time an error is raised
    pub error_generation: u64,

    /// Id handed to the next remote call
    pub next_request_id: u64,

    /// Result of the startup health probe
    pub server: ServerStatus,

    /// Loaded settings
    pub settings: Settings,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_settings(Settings::default())
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            phase: AppPhase::Running,
            mode: settings.behavior.default_mode,
            expression: String::new(),
            display: "0".to_string(),
            just_calculated: false,
            evaluation: EvaluationPhase::Idle,
            error: None,
            error_generation: 0,
            next_request_id: 1,
            server: ServerStatus::Unknown,
            settings,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// True while a remote call is outstanding
    pub fn is_evaluating(&self) -> bool {
        matches!(self.evaluation, EvaluationPhase::Pending { .. })
    }

    /// The display went through a normal refresh; any error marker is gone
    pub(crate) fn refresh_display(&mut self) {
        self.error = None;
    }

    /// Allocate an id for a new remote call
    pub(crate) fn take_request_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// Projection consumed by renderers
    pub fn display_view(&self) -> DisplayView {
        let loading = self.is_evaluating();
        match &self.error {
            Some(error) => DisplayView {
                text: error.message.clone(),
                error: true,
                loading,
            },
            None => DisplayView {
                text: format_display(&self.display),
                error: false,
                loading,
            },
        }
    }
}
