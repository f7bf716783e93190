//! Core domain types for the calculator
//!
//! - [`Mode`] - input-symbol legality profile (Simple, Advanced, Scientific)
//! - [`Operator`] - binary operators and their display glyphs
//! - [`CalcFunction`] - unary functions evaluated by the remote service
//! - [`EvalOutcome`] - resolved result of one remote evaluation

use serde::{Deserialize, Serialize};

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

// ─────────────────────────────────────────────────────────────────────────────
// Mode
// ─────────────────────────────────────────────────────────────────────────────

/// Calculator mode. The ordinal (1-3) is what travels on the wire as
/// `calculator_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Mode {
    #[default]
    Simple,
    Advanced,
    Scientific,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Simple, Mode::Advanced, Mode::Scientific];

    /// Wire ordinal: 1, 2 or 3
    pub fn ordinal(self) -> u8 {
        match self {
            Mode::Simple => 1,
            Mode::Advanced => 2,
            Mode::Scientific => 3,
        }
    }

    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        match ordinal {
            1 => Some(Mode::Simple),
            2 => Some(Mode::Advanced),
            3 => Some(Mode::Scientific),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mode::Simple => "Simple",
            Mode::Advanced => "Advanced",
            Mode::Scientific => "Scientific",
        }
    }

    /// Next mode, wrapping around
    pub fn next(self) -> Self {
        match self {
            Mode::Simple => Mode::Advanced,
            Mode::Advanced => Mode::Scientific,
            Mode::Scientific => Mode::Simple,
        }
    }

    /// Previous mode, wrapping around
    pub fn previous(self) -> Self {
        match self {
            Mode::Simple => Mode::Scientific,
            Mode::Advanced => Mode::Simple,
            Mode::Scientific => Mode::Advanced,
        }
    }

    /// Parentheses and the power operator need mode 2 or 3.
    pub fn allows_grouping(self) -> bool {
        self != Mode::Simple
    }

    /// Whether `symbol` may be appended to the expression in this mode.
    pub fn allows_symbol(self, symbol: &str) -> bool {
        match symbol {
            "(" | ")" => self.allows_grouping(),
            s => match Operator::from_symbol(s) {
                Some(op) => op != Operator::Power || self.allows_grouping(),
                None => is_number_symbol(s),
            },
        }
    }

    /// Whether `function` has a control in this mode.
    pub fn allows_function(self, function: CalcFunction) -> bool {
        match self {
            Mode::Simple => false,
            Mode::Advanced => matches!(
                function,
                CalcFunction::Power | CalcFunction::Sqrt | CalcFunction::Percent
            ),
            Mode::Scientific => true,
        }
    }
}

impl TryFrom<u8> for Mode {
    type Error = String;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        Mode::from_ordinal(value).ok_or_else(|| format!("invalid mode {value}, expected 1, 2 or 3"))
    }
}

impl From<Mode> for u8 {
    fn from(mode: Mode) -> Self {
        mode.ordinal()
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A single digit or the decimal point
fn is_number_symbol(symbol: &str) -> bool {
    let mut chars = symbol.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => c.is_ascii_digit() || c == '.',
        _ => false,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operators
// ─────────────────────────────────────────────────────────────────────────────

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl Operator {
    /// Canonical ASCII form sent to the service
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
            Operator::Power => "**",
        }
    }

    /// Form shown on keypad buttons and appended by them
    pub fn glyph(self) -> &'static str {
        match self {
            Operator::Multiply => "×",
            Operator::Divide => "÷",
            other => other.symbol(),
        }
    }

    /// Accepts both the canonical and the display form.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Subtract),
            "*" | "×" => Some(Operator::Multiply),
            "/" | "÷" => Some(Operator::Divide),
            "**" => Some(Operator::Power),
            _ => None,
        }
    }
}

/// Replace display glyphs with their canonical ASCII operators.
pub fn normalize_operators(expression: &str) -> String {
    expression.replace('÷', "/").replace('×', "*")
}

// ─────────────────────────────────────────────────────────────────────────────
// Functions
// ─────────────────────────────────────────────────────────────────────────────

/// Unary functions understood by `/calculate_function`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalcFunction {
    Sqrt,
    Sin,
    Cos,
    Tan,
    Log,
    Ln,
    Exp,
    Factorial,
    Percent,
    /// Squares the current value
    Power,
}

impl CalcFunction {
    pub const ALL: [CalcFunction; 10] = [
        CalcFunction::Sqrt,
        CalcFunction::Sin,
        CalcFunction::Cos,
        CalcFunction::Tan,
        CalcFunction::Log,
        CalcFunction::Ln,
        CalcFunction::Exp,
        CalcFunction::Factorial,
        CalcFunction::Percent,
        CalcFunction::Power,
    ];

    /// Name used in the `function` field of the request body
    pub fn wire_name(self) -> &'static str {
        match self {
            CalcFunction::Sqrt => "sqrt",
            CalcFunction::Sin => "sin",
            CalcFunction::Cos => "cos",
            CalcFunction::Tan => "tan",
            CalcFunction::Log => "log",
            CalcFunction::Ln => "ln",
            CalcFunction::Exp => "exp",
            CalcFunction::Factorial => "factorial",
            CalcFunction::Percent => "percent",
            CalcFunction::Power => "power",
        }
    }

    pub fn from_wire_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.wire_name() == name)
    }

    /// Keypad label
    pub fn label(self) -> &'static str {
        match self {
            CalcFunction::Sqrt => "√",
            CalcFunction::Sin => "sin",
            CalcFunction::Cos => "cos",
            CalcFunction::Tan => "tan",
            CalcFunction::Log => "log",
            CalcFunction::Ln => "ln",
            CalcFunction::Exp => "eˣ",
            CalcFunction::Factorial => "n!",
            CalcFunction::Percent => "%",
            CalcFunction::Power => "x²",
        }
    }

    /// Functions that are undefined or degenerate at exactly zero. They are
    /// never sent to the service while the display reads "0".
    pub fn rejects_zero(self) -> bool {
        matches!(
            self,
            CalcFunction::Log | CalcFunction::Ln | CalcFunction::Sqrt | CalcFunction::Factorial
        )
    }
}

impl std::fmt::Display for CalcFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.wire_name())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Evaluation outcome
// ─────────────────────────────────────────────────────────────────────────────

/// Display message for transport failures
pub const NETWORK_ERROR_MESSAGE: &str = "NETWORK ERROR";

/// Display message for error replies that carry no message
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred";

/// Why an evaluation failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The service understood the request but could not produce a result
    Application,
    /// The call did not complete or the reply could not be decoded
    Transport,
}

/// Resolved result of one remote evaluation
#[derive(Debug, Clone, PartialEq)]
pub enum EvalOutcome {
    /// Stringified numeric result
    Succeeded(String),
    Failed { kind: FailureKind, message: String },
}

impl EvalOutcome {
    pub fn application_error(message: Option<String>) -> Self {
        Self::Failed {
            kind: FailureKind::Application,
            message: message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| UNKNOWN_ERROR_MESSAGE.to_string()),
        }
    }

    pub fn network_error() -> Self {
        Self::Failed {
            kind: FailureKind::Transport,
            message: NETWORK_ERROR_MESSAGE.to_string(),
        }
    }
}
