//! On-screen keypad model
//!
//! Each mode has its own grid of [`Button`]s. A button that is not on the
//! active mode's keypad cannot be pressed; this is how pointer input gets the
//! same mode legality as keyboard input.

use glasscalc_core::{CalcFunction, Mode, Operator};

/// A keypad button (or mode tab) identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Digit(char),
    Decimal,
    Operator(Operator),
    OpenParen,
    CloseParen,
    Equals,
    Clear,
    ClearEntry,
    Function(CalcFunction),
    /// Mode tab in the header
    Mode(Mode),
}

impl Button {
    /// Text drawn on the button
    pub fn label(&self) -> String {
        match self {
            Button::Digit(d) => d.to_string(),
            Button::Decimal => ".".to_string(),
            Button::Operator(Operator::Power) => "xʸ".to_string(),
            Button::Operator(op) => op.glyph().to_string(),
            Button::OpenParen => "(".to_string(),
            Button::CloseParen => ")".to_string(),
            Button::Equals => "=".to_string(),
            Button::Clear => "C".to_string(),
            Button::ClearEntry => "CE".to_string(),
            Button::Function(f) => f.label().to_string(),
            Button::Mode(m) => m.label().to_string(),
        }
    }

    /// Whether this button exists while `mode` is active
    pub fn available_in(&self, mode: Mode) -> bool {
        match self {
            Button::Mode(_) => true,
            other => keypad_rows(mode).iter().copied().flatten().any(|b| b == other),
        }
    }
}

const fn d(c: char) -> Button {
    Button::Digit(c)
}

const fn op(o: Operator) -> Button {
    Button::Operator(o)
}

const fn f(func: CalcFunction) -> Button {
    Button::Function(func)
}

const SIMPLE: &[&[Button]] = &[
    &[Button::Clear, Button::ClearEntry, op(Operator::Divide), op(Operator::Multiply)],
    &[d('7'), d('8'), d('9'), op(Operator::Subtract)],
    &[d('4'), d('5'), d('6'), op(Operator::Add)],
    &[d('1'), d('2'), d('3'), Button::Equals],
    &[d('0'), Button::Decimal],
];

const ADVANCED: &[&[Button]] = &[
    &[
        Button::Clear,
        Button::ClearEntry,
        Button::OpenParen,
        Button::CloseParen,
        op(Operator::Divide),
    ],
    &[d('7'), d('8'), d('9'), f(CalcFunction::Power), op(Operator::Multiply)],
    &[d('4'), d('5'), d('6'), f(CalcFunction::Sqrt), op(Operator::Subtract)],
    &[d('1'), d('2'), d('3'), f(CalcFunction::Percent), op(Operator::Add)],
    &[d('0'), Button::Decimal, op(Operator::Power), Button::Equals],
];

const SCIENTIFIC: &[&[Button]] = &[
    &[
        f(CalcFunction::Sin),
        f(CalcFunction::Cos),
        f(CalcFunction::Tan),
        f(CalcFunction::Log),
        f(CalcFunction::Ln),
    ],
    &[
        Button::Clear,
        Button::ClearEntry,
        Button::OpenParen,
        Button::CloseParen,
        op(Operator::Divide),
    ],
    &[d('7'), d('8'), d('9'), f(CalcFunction::Power), op(Operator::Multiply)],
    &[d('4'), d('5'), d('6'), f(CalcFunction::Sqrt), op(Operator::Subtract)],
    &[d('1'), d('2'), d('3'), f(CalcFunction::Factorial), op(Operator::Add)],
    &[
        d('0'),
        Button::Decimal,
        f(CalcFunction::Exp),
        f(CalcFunction::Percent),
        op(Operator::Power),
    ],
    &[Button::Equals],
];

/// Button grid for a mode, top row first
pub fn keypad_rows(mode: Mode) -> &'static [&'static [Button]] {
    match mode {
        Mode::Simple => SIMPLE,
        Mode::Advanced => ADVANCED,
        Mode::Scientific => SCIENTIFIC,
    }
}
