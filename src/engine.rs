// engine.rs

use chrono::{Local, NaiveTime, Timelike};

use crate::error::{CalcError, HistoryWarning};
use crate::history::History;

/// The closed set of supported operators.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub fn from_symbol(symbol: char) -> Result<Self, CalcError> {
        match symbol {
            '+' => Ok(Self::Add),
            '-' => Ok(Self::Subtract),
            '*' => Ok(Self::Multiply),
            '/' => Ok(Self::Divide),
            other => Err(CalcError::UnsupportedOperator(other)),
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Pure arithmetic. The divisor is checked up front rather than
    /// letting the division produce an infinity or NaN.
    pub fn apply(self, a: f64, b: f64) -> Result<f64, CalcError> {
        match self {
            Self::Add => Ok(a + b),
            Self::Subtract => Ok(a - b),
            Self::Multiply => Ok(a * b),
            Self::Divide => {
                if b == 0.0 {
                    Err(CalcError::DivisionByZero)
                } else {
                    Ok(a / b)
                }
            }
        }
    }
}

/// A successful calculation: the numeric value, the entry recorded for it,
/// and a warning when the entry reached memory but not the backing file.
pub struct Evaluation {
    pub value: f64,
    pub entry: String,
    pub warning: Option<HistoryWarning>,
}

/// Dispatches calculations and records each successful one in the history.
pub struct Calculator {
    history: History,
}

impl Calculator {
    pub fn new(history: History) -> Self {
        Self { history }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }

    /// Validates the operator, computes, and appends a timestamped entry.
    /// On any error nothing is recorded; a persistence failure still
    /// returns the result, carrying the warning alongside it.
    pub fn calculate(&mut self, a: f64, symbol: char, b: f64) -> Result<Evaluation, CalcError> {
        let operator = Operator::from_symbol(symbol)?;
        let value = operator.apply(a, b)?;
        let entry = format_entry(Local::now().time(), a, operator, b, value);
        let warning = self.history.append(entry.clone()).err();
        Ok(Evaluation {
            value,
            entry,
            warning,
        })
    }
}

/// `[HH:MM:SS] <a> <op> <b> = <result>`. Debug formatting keeps a trailing
/// `.0` on whole numbers, the same rendering the stored entries use.
fn format_entry(at: NaiveTime, a: f64, operator: Operator, b: f64, result: f64) -> String {
    format!(
        "[{:02}:{:02}:{:02}] {:?} {} {:?} = {:?}",
        at.hour(),
        at.minute(),
        at.second(),
        a,
        operator.symbol(),
        b,
        result
    )
}
