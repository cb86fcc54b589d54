// input.rs

use crate::engine::Operator;
use crate::error::CalcError;

/// One menu selection, as entered at the main prompt.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MenuChoice {
    Calculate(Operator),
    ShowHistory,
    ClearHistory,
    Exit,
}

pub fn parse_choice(input: &str) -> Option<MenuChoice> {
    match input.trim() {
        "1" => Some(MenuChoice::Calculate(Operator::Add)),
        "2" => Some(MenuChoice::Calculate(Operator::Subtract)),
        "3" => Some(MenuChoice::Calculate(Operator::Multiply)),
        "4" => Some(MenuChoice::Calculate(Operator::Divide)),
        "5" => Some(MenuChoice::ShowHistory),
        "6" => Some(MenuChoice::ClearHistory),
        "7" => Some(MenuChoice::Exit),
        _ => None,
    }
}

pub fn parse_number(input: &str) -> Result<f64, CalcError> {
    let trimmed = input.trim();
    trimmed
        .parse::<f64>()
        .map_err(|_| CalcError::InvalidNumber(trimmed.to_string()))
}

/// Only an explicit yes clears the history; anything else cancels.
pub fn is_affirmative(input: &str) -> bool {
    matches!(input.trim().to_lowercase().as_str(), "y" | "yes")
}
