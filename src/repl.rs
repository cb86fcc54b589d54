// repl.rs

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::engine::{Calculator, Operator};
use crate::history::{History, DEFAULT_SHOW_LIMIT};
use crate::input::{self, MenuChoice};

const HISTORY_FILE: &str = "history.txt";

pub fn start_repl() -> anyhow::Result<()> {
    let mut history = History::new(HISTORY_FILE);
    if let Err(warning) = history.load() {
        eprintln!("Warning: {}", warning);
    }
    let mut calc = Calculator::new(history);
    let mut rl = DefaultEditor::new()?;

    println!("Calculator with history");
    loop {
        print_menu();
        let line = match rl.readline("> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        };
        let _ = rl.add_history_entry(line.as_str());
        match input::parse_choice(&line) {
            Some(MenuChoice::Calculate(operator)) => {
                run_calculation(&mut rl, &mut calc, operator)?;
            }
            Some(MenuChoice::ShowHistory) => {
                println!("{}", calc.history().format_recent(DEFAULT_SHOW_LIMIT));
            }
            Some(MenuChoice::ClearHistory) => {
                run_clear(&mut rl, &mut calc)?;
            }
            Some(MenuChoice::Exit) => break,
            None => println!("Please pick an option between 1 and 7."),
        }
    }
    println!("Goodbye! Calculations in history: {}", calc.history().len());
    Ok(())
}

fn print_menu() {
    println!();
    println!("1. Add");
    println!("2. Subtract");
    println!("3. Multiply");
    println!("4. Divide");
    println!("5. Show history");
    println!("6. Clear history");
    println!("7. Exit");
}

fn run_calculation(
    rl: &mut DefaultEditor,
    calc: &mut Calculator,
    operator: Operator,
) -> anyhow::Result<()> {
    let a = match prompt_number(rl, "First number: ")? {
        Some(n) => n,
        None => return Ok(()),
    };
    let b = match prompt_number(rl, "Second number: ")? {
        Some(n) => n,
        None => return Ok(()),
    };
    match calc.calculate(a, operator.symbol(), b) {
        Ok(eval) => {
            if let Some(warning) = eval.warning {
                eprintln!("Warning: {}", warning);
            }
            println!("{:?} {} {:?} = {:?}", a, operator.symbol(), b, eval.value);
        }
        Err(err) => println!("Error: {}", err),
    }
    Ok(())
}

// Returns None when the operand was invalid or the prompt was cancelled;
// either way the caller falls back to the menu.
fn prompt_number(rl: &mut DefaultEditor, prompt: &str) -> anyhow::Result<Option<f64>> {
    match rl.readline(prompt) {
        Ok(line) => match input::parse_number(&line) {
            Ok(n) => Ok(Some(n)),
            Err(err) => {
                println!("Error: {}", err);
                Ok(None)
            }
        },
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
        Err(err) => Err(err.into()),
    }
}

fn run_clear(rl: &mut DefaultEditor, calc: &mut Calculator) -> anyhow::Result<()> {
    match rl.readline("Clear all history? (y/n): ") {
        Ok(answer) if input::is_affirmative(&answer) => match calc.history_mut().clear() {
            Ok(()) => println!("History cleared."),
            Err(warning) => {
                println!("History cleared in memory.");
                eprintln!("Warning: {}", warning);
            }
        },
        Ok(_) | Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
            println!("Clear cancelled.");
        }
        Err(err) => return Err(err.into()),
    }
    Ok(())
}
