// main.rs

mod engine;
mod error;
mod history;
mod input;
mod repl;

fn main() -> anyhow::Result<()> {
    repl::start_repl()
}
