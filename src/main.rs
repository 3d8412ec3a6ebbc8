use anyhow::Result;

use cricsquad::cli::Command;
use cricsquad::{
    handle_completions, handle_predict, handle_serve, handle_squad, handle_teams, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Serve { port } => handle_serve(*port),
        Command::Teams => handle_teams(),
        Command::Squad {
            team,
            form,
            consistency,
        } => handle_squad(team, *form, *consistency),
        Command::Predict { home, away, seed } => handle_predict(home, away, *seed),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
