pub mod analytics;
pub mod api;
pub mod cache;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod http;
pub mod services;
pub mod sheets;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use serde::Serialize;

use crate::cli::{Cli, Command};
use crate::config::settings::AppConfig;
use crate::services::server::ServerService;
use crate::services::AnalysisService;
use crate::sheets::{find_roster, load_rosters};

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_serve(port: u16) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::from_env();
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_teams() -> Result<()> {
    let config = AppConfig::from_env();
    let rosters = load_rosters(&config.data.workbook_path, &config.data.home_nationality)?;
    for roster in &rosters {
        println!("{:<6} {:<32} {} players", roster.short_name, roster.name, roster.players.len());
    }
    Ok(())
}

pub fn handle_squad(team: &str, form: f64, consistency: f64) -> Result<()> {
    let config = AppConfig::from_env();
    let rosters = load_rosters(&config.data.workbook_path, &config.data.home_nationality)?;
    let roster = find_roster(&rosters, team)?;

    let service = AnalysisService::new(config);
    let squad = service.generate_squad(roster, consistency, form)?;
    print_json(&squad)
}

pub fn handle_predict(home: &str, away: &str, seed: Option<u64>) -> Result<()> {
    let config = AppConfig::from_env();
    let rosters = load_rosters(&config.data.workbook_path, &config.data.home_nationality)?;
    let team_a = find_roster(&rosters, home)?;
    let team_b = find_roster(&rosters, away)?;

    let service = AnalysisService::new(config);
    let prediction = service.predict_match(team_a, team_b, seed)?;
    print_json(&prediction)
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}
