use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(author, version, about = "CricSquad IPL squad builder and match predictor")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Start the backend server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// List the teams found in the workbook
    Teams,
    /// Recommend a playing XI for one team
    Squad {
        /// Team sheet name, e.g. CSK
        #[arg(short, long)]
        team: String,
        /// Form weight
        #[arg(short, long, default_value_t = 70.0)]
        form: f64,
        /// Consistency weight
        #[arg(short, long, default_value_t = 30.0)]
        consistency: f64,
    },
    /// Predict a match between two teams
    Predict {
        #[arg(long)]
        home: String,
        #[arg(long)]
        away: String,
        /// Seed for reproducible projected scores
        #[arg(short, long)]
        seed: Option<u64>,
    },
    /// Print shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn squad_weights_default_to_form_heavy() {
        let cli = Cli::try_parse_from(["cricsquad", "squad", "--team", "CSK"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Squad {
                team: "CSK".into(),
                form: 70.0,
                consistency: 30.0
            }
        );
    }

    #[test]
    fn predict_accepts_optional_seed() {
        let cli =
            Cli::try_parse_from(["cricsquad", "predict", "--home", "MI", "--away", "RCB", "-s", "9"])
                .unwrap();
        assert!(matches!(cli.command, Command::Predict { seed: Some(9), .. }));
    }
}
