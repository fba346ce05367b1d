use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(author, version, about = "FTC event window and match outcome forecasts")]
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
    /// Print events that are live or start within the lookahead window
    Upcoming {
        /// Season year (defaults to FTC_SEASON or 2024)
        #[arg(short, long)]
        season: Option<i32>,
    },
    /// Print predicted outcomes for the unplayed matches of an event
    Predict {
        /// Event code, e.g. USNYNYQ1
        event_code: String,
        /// Only matches involving this team
        #[arg(short, long)]
        team: Option<u32>,
        /// Season year (defaults to FTC_SEASON or 2024)
        #[arg(short, long)]
        season: Option<i32>,
        /// Print the JSON payload instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_defaults_to_port_3000() {
        let cli = Cli::try_parse_from(["ftc_forecast", "serve"]).unwrap();
        assert_eq!(cli.command, Command::Serve { port: 3000 });
    }

    #[test]
    fn test_predict_arguments() {
        let cli = Cli::try_parse_from(["ftc_forecast", "predict", "USNYNYQ1", "--team", "16236", "--json"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Predict {
                event_code: "USNYNYQ1".to_string(),
                team: Some(16236),
                season: None,
                json: true,
            }
        );
    }

    #[test]
    fn test_predict_requires_event_code() {
        assert!(Cli::try_parse_from(["ftc_forecast", "predict"]).is_err());
    }
}
