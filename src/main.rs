use anyhow::Result;

use ftc_forecast::cli::Command;
use ftc_forecast::{handle_completions, handle_predict, handle_serve, handle_upcoming, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
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
        Command::Upcoming { season } => handle_upcoming(*season),
        Command::Predict {
            event_code,
            team,
            season,
            json,
        } => handle_predict(event_code, *team, *season, *json),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
