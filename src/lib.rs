pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod http;
pub mod prediction;
pub mod schedule;
pub mod services;

use anyhow::Result;
use chrono::Utc;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;

use crate::api::models::PredictionsResponse;
use crate::api::parsers::EventCodeValidator;
use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::services::forecast::ForecastService;
use crate::services::report;
use crate::services::server::ServerService;

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

pub fn handle_upcoming(season: Option<i32>) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let service = ForecastService::new(AppConfig::from_env().with_season(season))?;
        let now = Utc::now();
        let window = service.upcoming_events(now).await?;
        print!("{}", report::render_upcoming(&window, now));
        Ok(())
    })
}

pub fn handle_predict(event_code: &str, team: Option<u32>, season: Option<i32>, json: bool) -> Result<()> {
    let event_code = EventCodeValidator::new()?.parse(event_code)?;

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let service = ForecastService::new(AppConfig::from_env().with_season(season))?;
        let prediction_report = service.predictions(&event_code, team).await;

        if json {
            let payload = PredictionsResponse::from(prediction_report);
            println!("{}", serde_json::to_string_pretty(&payload)?);
        } else {
            print!("{}", report::render_predictions(&event_code, &prediction_report));
        }
        Ok(())
    })
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}
