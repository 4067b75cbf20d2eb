// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use clap::{Args, Parser, Subcommand};
use jobscout::application::dto::extract_request::ExtractRequestDto;
use jobscout::config::settings::Settings;
use jobscout::domain::services::extraction_service::ExtractionService;
use jobscout::domain::services::profile_service::ProfileService;
use jobscout::presentation::routes;
use std::process::ExitCode;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use jobscout::utils::telemetry;

/// jobscout - 职位页面获取与信息提取
#[derive(Parser, Debug)]
#[command(name = "jobscout", version, about = "Job posting acquisition and extraction")]
struct Cli {
    /// Emit logs as JSON
    #[arg(long, global = true, env = "JOBSCOUT_LOG_JSON")]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct TargetArgs {
    /// Job posting URL
    url: String,

    /// Run the browser without a window
    #[arg(long)]
    headless: bool,

    /// Navigation timeout for the rendered strategy
    #[arg(long)]
    timeout_secs: Option<u64>,
}

impl TargetArgs {
    fn into_request(self, settings: &Settings) -> ExtractRequestDto {
        ExtractRequestDto {
            url: self.url,
            headless: Some(self.headless || settings.acquisition.headless),
            timeout_secs: self.timeout_secs,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract responsibilities, qualifications and skills from a job posting
    Extract(TargetArgs),

    /// Print the raw acquisition result for a URL
    Acquire(TargetArgs),

    /// Look up a student profile
    Profile {
        /// Student user id
        user_id: String,
    },

    /// Run the HTTP API
    Serve,
}

/// 主函数
///
/// 解析命令行并分派到对应子命令
#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    telemetry::init_telemetry(cli.log_json);

    let settings = Settings::new()?;
    info!("Configuration loaded");

    match cli.command {
        Command::Extract(target) => {
            let service = ExtractionService::from_settings(&settings.acquisition);
            let request = target.into_request(&settings);
            let options = request.options(service.options());

            let result = service.extract_with_options(&request.url, &options).await;
            if let Some(detail) = result.detail() {
                eprintln!("Job extraction failed: {}", detail);
                return Ok(ExitCode::FAILURE);
            }

            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Command::Acquire(target) => {
            let service = ExtractionService::from_settings(&settings.acquisition);
            let request = target.into_request(&settings);
            let options = request.options(service.options());

            let result = service.acquirer().acquire(&request.url, &options).await;
            println!("{}", serde_json::to_string_pretty(&result)?);

            if result.is_failure() {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Profile { user_id } => {
            let service = ProfileService::from_settings(&settings.database);
            let lookup = service.lookup(&user_id).await?;
            println!("{}", serde_json::to_string_pretty(&lookup)?);
        }
        Command::Serve => serve(settings).await?,
    }

    Ok(ExitCode::SUCCESS)
}

async fn serve(settings: Settings) -> anyhow::Result<()> {
    let extraction = Arc::new(ExtractionService::from_settings(&settings.acquisition));
    let profiles = Arc::new(ProfileService::from_settings(&settings.database));

    let app = routes::routes(extraction, profiles);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
