// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use regdocs::application::usecases::fetch_documents::FetchDocumentsUseCase;
use regdocs::config::ScraperConfiguration;
use regdocs::domain::services::observer::{FetchObserver, TracingObserver};
use regdocs::engines::reqwest_engine::ReqwestTransport;
use regdocs::infrastructure::storage::LocalStorage;
use regdocs::presentation::summary::{self, EXIT_INTERRUPTED};
use regdocs::utils::telemetry;
use tracing::{info, warn};

/// Fetch business documents from the NC Secretary of State
#[derive(Debug, Parser)]
#[command(
    name = "regdocs",
    version,
    after_help = "Examples:\n  regdocs \"Acme Corporation\"\n  regdocs \"Tech Solutions\" --output ./my_docs\n  regdocs \"Example LLC\" --delay 2.5"
)]
struct Cli {
    /// Business name or partial name to search
    business_query: String,

    /// Directory to save downloaded documents
    #[arg(short, long, default_value = "./fetched_documents")]
    output: PathBuf,

    /// Delay between requests in seconds
    #[arg(short, long, default_value_t = 1.5)]
    delay: f64,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Print the outcome as JSON instead of the text summary
    #[arg(long)]
    json: bool,
}

/// 主函数
///
/// 解析参数、加载配置、装配流水线并打印摘要
#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // 1. Initialize logging
    telemetry::init_telemetry(cli.verbose);

    // 2. Load configuration, then apply CLI overrides once
    let config = ScraperConfiguration::new()?
        .with_storage_directory(cli.output.clone())
        .with_request_delay(cli.delay);
    config.validate()?;
    info!("Configuration loaded");

    // 3. Wire components
    let observer: Arc<dyn FetchObserver> = Arc::new(TracingObserver);
    let transport = Arc::new(ReqwestTransport::new(&config)?.with_observer(observer.clone()));
    let storage = Arc::new(LocalStorage::open(&config.storage_directory).await?);
    let use_case = FetchDocumentsUseCase::new(&config, transport, storage, observer)?;

    // 4. Run until done or interrupted
    let outcome = tokio::select! {
        outcome = use_case.execute(&cli.business_query) => outcome,
        _ = tokio::signal::ctrl_c() => {
            warn!("Interrupted by user");
            println!("\nOperation cancelled by user");
            return Ok(ExitCode::from(EXIT_INTERRUPTED as u8));
        }
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        print!("{}", summary::render_summary(&outcome));
    }

    info!("Shutting down");
    Ok(ExitCode::from(summary::exit_code(&outcome) as u8))
}
