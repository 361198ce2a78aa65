use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use mars_photos::config::Config;
use mars_photos::data::{NetworkPhotosRepository, PhotosRepository};
use mars_photos::logging::init_tracing;
use mars_photos::network::MarsApiClient;
use mars_photos::ui;

#[derive(Parser, Debug)]
#[command(name = "mars-photos", version, about = "Browse photos taken on Mars")]
struct Cli {
    /// Path to config file (default: ~/.config/mars-photos/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the photo service base URL
    #[arg(long, value_name = "URL")]
    endpoint: Option<String>,

    /// Fetch the photo list once, print it as JSON and exit
    #[arg(long)]
    list: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %format!("{:#}", err), "Exiting with error");
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load config")?;

    if let Some(endpoint) = cli.endpoint {
        config.api.base_url = endpoint;
    }
    config.validate().context("Invalid config")?;

    if cli.list {
        return list_photos(&config);
    }
    ui::runtime::run(config)
}

fn list_photos(config: &Config) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let client = MarsApiClient::new(&config.api).context("Failed to build HTTP client")?;
    let repository: Arc<dyn PhotosRepository> = Arc::new(NetworkPhotosRepository::new(client));
    let photos = runtime
        .block_on(repository.get_photos())
        .context("Failed to fetch photos")?;

    println!("{}", serde_json::to_string_pretty(&photos)?);
    Ok(())
}
