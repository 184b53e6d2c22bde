use std::{process::ExitCode, sync::Arc};

use colored::{Color, Colorize};
use log::{error, info};
use thiserror::Error;
use tokio::runtime::{self, Runtime};
use wavefy_catalog::{MemoryCatalog, SharedCatalog};
use wavefy_server::{ConfigError, ServerConfig, StartupError};

mod logging;

pub struct Wavefy {
    config: ServerConfig,
    catalog: SharedCatalog,
    runtime: Runtime,
}

#[derive(Debug, Error)]
enum WavefyError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Could not start server: {0}")]
    Startup(#[from] StartupError),

    #[error("Fatal error: {0}")]
    Fatal(String),
}

impl Wavefy {
    fn new() -> Result<Self, WavefyError> {
        info!("Loading configuration...");
        let config = ServerConfig::from_env()?;

        info!("Building async runtime...");
        let runtime = runtime::Builder::new_multi_thread()
            .enable_all()
            .thread_name("wavefy-async")
            .build()
            .map_err(|e| WavefyError::Fatal(e.to_string()))?;

        let catalog = MemoryCatalog::with_sample_data();
        let (_, artists, songs, playlists) = catalog.counts();

        info!(
            "Catalog ready with {} artists, {} songs, and {} playlists",
            artists, songs, playlists
        );

        Ok(Self {
            config,
            catalog: Arc::new(catalog),
            runtime,
        })
    }

    fn run(self) -> Result<(), WavefyError> {
        let Self {
            config,
            catalog,
            runtime,
        } = self;

        runtime.block_on(wavefy_server::run_server(config, catalog))?;

        Ok(())
    }
}

impl WavefyError {
    fn hint(&self) -> String {
        match self {
            WavefyError::Config(ConfigError::MissingStaticDir(_))
            | WavefyError::Startup(StartupError::Config(ConfigError::MissingStaticDir(_))) => {
                "Make sure to build the client first, or unset WAVEFY_STATIC_DIR to serve the API only.".to_string()
            }
            WavefyError::Config(_) | WavefyError::Startup(StartupError::Config(_)) => {
                "Check the WAVEFY_SERVER_PORT, PORT, and WAVEFY_SERVER_HOST environment variables.".to_string()
            }
            WavefyError::Startup(StartupError::Bind { address, source: _ }) => format!(
                "Something else may already be listening on {}. Pick another port with WAVEFY_SERVER_PORT.",
                address
            ),
            WavefyError::Startup(StartupError::Serve(_)) | WavefyError::Fatal(_) => {
                "This error is fatal, and should not happen.".to_string()
            }
        }
    }
}

fn main() -> ExitCode {
    if let Err(error) = logging::init_logger() {
        eprintln!("Could not initialize logging: {}", error);
        return ExitCode::FAILURE;
    }

    let result = Wavefy::new().and_then(|wavefy| {
        info!("Initialized successfully.");
        wavefy.run()
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            error!("{} Read the error below to troubleshoot the issue. If you think this might be a bug, please report it by making a GitHub issue.", "Wavefy failed to start!".bold().color(Color::Red));
            error!("{}", error);
            error!(
                "{}",
                format!("Hint: {}", error.hint())
                    .color(Color::BrightBlack)
                    .italic()
            );

            ExitCode::FAILURE
        }
    }
}
