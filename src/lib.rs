pub mod api;
pub mod cli;
pub mod config;
pub mod db;
pub mod domain;
pub mod entities;
pub mod models;
pub mod services;
pub mod state;

use std::sync::Arc;
use tokio::signal;

use anyhow::Context;
pub use config::Config;
use metrics_exporter_prometheus::PrometheusHandle;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands, TourListOptions};
use state::SharedState;

/// Loads the configuration named on the command line, or the first one
/// found on the default search paths.
pub fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let config = match &cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };
    config.validate()?;
    Ok(config)
}

pub async fn run(cli: Cli, config: Config) -> anyhow::Result<()> {
    let prometheus_handle = if config.observability.metrics_enabled
        && matches!(cli.command, Some(Commands::Serve))
    {
        use metrics_exporter_prometheus::PrometheusBuilder;
        let handle = PrometheusBuilder::new()
            .install_recorder()
            .context("Failed to install Prometheus recorder")?;
        info!("Prometheus metrics recorder initialized");
        Some(handle)
    } else {
        None
    };

    init_tracing(&config)?;

    let Some(command) = cli.command else {
        print_help();
        return Ok(());
    };

    match command {
        Commands::Serve => serve(config, prometheus_handle).await,

        Commands::Init => {
            if Config::create_default_if_missing()? {
                println!("✓ Created config.toml with default settings");
            } else {
                println!("config.toml already exists");
            }
            Ok(())
        }

        Commands::Import { file } => cli::cmd_import(&config, &file).await,

        Commands::Packages => cli::cmd_list_packages(&config).await,

        Commands::Tours {
            package,
            difficulty,
            region,
            max_price,
            page,
            size,
        } => {
            let options = TourListOptions {
                package,
                difficulty,
                region,
                max_price,
                page,
                size,
            };
            cli::cmd_list_tours(&config, options).await
        }

        Commands::Ratings {
            tour_id,
            page,
            size,
        } => cli::cmd_ratings(&config, tour_id, page, size).await,
    }
}

fn init_tracing(config: &Config) -> anyhow::Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    let json = config.observability.log_json;
    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json).then(|| tracing_subscriber::fmt::layer()));

    if config.observability.loki_enabled {
        let url = url::Url::parse(&config.observability.loki_url).context("Invalid Loki URL")?;

        let mut builder = tracing_loki::builder();
        for (key, value) in &config.observability.loki_labels {
            builder = builder.label(key.as_str(), value.as_str())?;
        }
        let (layer, task) = builder.build_url(url)?;

        tokio::spawn(task);

        registry.with(layer).init();
        info!(
            "Loki logging initialized at {}",
            config.observability.loki_url
        );
    } else {
        registry.init();
    }

    Ok(())
}

fn print_help() {
    println!("booktour - Tour catalogue and customer ratings service");
    println!();
    println!("USAGE:");
    println!("  booktour [--config <file>] <COMMAND>");
    println!();
    println!("COMMANDS:");
    println!("  serve             Start the HTTP API server");
    println!("  init              Create default config file");
    println!("  import <file>     Import tours from a JSON catalogue");
    println!("  packages          List tour packages");
    println!("  tours             List tours (--package, --difficulty, --region, --max-price)");
    println!("  ratings <id>      Show ratings and average score of a tour");
    println!("  help              Show this help message");
}

async fn serve(config: Config, prometheus_handle: Option<PrometheusHandle>) -> anyhow::Result<()> {
    info!("booktour v{} starting...", env!("CARGO_PKG_VERSION"));

    let port = config.server.port;
    let shared = Arc::new(SharedState::new(config).await?);
    let app = api::router(api::create_app_state(shared, prometheus_handle));

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("🌐 Web Server running at http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Web server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => error!("Error listening for shutdown: {}", e),
    }
}
