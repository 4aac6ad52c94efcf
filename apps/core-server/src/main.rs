use std::net::TcpListener;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use core_server::router::start_server;
use core_server::{ServerConfig, metrics};
use grid_core::config::ConfigParsingError;
use grid_core::config::core_config::AppConfig;
use sentry::integrations::tracing::EventFilter;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

const DEFAULT_CONFIG_FILE: &str = "config/config.yml";
const DEFAULT_TRACE_LEVEL: &str = "debug";

/// Server-side row model backend of the item grid
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Additional config files, merged over the default one in the given order
    #[arg(short, long, value_name = "FILE")]
    config: Vec<PathBuf>,
}

impl Cli {
    fn config_files(self) -> Vec<PathBuf> {
        std::iter::once(PathBuf::from(DEFAULT_CONFIG_FILE))
            .chain(self.config)
            .collect()
    }
}

fn main() -> Result<ExitCode, ConfigParsingError> {
    let config_files = Cli::parse().config_files();

    // reported by the runtime, tracing depends on the config
    let app_config: AppConfig<ServerConfig> = AppConfig::from_files(&config_files)?;

    let _sentry_guard = initialize_sentry(&app_config.app);
    initialize_tracing(&app_config.app);
    metrics::setup();

    let addr = app_config.app.socket_address();
    let listener = match TcpListener::bind(addr) {
        Ok(listener) => listener,
        Err(error) => {
            tracing::error!(%addr, %error, "Failed to bind server address");
            return Ok(ExitCode::FAILURE);
        }
    };

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(error) => {
            tracing::error!(%error, "Failed to build async runtime");
            return Ok(ExitCode::FAILURE);
        }
    };

    Ok(runtime.block_on(serve(listener, app_config)))
}

async fn serve(listener: TcpListener, config: AppConfig<ServerConfig>) -> ExitCode {
    let db_conn = match sql_data_provider::db_conn(config.app.database_url.to_owned()).await {
        Ok(db_conn) => db_conn,
        Err(error) => {
            tracing::error!(%error, "Failed to connect to database");
            return ExitCode::FAILURE;
        }
    };

    start_server(listener, config, db_conn).await;
    ExitCode::SUCCESS
}

fn initialize_sentry(config: &ServerConfig) -> Option<sentry::ClientInitGuard> {
    let (Some(dsn), Some(environment)) = (&config.sentry_dsn, &config.sentry_environment) else {
        return None;
    };
    if dsn.is_empty() {
        return None;
    }

    let guard = sentry::init((
        dsn.to_owned(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: Some(environment.to_owned().into()),
            max_breadcrumbs: 50,
            traces_sample_rate: 1.0,
            ..Default::default()
        },
    ));

    // inherited by the per-request hubs
    sentry::configure_scope(|scope| {
        scope.set_tag("service", env!("CARGO_PKG_NAME"));
        scope.set_tag("version", env!("CARGO_PKG_VERSION"));
    });

    Some(guard)
}

fn initialize_tracing(config: &ServerConfig) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(config.trace_level.as_deref().unwrap_or(DEFAULT_TRACE_LEVEL))
    });

    let sentry_layer =
        sentry::integrations::tracing::layer().event_filter(|metadata| match *metadata.level() {
            tracing::Level::ERROR => EventFilter::Event,
            tracing::Level::INFO | tracing::Level::WARN => EventFilter::Breadcrumb,
            _ => EventFilter::Ignore,
        });

    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(sentry_layer);

    if config.trace_json.unwrap_or_default() {
        registry
            .with(tracing_subscriber::fmt::layer().json().flatten_event(true))
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
