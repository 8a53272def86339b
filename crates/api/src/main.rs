use taskforge_api::config::{AppConfig, LogFormat};
use taskforge_api::middleware::ErrorRendering;
use taskforge_api::routes::create_router;
use taskforge_api::server::Server;
use taskforge_api::state::AppState;
use taskforge_infrastructure::JsonFileTaskStore;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_LOG_FILTER: &str = "taskforge_api=debug,tower_http=debug,info";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env();
    init_tracing(config.as_ref().map_or_else(|_| LogFormat::default(), |config| config.log_format));

    let config = config.inspect_err(|error| {
        tracing::error!("Failed to load configuration: {}", error);
    })?;

    tracing::info!(
        tasks_file = %config.tasks_file.display(),
        environment = ?config.environment,
        "TaskForge API - Starting Server"
    );

    let state = AppState::new(JsonFileTaskStore::new(&config.tasks_file));
    let router = create_router(state, ErrorRendering::for_environment(config.environment));

    Server::new(config.server).run(router).await
}

fn init_tracing(format: LogFormat) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let registry = tracing_subscriber::registry().with(env_filter);

    match format {
        LogFormat::Pretty => registry.with(fmt::layer().with_target(true)).init(),
        LogFormat::Json => registry.with(fmt::layer().json()).init(),
    }
}
