use payoff_analyzer::config::AppConfig;
use payoff_analyzer::errors::AnalyzerResult;
use payoff_analyzer::server;
use payoff_analyzer::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("payoff_analyzer starting");

    let cfg = match AppConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("config error: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!(
        max_body_bytes = cfg.max_body_bytes,
        max_strike_price = cfg.max_strike_price,
        "config loaded"
    );

    if let Err(e) = run(cfg).await {
        tracing::error!("server error: {e}");
        std::process::exit(1);
    }

    tracing::info!("payoff_analyzer stopped");
}

async fn run(cfg: AppConfig) -> AnalyzerResult<()> {
    let addr = cfg.bind_addr();
    let app = server::router(AppState::new(cfg));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for ctrl-c: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
