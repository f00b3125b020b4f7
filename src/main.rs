use moodbot::{
    create_router, load_config, AppState, CompletionService, CompletionSettings, MoodRegistry,
    RigService,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Resolves on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining connections...");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // A missing credential or bad model id stops the process before it binds
    let config = load_config()?;
    if let Err(e) = config.validate() {
        tracing::error!(error = %e, "Invalid configuration, refusing to start");
        return Err(e.into());
    }

    tracing::info!("Loaded configuration:\n{}", config);

    let moods = Arc::new(MoodRegistry::new());
    let backend = Arc::new(RigService::from_config(&config.ai)?);
    let completion = Arc::new(CompletionService::new(
        backend,
        moods,
        CompletionSettings::from(&config.ai),
    ));

    let app = create_router(AppState::new(completion), &config.server);

    let bind_address = config.server.bind_address();
    let listener = TcpListener::bind(&bind_address).await?;
    tracing::info!("MoodBot backend listening on http://{}", bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}
