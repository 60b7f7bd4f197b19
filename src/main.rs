use {
    docvault_audit::{
        AppState, adapters::audit_http::router, adapters::document_api::DocumentApiClient,
        config::Config,
    },
    std::sync::Arc,
    tokio::signal,
    tracing_subscriber::EnvFilter,
};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    dotenvy::dotenv().ok();
    let config = Config::from_env().expect("invalid configuration");

    let backend = DocumentApiClient::new(&config.document_api_url, &config.document_api_token)
        .expect("failed to build document API client");

    let state = AppState {
        backend: Arc::new(backend),
        user_lookup: config.user_lookup,
    };

    let app = router(state, config.request_timeout);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .expect("failed to bind");
    tracing::info!(
        addr = %config.bind_addr,
        upstream = %config.document_api_url,
        lookup = %config.user_lookup,
        "listening"
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server error");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("failed to listen for ctrl+c");
    };

    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to listen for SIGTERM")
            .recv()
            .await;
    };

    tokio::select! {
        _ = ctrl_c => tracing::info!("received ctrl+c, shutting down"),
        _ = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
