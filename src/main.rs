use cloudpad::logging::init_tracing;
use cloudpad::metrics::{init_metrics, metrics_app};
use cloudpad::router::init_router;
use cloudpad::state::init_app_state;
use cloudpad_config::{DatabaseConfig, ServerConfig};
use dotenvy::dotenv;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_tracing();

    let database = DatabaseConfig::from_env()?;
    let server = ServerConfig::from_env();

    let state = init_app_state(&database).await?;
    let mut app = init_router(state);

    if let Some(handle) = init_metrics() {
        app = app.merge(metrics_app(handle));
    }

    let address = server.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!(address = %address, "Server running");
    info!("Swagger UI available at /swagger-ui, Scalar at /scalar");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
