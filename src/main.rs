use dotenvy::dotenv;
use ministry::logging::init_tracing;
use ministry::metrics::{init_metrics, metrics_app};
use ministry::router::init_router;
use ministry::state::init_app_state;
use ministry_config::ServerConfig;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_tracing()?;

    let server_config = ServerConfig::from_env();

    if let Some(handle) = init_metrics()? {
        let listener = tokio::net::TcpListener::bind(&server_config.metrics_addr).await?;
        info!(addr = %server_config.metrics_addr, "Metrics server listening");
        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, metrics_app(handle)).await {
                warn!(error = %e, "Metrics server stopped");
            }
        });
    }

    let state = init_app_state();
    if !state.session_codec.is_signed() {
        warn!("SESSION_SIGNING_SECRET is not set; session cookies are trusted without verification");
    }

    let app = init_router(state);

    let listener = tokio::net::TcpListener::bind(&server_config.addr).await?;
    info!(addr = %server_config.addr, "Server running");
    info!("Swagger UI available at /swagger-ui");
    axum::serve(listener, app).await?;

    Ok(())
}
