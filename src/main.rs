use anyhow::Context;
use axum::Router;
use axum::extract::State;
use dotenv::dotenv;
use std::env;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

mod api;
mod app_env;
mod db;
mod domain;
mod dto;
mod external_connections;
mod logging;
mod persistence;
mod routing_utils;

/// Data shared by every request handler
pub struct SharedData {
    pub ext_cxn: persistence::ExternalConnectivity,
}

type AppState = State<Arc<SharedData>>;

/// Assembles every route the service exposes, with request tracing applied on top
pub fn build_router(shared_data: Arc<SharedData>) -> Router {
    let router = Router::new()
        .nest("/todoitems", api::todo::todo_routes())
        .merge(api::swagger_main::build_documentation())
        .with_state(shared_data);

    logging::attach_tracing_http(router)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let otel_exporters = match (
        env::var(app_env::OTEL_SPAN_EXPORT_URL),
        env::var(app_env::OTEL_METRIC_EXPORT_URL),
    ) {
        (Ok(span_url), Ok(metric_url)) => Some(logging::init_exporters(&span_url, &metric_url)?),
        _ => None,
    };
    let otel_enabled = otel_exporters.is_some();
    logging::setup_logging_and_tracing(logging::init_env_filter()?, otel_exporters);
    if !otel_enabled {
        info!(
            "{} and {} are not both set, so OpenTelemetry export is off",
            app_env::OTEL_SPAN_EXPORT_URL,
            app_env::OTEL_METRIC_EXPORT_URL
        );
    }

    let db_url = env::var(app_env::DB_URL).unwrap_or_else(|_| app_env::DEFAULT_DB_URL.to_owned());
    info!("Connecting to database at {db_url}");
    let sqlx_db_connection = db::connect_sqlx(&db_url).await?;

    let app_state = Arc::new(SharedData {
        ext_cxn: persistence::ExternalConnectivity::new(sqlx_db_connection),
    });
    let router = build_router(app_state);

    let listen_addr =
        env::var(app_env::LISTEN_ADDR).unwrap_or_else(|_| app_env::DEFAULT_LISTEN_ADDR.to_owned());
    let listener = TcpListener::bind(&listen_addr)
        .await
        .with_context(|| format!("binding to {listen_addr}"))?;

    info!("Starting server on {listen_addr}");
    axum::serve(listener, router)
        .await
        .context("running the HTTP server")?;

    Ok(())
}
