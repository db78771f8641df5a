use std::sync::Arc;

use actix_cors::Cors;
use actix_web::middleware::Compress;
use actix_web::{http::header, web, App, HttpServer};
use actix_web_prometheus::PrometheusMetricsBuilder;

pub mod daemon;
pub mod mcp;

use crate::daemon::{DaemonParser, FileProbeSource};
use crate::mcp::tools::ToolRegistry;
use crate::mcp::{McpService, McpState};

pub async fn run() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    dotenvy::dotenv().ok(); // Load .env file

    let service = McpService::new(
        ToolRegistry::new(),
        DaemonParser::system(),
        Arc::new(FileProbeSource::from_env()),
    );
    let state = web::Data::new(Arc::new(McpState::new(service)));

    let prometheus = PrometheusMetricsBuilder::new("daemon_mcp_server")
        .endpoint("/metrics")
        .build()
        .expect("Failed to create Prometheus metrics middleware");

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(8080);

    log::info!("Starting server at http://0.0.0.0:{}", port);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST", "OPTIONS"])
            .allowed_headers(vec![header::CONTENT_TYPE])
            .max_age(3600);

        App::new()
            .wrap(Compress::default())
            .wrap(prometheus.clone())
            .wrap(cors)
            .app_data(state.clone())
            .configure(mcp::config)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
