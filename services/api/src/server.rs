use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryAdRepository, SeedData};
use crate::routes::with_ranking_routes;
use ad_ranking::ads::AdRankingService;
use ad_ranking::config::AppConfig;
use ad_ranking::error::AppError;
use ad_ranking::telemetry;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry, config.environment)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let seed = SeedData::load(&config.storage)?;
    info!(ads = seed.ads.len(), pictures = seed.pictures.len(), "ad store seeded");
    let repository = Arc::new(InMemoryAdRepository::from_seed(seed));
    let ranking_service = Arc::new(AdRankingService::new(repository));

    let app = with_ranking_routes(ranking_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "ad ranking service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
