use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, put},
    Router,
};
use serde_json::json;

use super::domain::AdId;
use super::repository::AdRepository;
use super::service::{AdRankingService, AdServiceError};

/// Router builder exposing the ranking endpoints under `/ad-ranking-challenge`.
pub fn ad_ranking_router<R>(service: Arc<AdRankingService<R>>) -> Router
where
    R: AdRepository + 'static,
{
    Router::new()
        .route(
            "/ad-ranking-challenge/qualityList",
            get(quality_list_handler::<R>),
        )
        .route(
            "/ad-ranking-challenge/publicListing",
            get(public_listing_handler::<R>),
        )
        .route(
            "/ad-ranking-challenge/calculateScore/:id",
            put(calculate_score_handler::<R>),
        )
        .with_state(service)
}

pub(crate) async fn quality_list_handler<R>(
    State(service): State<Arc<AdRankingService<R>>>,
) -> Response
where
    R: AdRepository + 'static,
{
    match service.quality_listing() {
        Ok(ads) => (StatusCode::OK, axum::Json(ads)).into_response(),
        Err(other) => internal_error(other),
    }
}

pub(crate) async fn public_listing_handler<R>(
    State(service): State<Arc<AdRankingService<R>>>,
) -> Response
where
    R: AdRepository + 'static,
{
    match service.public_listing() {
        Ok(ads) => (StatusCode::OK, axum::Json(ads)).into_response(),
        Err(other) => internal_error(other),
    }
}

pub(crate) async fn calculate_score_handler<R>(
    State(service): State<Arc<AdRankingService<R>>>,
    Path(id): Path<u32>,
) -> Response
where
    R: AdRepository + 'static,
{
    match service.calculate_score(AdId(id)) {
        Ok(_) => StatusCode::OK.into_response(),
        Err(AdServiceError::NotFound(_)) => StatusCode::NOT_FOUND.into_response(),
        Err(other) => internal_error(other),
    }
}

fn internal_error(error: AdServiceError) -> Response {
    let payload = json!({
        "error": error.to_string(),
    });
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
}
