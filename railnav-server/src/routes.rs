//! HTTP route handlers.

use std::sync::Arc;

use axum::error_handling::HandleErrorLayer;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{BoxError, Json, Router};
use railnav_core::{
    NetworkStatistics, RouteResult, find_alternative_routes, find_route, nearby_stations,
    nearest_station, resolve_station, search_stations,
};
use serde::{Deserialize, Serialize};
use tower::ServiceBuilder;
use tower::limit::GlobalConcurrencyLimitLayer;
use tower::timeout::TimeoutLayer;
use tower::timeout::error::Elapsed;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::error::{AppError, ErrorResponse};
use crate::state::AppState;

const DEFAULT_SEARCH_LIMIT: usize = railnav_core::DEFAULT_MAX_RESULTS;
const DEFAULT_ALTERNATIVES: usize = 3;
const DEFAULT_NEARBY_RADIUS_KM: f64 = 10.0;

/// Create the application router.
pub fn create_router(state: AppState, config: &ServerConfig) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/network/stats", get(network_stats))
        .route("/stations/search", get(stations_search))
        .route("/stations/resolve", get(stations_resolve))
        .route("/stations/nearby", get(stations_nearby))
        .route("/stations/nearest", get(stations_nearest))
        .route("/route", get(route))
        .route("/route/alternatives", get(route_alternatives))
        .route("/route/geojson", get(route_geojson))
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_middleware_error))
                .layer(TimeoutLayer::new(config.request_timeout()))
                .layer(GlobalConcurrencyLimitLayer::new(config.concurrency_limit)),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn handle_middleware_error(err: BoxError) -> Response {
    if err.is::<Elapsed>() {
        let body = Json(ErrorResponse {
            error: "request timed out".to_string(),
            unresolved: None,
        });
        return (StatusCode::REQUEST_TIMEOUT, body).into_response();
    }
    AppError::Internal {
        message: err.to_string(),
    }
    .into_response()
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

#[derive(Debug, Serialize)]
struct StatsResponse {
    #[serde(flatten)]
    statistics: NetworkStatistics,
    indexed_stations: usize,
}

async fn network_stats(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse {
        statistics: state.network.statistics(),
        indexed_stations: state.network.station_count(),
    })
}

#[derive(Debug, Deserialize)]
struct SearchParams {
    q: String,
    limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
struct ResolveParams {
    q: String,
}

#[derive(Debug, Deserialize)]
struct NearbyParams {
    lat: f64,
    lon: f64,
    radius_km: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct PositionParams {
    lat: f64,
    lon: f64,
}

#[derive(Debug, Deserialize)]
struct RouteParams {
    from: String,
    to: String,
}

#[derive(Debug, Deserialize)]
struct AlternativesParams {
    from: String,
    to: String,
    k: Option<usize>,
}

#[derive(Debug, Serialize)]
struct RouteResponse {
    route: Option<RouteResult>,
}

fn require_text(name: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::bad_request(format!("'{name}' must not be empty")));
    }
    Ok(())
}

fn require_position(lat: f64, lon: f64) -> Result<(), AppError> {
    if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
        return Err(AppError::bad_request(format!("latitude {lat} out of range")));
    }
    if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
        return Err(AppError::bad_request(format!("longitude {lon} out of range")));
    }
    Ok(())
}

/// Fuzzy station search, best match first
async fn stations_search(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Response, AppError> {
    let Query(params) = params?;
    require_text("q", &params.q)?;
    let limit = params
        .limit
        .unwrap_or(DEFAULT_SEARCH_LIMIT)
        .min(state.limits.max_search_results);

    let matches = search_stations(&state.network, &params.q, limit);
    Ok(Json(matches).into_response())
}

async fn stations_resolve(
    State(state): State<AppState>,
    params: Result<Query<ResolveParams>, QueryRejection>,
) -> Result<Response, AppError> {
    let Query(params) = params?;
    require_text("q", &params.q)?;

    let station = resolve_station(&state.network, &params.q)?;
    Ok(Json(station).into_response())
}

async fn stations_nearby(
    State(state): State<AppState>,
    params: Result<Query<NearbyParams>, QueryRejection>,
) -> Result<Response, AppError> {
    let Query(params) = params?;
    require_position(params.lat, params.lon)?;
    let radius_km = params.radius_km.unwrap_or(DEFAULT_NEARBY_RADIUS_KM);
    if !radius_km.is_finite() || radius_km < 0.0 {
        return Err(AppError::bad_request(format!(
            "radius_km {radius_km} must be a non-negative number"
        )));
    }

    let nearby = nearby_stations(&state.network, params.lat, params.lon, radius_km);
    Ok(Json(nearby).into_response())
}

async fn stations_nearest(
    State(state): State<AppState>,
    params: Result<Query<PositionParams>, QueryRejection>,
) -> Result<Response, AppError> {
    let Query(params) = params?;
    require_position(params.lat, params.lon)?;

    let nearest = nearest_station(&state.network, params.lat, params.lon)
        .ok_or_else(|| AppError::not_found("network has no stations"))?;
    Ok(Json(nearest).into_response())
}

/// Shortest route; `route` is null when the stations are not connected
async fn route(
    State(state): State<AppState>,
    params: Result<Query<RouteParams>, QueryRejection>,
) -> Result<Json<RouteResponse>, AppError> {
    let Query(params) = params?;
    require_text("from", &params.from)?;
    require_text("to", &params.to)?;

    let route = find_route(&state.network, &params.from, &params.to)?;
    Ok(Json(RouteResponse { route }))
}

/// K-shortest loopless routes, computed on the blocking pool.
///
/// The search keeps its permit until it finishes, so searches abandoned by a
/// request timeout still count against the limit.
async fn route_alternatives(
    State(state): State<AppState>,
    params: Result<Query<AlternativesParams>, QueryRejection>,
) -> Result<Json<Vec<RouteResult>>, AppError> {
    let Query(params) = params?;
    require_text("from", &params.from)?;
    require_text("to", &params.to)?;
    let count = params
        .k
        .unwrap_or(DEFAULT_ALTERNATIVES)
        .min(state.limits.max_alternatives);

    let permit = Arc::clone(&state.search_permits)
        .acquire_owned()
        .await
        .map_err(|e| AppError::Internal {
            message: format!("route search unavailable: {e}"),
        })?;

    let network = Arc::clone(&state.network);
    let routes = tokio::task::spawn_blocking(move || {
        let routes = find_alternative_routes(&network, &params.from, &params.to, count);
        drop(permit);
        routes
    })
    .await
    .map_err(|e| AppError::Internal {
        message: format!("route search failed: {e}"),
    })?;

    Ok(Json(routes))
}

async fn route_geojson(
    State(state): State<AppState>,
    params: Result<Query<RouteParams>, QueryRejection>,
) -> Result<Response, AppError> {
    let Query(params) = params?;
    require_text("from", &params.from)?;
    require_text("to", &params.to)?;

    let route = find_route(&state.network, &params.from, &params.to)?.ok_or_else(|| {
        AppError::not_found(format!(
            "no route between '{}' and '{}'",
            params.from, params.to
        ))
    })?;
    let collection = route.to_geojson(&state.network)?;
    Ok(Json(collection).into_response())
}
