//! Request handlers and response envelopes.

use super::AppState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use tracing::error;

use crate::models::{JobCategory, JobListing, JobLocation, JobType, ListingQuery, SourceInfo};
use crate::sources::JobSource;

const MAX_PAGE: u32 = 100;

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    message: String,
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorBody {
            success: false,
            message: message.into(),
        }),
    )
        .into_response()
}

fn resolve_source(state: &AppState, source_id: &str) -> Result<Arc<dyn JobSource>, Response> {
    state
        .registry
        .get(source_id)
        .ok_or_else(|| error_response(StatusCode::NOT_FOUND, format!("Unknown source: {source_id}")))
}

pub async fn root() -> Json<serde_json::Value> {
    Json(json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "sources": "/api/v1/sources",
            "jobs": "/api/v1/jobs/{source}",
            "detail": "/api/v1/jobs/{source}/detail?url=",
            "categories": "/api/v1/jobs/{source}/categories",
            "locations": "/api/v1/jobs/{source}/locations",
            "job_types": "/api/v1/jobs/{source}/job-types",
        },
    }))
}

pub async fn health(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "sources": state.registry.source_ids(),
    }))
}

pub async fn list_sources(State(state): State<Arc<AppState>>) -> Json<Vec<SourceInfo>> {
    Json(state.registry.source_info())
}

#[derive(Deserialize)]
pub struct ListingParams {
    page: Option<u32>,
    category: Option<String>,
    location: Option<String>,
    job_type: Option<String>,
}

pub async fn list_jobs(
    State(state): State<Arc<AppState>>,
    Path(source_id): Path<String>,
    Query(params): Query<ListingParams>,
) -> Response {
    let source = match resolve_source(&state, &source_id) {
        Ok(s) => s,
        Err(resp) => return resp,
    };

    let page = params.page.unwrap_or(1);
    if !(1..=MAX_PAGE).contains(&page) {
        return error_response(
            StatusCode::BAD_REQUEST,
            format!("page must be between 1 and {MAX_PAGE}"),
        );
    }

    let query = ListingQuery {
        page,
        category: params.category,
        location: params.location,
        job_type: params.job_type,
    };
    // The soft-fail envelope travels as a 200: the response shape is the
    // contract, success=false the signal.
    Json(source.scrape_listings(&query).await).into_response()
}

#[derive(Deserialize)]
pub struct DetailParams {
    url: String,
}

#[derive(Serialize)]
pub struct JobDetailResponse {
    pub success: bool,
    pub message: String,
    pub data: JobListing,
    pub source: String,
}

pub async fn job_detail(
    State(state): State<Arc<AppState>>,
    Path(source_id): Path<String>,
    Query(params): Query<DetailParams>,
) -> Response {
    let source = match resolve_source(&state, &source_id) {
        Ok(s) => s,
        Err(resp) => return resp,
    };

    match url::Url::parse(&params.url) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {}
        _ => return error_response(StatusCode::BAD_REQUEST, "url must be an absolute http(s) URL"),
    }

    match source.scrape_job_detail(&params.url).await {
        Ok(Some(job)) => Json(JobDetailResponse {
            success: true,
            message: "Job details fetched successfully".to_string(),
            data: job,
            source: source.source_name().to_string(),
        })
        .into_response(),
        Ok(None) => error_response(StatusCode::NOT_FOUND, "Job not found"),
        Err(e) => {
            error!("detail scrape failed: {e}");
            error_response(StatusCode::BAD_GATEWAY, e.to_string())
        }
    }
}

#[derive(Deserialize)]
pub struct RefreshParams {
    #[serde(default)]
    refresh: bool,
}

#[derive(Serialize)]
pub struct FacetResponse<T> {
    pub success: bool,
    pub message: String,
    pub data: Vec<T>,
    pub total_count: usize,
    pub source: String,
    pub cached: bool,
}

pub async fn categories(
    State(state): State<Arc<AppState>>,
    Path(source_id): Path<String>,
    Query(params): Query<RefreshParams>,
) -> Response {
    let source = match resolve_source(&state, &source_id) {
        Ok(s) => s,
        Err(resp) => return resp,
    };
    let (data, cached) = source.categories(params.refresh).await;
    facet_response::<JobCategory>("Categories fetched successfully", data, cached, &source)
}

pub async fn locations(
    State(state): State<Arc<AppState>>,
    Path(source_id): Path<String>,
    Query(params): Query<RefreshParams>,
) -> Response {
    let source = match resolve_source(&state, &source_id) {
        Ok(s) => s,
        Err(resp) => return resp,
    };
    let (data, cached) = source.locations(params.refresh).await;
    facet_response::<JobLocation>("Locations fetched successfully", data, cached, &source)
}

pub async fn job_types(
    State(state): State<Arc<AppState>>,
    Path(source_id): Path<String>,
) -> Response {
    let source = match resolve_source(&state, &source_id) {
        Ok(s) => s,
        Err(resp) => return resp,
    };
    let data = source.job_types();
    facet_response::<JobType>("Job types fetched successfully", data, false, &source)
}

fn facet_response<T: Serialize>(
    message: &str,
    data: Vec<T>,
    cached: bool,
    source: &Arc<dyn JobSource>,
) -> Response {
    Json(FacetResponse {
        success: true,
        message: message.to_string(),
        total_count: data.len(),
        data,
        source: source.source_name().to_string(),
        cached,
    })
    .into_response()
}
