//! In-process router tests with a stub source.

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use botswana_jobs::fetch::FetchError;
use botswana_jobs::models::{
    JobCategory, JobListing, JobLocation, JobType, ListingQuery, ListingsPage, PaginationInfo,
};
use botswana_jobs::registry::SourceRegistry;
use botswana_jobs::server::{router, AppState};
use botswana_jobs::JobSource;
use chrono::Utc;
use std::sync::Arc;
use tower::ServiceExt;

struct StubSource;

#[async_trait]
impl JobSource for StubSource {
    fn source_id(&self) -> &str {
        "stub"
    }
    fn source_name(&self) -> &str {
        "Stub Jobs"
    }
    fn base_url(&self) -> &str {
        "https://stub.example"
    }

    async fn scrape_listings(&self, query: &ListingQuery) -> ListingsPage {
        let job = JobListing::new("Clerk – StubCo", "https://stub.example/job/clerk/", "Stub Jobs");
        ListingsPage {
            success: true,
            message: "Successfully fetched 1 jobs".to_string(),
            data: vec![job],
            pagination: PaginationInfo::derive(query.page, 1, 1, 15),
            filters_applied: query.applied_filters(),
            source: "Stub Jobs".to_string(),
            fetched_at: Utc::now(),
        }
    }

    async fn scrape_job_detail(&self, url: &str) -> Result<Option<JobListing>, FetchError> {
        if url.ends_with("/missing/") {
            return Ok(None);
        }
        Ok(Some(JobListing::new("Clerk", url, "Stub Jobs")))
    }

    async fn categories(&self, _force_refresh: bool) -> (Vec<JobCategory>, bool) {
        (
            vec![JobCategory {
                slug: "admin".into(),
                name: "Admin".into(),
                count: 3,
                url: None,
            }],
            true,
        )
    }

    async fn locations(&self, _force_refresh: bool) -> (Vec<JobLocation>, bool) {
        (Vec::new(), false)
    }

    fn job_types(&self) -> Vec<JobType> {
        vec![JobType {
            slug: "full-time".into(),
            name: "Full Time".into(),
            count: 0,
        }]
    }
}

fn test_app() -> axum::Router {
    let mut registry = SourceRegistry::new();
    registry.register(Arc::new(StubSource));
    router(Arc::new(AppState { registry }))
}

async fn get_json(uri: &str) -> (StatusCode, serde_json::Value) {
    let response = test_app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, value)
}

#[tokio::test]
async fn health_reports_registered_sources() {
    let (status, body) = get_json("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["sources"][0], "stub");
}

#[tokio::test]
async fn sources_endpoint_lists_metadata() {
    let (status, body) = get_json("/api/v1/sources").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["id"], "stub");
    assert_eq!(body[0]["is_active"], true);
    assert_eq!(body[0]["supported_filters"][0], "category");
}

#[tokio::test]
async fn listings_round_trip() {
    let (status, body) = get_json("/api/v1/jobs/stub?page=1&category=admin").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"][0]["title"], "Clerk – StubCo");
    assert_eq!(body["filters_applied"]["category"], "admin");
    assert_eq!(body["pagination"]["current_page"], 1);
}

#[tokio::test]
async fn unknown_source_is_404() {
    let (status, body) = get_json("/api/v1/jobs/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn page_out_of_range_is_400() {
    let (status, _) = get_json("/api/v1/jobs/stub?page=0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (status, _) = get_json("/api/v1/jobs/stub?page=101").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn detail_requires_absolute_url() {
    let (status, _) = get_json("/api/v1/jobs/stub/detail?url=/job/clerk/").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn detail_found_and_missing() {
    let (status, body) =
        get_json("/api/v1/jobs/stub/detail?url=https://stub.example/job/clerk/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["title"], "Clerk");

    let (status, _) =
        get_json("/api/v1/jobs/stub/detail?url=https://stub.example/job/missing/").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn facet_endpoints_report_cache_state() {
    let (status, body) = get_json("/api/v1/jobs/stub/categories").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["cached"], true);
    assert_eq!(body["total_count"], 1);
    assert_eq!(body["data"][0]["slug"], "admin");

    let (status, body) = get_json("/api/v1/jobs/stub/job-types").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][0]["name"], "Full Time");
}
