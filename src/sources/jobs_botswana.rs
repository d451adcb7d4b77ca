//! Scraper for jobsbotswana.info, a WordPress job board.

use super::JobSource;
use crate::cache::FacetCache;
use crate::extract::{detail, entry, facets, pagination, selector};
use crate::fetch::{Fetch, FetchError};
use crate::models::{
    JobCategory, JobListing, JobLocation, JobType, ListingQuery, ListingsPage, PaginationInfo,
};
use async_trait::async_trait;
use chrono::Utc;
use scraper::Html;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

const SOURCE_ID: &str = "jobsbotswana";
const SOURCE_NAME: &str = "Jobs Botswana";
const BASE_URL: &str = "https://jobsbotswana.info";

/// The one selector that locates listing entries. The theme has shipped
/// alternative containers in past revisions; this one is authoritative and
/// zero matches is a valid, reportable outcome rather than a parse failure.
const ENTRY_SELECTOR: &str = "article.noo_job";

pub struct JobsBotswanaScraper {
    fetcher: Arc<dyn Fetch>,
    base_url: String,
    categories_cache: FacetCache<Vec<JobCategory>>,
    locations_cache: FacetCache<Vec<JobLocation>>,
}

impl JobsBotswanaScraper {
    pub fn new(fetcher: Arc<dyn Fetch>) -> Self {
        Self::with_base_url(fetcher, BASE_URL.to_string())
    }

    /// Point the scraper at a different host. Used by tests to target a
    /// local mock server.
    pub fn with_base_url(fetcher: Arc<dyn Fetch>, base_url: String) -> Self {
        Self {
            fetcher,
            base_url: base_url.trim_end_matches('/').to_string(),
            categories_cache: FacetCache::default(),
            locations_cache: FacetCache::default(),
        }
    }

    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.categories_cache = FacetCache::new(ttl);
        self.locations_cache = FacetCache::new(ttl);
        self
    }

    async fn scrape_categories(&self) -> Vec<JobCategory> {
        let url = format!("{}/jobs/", self.base_url);
        match self.fetcher.fetch(&url).await {
            Ok(html) => facets::parse_categories(&html),
            Err(e) => {
                // Facets are best-effort: a fetch failure degrades to an
                // empty collection instead of propagating.
                error!("failed to fetch categories: {e}");
                Vec::new()
            }
        }
    }

    async fn scrape_locations(&self) -> Vec<JobLocation> {
        let url = format!("{}/jobs/", self.base_url);
        match self.fetcher.fetch(&url).await {
            Ok(html) => facets::parse_locations(&html),
            Err(e) => {
                error!("failed to fetch locations: {e}");
                Vec::new()
            }
        }
    }
}

#[async_trait]
impl JobSource for JobsBotswanaScraper {
    fn source_id(&self) -> &str {
        SOURCE_ID
    }

    fn source_name(&self) -> &str {
        SOURCE_NAME
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn description(&self) -> String {
        "Leading job portal for employment opportunities in Botswana".to_string()
    }

    async fn scrape_listings(&self, query: &ListingQuery) -> ListingsPage {
        let url = build_listing_url(&self.base_url, query);
        info!("scraping listings from {url}");

        let html = match self.fetcher.fetch(&url).await {
            Ok(html) => html,
            Err(e) => {
                error!("failed to fetch listings page: {e}");
                return ListingsPage {
                    success: false,
                    message: format!("Failed to fetch page: {e}"),
                    data: Vec::new(),
                    pagination: PaginationInfo::zero(query.page),
                    filters_applied: query.applied_filters(),
                    source: SOURCE_NAME.to_string(),
                    fetched_at: Utc::now(),
                };
            }
        };

        let (jobs, pagination) = parse_listing_page(&html, query.page);
        info!("parsed {} jobs from {url}", jobs.len());

        ListingsPage {
            success: true,
            message: format!("Successfully fetched {} jobs", jobs.len()),
            data: jobs,
            pagination,
            filters_applied: query.applied_filters(),
            source: SOURCE_NAME.to_string(),
            fetched_at: Utc::now(),
        }
    }

    async fn scrape_job_detail(&self, url: &str) -> Result<Option<JobListing>, FetchError> {
        info!("scraping job detail from {url}");
        let html = self.fetcher.fetch(url).await?;
        Ok(detail::extract_detail(&html, url, SOURCE_NAME))
    }

    async fn categories(&self, force_refresh: bool) -> (Vec<JobCategory>, bool) {
        self.categories_cache
            .get(force_refresh, || self.scrape_categories())
            .await
    }

    async fn locations(&self, force_refresh: bool) -> (Vec<JobLocation>, bool) {
        self.locations_cache
            .get(force_refresh, || self.scrape_locations())
            .await
    }

    fn job_types(&self) -> Vec<JobType> {
        // The site never publishes a job-type facet page; this enumeration
        // matches the type slugs its listing URLs accept.
        vec![
            JobType { slug: "full-time".into(), name: "Full Time".into(), count: 0 },
            JobType { slug: "contract".into(), name: "Contract".into(), count: 0 },
            JobType { slug: "part-time".into(), name: "Part Time".into(), count: 0 },
        ]
    }
}

/// Build the listing page URL for a page number and optional filters.
///
/// Exactly one filter gets the clean hierarchical path the site prefers;
/// zero or several fall back to the generic listing path with query
/// parameters in fixed category/location/type order. Page 1 must produce the
/// bare URL with no `/page/1/` segment, since upstream caches key on it.
fn build_listing_url(base: &str, query: &ListingQuery) -> String {
    let single_filter = match (&query.category, &query.location, &query.job_type) {
        (Some(slug), None, None) => Some(("job-category", slug)),
        (None, Some(slug), None) => Some(("job-location", slug)),
        (None, None, Some(slug)) => Some(("job-type", slug)),
        _ => None,
    };

    if let Some((dimension, slug)) = single_filter {
        return if query.page <= 1 {
            format!("{base}/{dimension}/{slug}/")
        } else {
            format!("{base}/{dimension}/{slug}/page/{}/", query.page)
        };
    }

    let mut url = if query.page <= 1 {
        format!("{base}/jobs/")
    } else {
        format!("{base}/jobs/page/{}/", query.page)
    };

    let mut params = Vec::new();
    if let Some(c) = &query.category {
        params.push(format!("category={c}"));
    }
    if let Some(l) = &query.location {
        params.push(format!("location={l}"));
    }
    if let Some(t) = &query.job_type {
        params.push(format!("type={t}"));
    }
    if !params.is_empty() {
        url.push('?');
        url.push_str(&params.join("&"));
    }
    url
}

/// Parse one listing page: extract every entry that resolves its required
/// fields and resolve pagination. Sync on purpose; `Html` is not `Send`.
fn parse_listing_page(html: &str, page: u32) -> (Vec<JobListing>, PaginationInfo) {
    let doc = Html::parse_document(html);
    let jobs: Vec<JobListing> = doc
        .select(&selector(ENTRY_SELECTOR))
        .filter_map(|article| entry::extract_entry(&article, SOURCE_NAME))
        .collect();
    let pagination = pagination::resolve(&doc, page);
    (jobs, pagination)
}
