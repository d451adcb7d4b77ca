//! Job source contract.
//!
//! Each upstream site implements [`JobSource`] as a plain struct composing
//! the fetch layer and its own facet caches; there is no shared base state.
//! The registry and the API layer only ever see the trait object.

pub mod jobs_botswana;

use crate::fetch::FetchError;
use crate::models::{
    JobCategory, JobListing, JobLocation, JobType, ListingQuery, ListingsPage, SourceInfo,
};
use async_trait::async_trait;

/// Capability set every job source provides.
#[async_trait]
pub trait JobSource: Send + Sync {
    /// Unique identifier, used in registry lookups and API paths.
    fn source_id(&self) -> &str;

    /// Human-readable display name, stamped onto every scraped record.
    fn source_name(&self) -> &str;

    fn base_url(&self) -> &str;

    fn description(&self) -> String {
        format!("Job listings from {}", self.source_name())
    }

    fn supported_filters(&self) -> Vec<String> {
        ["category", "location", "job_type", "page"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    fn source_info(&self) -> SourceInfo {
        SourceInfo {
            id: self.source_id().to_string(),
            name: self.source_name().to_string(),
            base_url: self.base_url().to_string(),
            description: self.description(),
            supported_filters: self.supported_filters(),
            is_active: true,
        }
    }

    /// Scrape one filtered listing page.
    ///
    /// Never fails: a fetch error is downgraded to a soft-fail page with
    /// `success: false`, empty data, and zero-value pagination.
    async fn scrape_listings(&self, query: &ListingQuery) -> ListingsPage;

    /// Scrape a single job's detail page. `Ok(None)` when the page has no
    /// extractable title; fetch errors are propagated.
    async fn scrape_job_detail(&self, url: &str) -> Result<Option<JobListing>, FetchError>;

    /// Categories, through the TTL cache. The boolean reports a cache hit.
    async fn categories(&self, force_refresh: bool) -> (Vec<JobCategory>, bool);

    /// Locations, through the TTL cache, sorted by job count descending.
    async fn locations(&self, force_refresh: bool) -> (Vec<JobLocation>, bool);

    /// The source's employment types. Not every site exposes these as a
    /// scrapeable facet, so the default lives on the implementation.
    fn job_types(&self) -> Vec<JobType>;
}
