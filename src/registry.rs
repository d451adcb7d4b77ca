//! Registry of job sources.
//!
//! Built once at startup and handed to the API layer; it owns the scraper
//! instances for the process lifetime and is never mutated afterwards.

use crate::models::SourceInfo;
use crate::sources::JobSource;
use std::sync::Arc;
use tracing::{info, warn};

/// Ordered mapping from source id to scraper instance.
#[derive(Default)]
pub struct SourceRegistry {
    sources: Vec<Arc<dyn JobSource>>,
}

impl SourceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a source. A duplicate id overwrites the existing entry in
    /// place (last registration wins) and logs a warning.
    pub fn register(&mut self, source: Arc<dyn JobSource>) {
        let id = source.source_id().to_string();
        if let Some(existing) = self.sources.iter_mut().find(|s| s.source_id() == id) {
            warn!("source {id} already registered, overwriting");
            *existing = source;
            return;
        }
        info!("registered source: {id} ({})", source.source_name());
        self.sources.push(source);
    }

    pub fn get(&self, source_id: &str) -> Option<Arc<dyn JobSource>> {
        self.sources
            .iter()
            .find(|s| s.source_id() == source_id)
            .cloned()
    }

    /// Source ids in registration order.
    pub fn source_ids(&self) -> Vec<String> {
        self.sources.iter().map(|s| s.source_id().to_string()).collect()
    }

    /// Metadata for every registered source.
    pub fn source_info(&self) -> Vec<SourceInfo> {
        self.sources.iter().map(|s| s.source_info()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::FetchError;
    use crate::models::{
        JobCategory, JobListing, JobLocation, JobType, ListingQuery, ListingsPage, PaginationInfo,
    };
    use async_trait::async_trait;
    use chrono::Utc;

    struct StubSource {
        id: &'static str,
        name: &'static str,
    }

    #[async_trait]
    impl JobSource for StubSource {
        fn source_id(&self) -> &str {
            self.id
        }
        fn source_name(&self) -> &str {
            self.name
        }
        fn base_url(&self) -> &str {
            "https://example.com"
        }
        async fn scrape_listings(&self, query: &ListingQuery) -> ListingsPage {
            ListingsPage {
                success: true,
                message: String::new(),
                data: Vec::new(),
                pagination: PaginationInfo::zero(query.page),
                filters_applied: query.applied_filters(),
                source: self.name.to_string(),
                fetched_at: Utc::now(),
            }
        }
        async fn scrape_job_detail(&self, _url: &str) -> Result<Option<JobListing>, FetchError> {
            Ok(None)
        }
        async fn categories(&self, _force_refresh: bool) -> (Vec<JobCategory>, bool) {
            (Vec::new(), false)
        }
        async fn locations(&self, _force_refresh: bool) -> (Vec<JobLocation>, bool) {
            (Vec::new(), false)
        }
        fn job_types(&self) -> Vec<JobType> {
            Vec::new()
        }
    }

    #[test]
    fn test_register_and_lookup() {
        let mut registry = SourceRegistry::new();
        registry.register(Arc::new(StubSource { id: "a", name: "A" }));
        registry.register(Arc::new(StubSource { id: "b", name: "B" }));

        assert!(registry.get("a").is_some());
        assert!(registry.get("missing").is_none());
        assert_eq!(registry.source_ids(), vec!["a", "b"]);
        assert_eq!(registry.source_info().len(), 2);
    }

    #[test]
    fn test_duplicate_registration_keeps_second_instance() {
        let mut registry = SourceRegistry::new();
        registry.register(Arc::new(StubSource { id: "jobsbotswana", name: "First" }));
        registry.register(Arc::new(StubSource { id: "jobsbotswana", name: "Second" }));

        let source = registry.get("jobsbotswana").expect("source");
        assert_eq!(source.source_name(), "Second");
        assert_eq!(registry.source_ids().len(), 1);
    }
}
