//! Data model shared by the extraction engine, the sources, and the API layer.
//!
//! Everything here is a plain value object: produced once by whichever
//! component scraped it, serialized as-is onto the wire.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One scraped job posting.
///
/// `title` and `url` are the only required scraped fields; extraction drops
/// an entry entirely rather than emit a record without both.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobListing {
    /// Numeric post id from the entry's class list, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    /// Absolute URL of the posting.
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Opaque display string, not parsed into a date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closing_date: Option<String>,
    /// Raw machine-readable date string from the markup, if present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posted_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Human string like "2 days ago".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posted_ago: Option<String>,
    /// Truncated to 1000 chars with a trailing ellipsis marker.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub is_closed: bool,
    /// Display name of the source this was scraped from.
    pub source: String,
    pub scraped_at: DateTime<Utc>,
}

impl JobListing {
    /// Create a listing with the required fields set and everything else empty.
    pub fn new(title: impl Into<String>, url: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            url: url.into(),
            company: None,
            job_type: None,
            location: None,
            closing_date: None,
            posted_date: None,
            category: None,
            posted_ago: None,
            description: None,
            is_closed: false,
            source: source.into(),
            scraped_at: Utc::now(),
        }
    }
}

/// A filterable job category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobCategory {
    pub slug: String,
    pub name: String,
    pub count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// A filterable job location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobLocation {
    pub slug: String,
    pub name: String,
    pub count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// A filterable employment type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobType {
    pub slug: String,
    pub name: String,
    pub count: u32,
}

/// Derive a URL-safe slug from a display name.
///
/// Used only when a facet's canonical URL path segment is missing.
/// Deterministic and idempotent: lowercase, spaces become hyphens.
pub fn name_slug(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}

/// Position of one listing page within the full result set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginationInfo {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_jobs: u32,
    pub jobs_per_page: u32,
    pub has_next: bool,
    pub has_previous: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_page: Option<u32>,
}

impl PaginationInfo {
    /// Build pagination for `current_page` of `total_pages`, deriving the
    /// navigation flags and neighbour page numbers.
    pub fn derive(current_page: u32, total_pages: u32, total_jobs: u32, jobs_per_page: u32) -> Self {
        let has_next = current_page < total_pages;
        let has_previous = current_page > 1;
        Self {
            current_page,
            total_pages,
            total_jobs,
            jobs_per_page,
            has_next,
            has_previous,
            next_page: has_next.then(|| current_page + 1),
            previous_page: has_previous.then(|| current_page - 1),
        }
    }

    /// Zero-value pagination used in the soft-fail listings envelope.
    pub fn zero(current_page: u32) -> Self {
        Self {
            current_page,
            total_pages: 0,
            total_jobs: 0,
            jobs_per_page: 0,
            has_next: false,
            has_previous: false,
            next_page: None,
            previous_page: None,
        }
    }
}

/// Filters accepted by a listing scrape.
#[derive(Debug, Clone)]
pub struct ListingQuery {
    pub page: u32,
    pub category: Option<String>,
    pub location: Option<String>,
    pub job_type: Option<String>,
}

impl Default for ListingQuery {
    fn default() -> Self {
        Self {
            page: 1,
            category: None,
            location: None,
            job_type: None,
        }
    }
}

impl ListingQuery {
    pub fn page(page: u32) -> Self {
        Self {
            page,
            ..Self::default()
        }
    }

    /// The filters actually set, in fixed category/location/job_type order.
    pub fn applied_filters(&self) -> BTreeMap<String, String> {
        let mut filters = BTreeMap::new();
        if let Some(c) = &self.category {
            filters.insert("category".to_string(), c.clone());
        }
        if let Some(l) = &self.location {
            filters.insert("location".to_string(), l.clone());
        }
        if let Some(t) = &self.job_type {
            filters.insert("job_type".to_string(), t.clone());
        }
        filters
    }
}

/// Result of one listing scrape, including the soft-fail case.
///
/// A fetch failure is reported as `success: false` with empty data and
/// zero-value pagination rather than as an error, so the API layer always
/// has a structurally complete body to return.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingsPage {
    pub success: bool,
    pub message: String,
    pub data: Vec<JobListing>,
    pub pagination: PaginationInfo,
    pub filters_applied: BTreeMap<String, String>,
    pub source: String,
    pub fetched_at: DateTime<Utc>,
}

/// Descriptive metadata about a registered source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceInfo {
    pub id: String,
    pub name: String,
    pub base_url: String,
    pub description: String,
    pub supported_filters: Vec<String>,
    pub is_active: bool,
}
