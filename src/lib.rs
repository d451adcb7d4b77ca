//! Scraper and REST API for Botswana job listings.
//!
//! The core is a heuristic HTML extraction engine over a job board the
//! system does not control: every field is pulled through ordered fallback
//! strategies that tolerate markup drift, and slow-changing facets
//! (categories, locations) sit behind a short TTL cache. Sources implement
//! one trait and register with the process-wide registry the API layer
//! queries.

pub mod cache;
pub mod config;
pub mod extract;
pub mod fetch;
pub mod models;
pub mod registry;
pub mod server;
pub mod sources;

pub use fetch::{Fetch, FetchError, HttpFetcher};
pub use models::{JobListing, ListingQuery, ListingsPage, PaginationInfo};
pub use registry::SourceRegistry;
pub use sources::JobSource;
