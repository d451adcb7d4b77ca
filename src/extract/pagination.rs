//! Derive pagination metadata from a listing page's inconsistent signals.
//!
//! The site exposes three partial signals: a "Showing A-B of N jobs" count
//! line, numeric pagination controls, and nothing at all on single-page
//! results. This resolver reconciles them and never fails; absent signals
//! degrade to defaults.

use super::{selector, text_of};
use crate::models::PaginationInfo;
use regex::Regex;
use scraper::Html;

/// Page size assumed when the count line gives no "Showing A-B" range.
const DEFAULT_JOBS_PER_PAGE: u32 = 15;

/// Resolve pagination for the given document and requested page number.
pub fn resolve(doc: &Html, current_page: u32) -> PaginationInfo {
    let mut total_jobs = 0u32;
    let mut jobs_per_page = DEFAULT_JOBS_PER_PAGE;
    let mut total_pages = 1u32;

    if let Some(count_el) = doc.select(&selector("div.noo-job-list-count")).next() {
        let text = text_of(&count_el);

        let total_re = Regex::new(r"(?i)of\s+(\d+)\s+jobs?").expect("total pattern");
        if let Some(caps) = total_re.captures(&text) {
            total_jobs = caps[1].parse().unwrap_or(0);
        }

        // "Showing 1-15" or "Showing 1–15" (the site mixes hyphen and en dash).
        let range_re = Regex::new(r"Showing\s+(\d+)[–\-](\d+)").expect("range pattern");
        if let Some(caps) = range_re.captures(&text) {
            let start: u32 = caps[1].parse().unwrap_or(0);
            let end: u32 = caps[2].parse().unwrap_or(0);
            if end >= start {
                jobs_per_page = end - start + 1;
            }
        }
    }

    // Numeric labels on the pagination controls. These can under-report the
    // true last page (the widget elides distant pages), so they only raise
    // the floor.
    if let Some(pagination) = doc.select(&selector("div.pagination")).next() {
        for el in pagination.select(&selector("a.page-numbers, span.page-numbers")) {
            let label = text_of(&el);
            if let Ok(n) = label.parse::<u32>() {
                total_pages = total_pages.max(n);
            }
        }
    }

    if total_jobs > 0 && jobs_per_page > 0 {
        let calculated = total_jobs.div_ceil(jobs_per_page);
        total_pages = total_pages.max(calculated);
    }

    PaginationInfo::derive(current_page, total_pages, total_jobs, jobs_per_page)
}
