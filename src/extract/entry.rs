//! Field extraction for one listing entry on a paginated index page.
//!
//! Each field runs an ordered chain of pure strategies; the first non-empty
//! result wins and a fully exhausted chain leaves the field absent. An entry
//! that yields neither a title nor a URL is discarded outright.

use super::{nonempty_text, selector, text_of, title_case_slug};
use crate::models::JobListing;
use scraper::ElementRef;

/// Dash-like separators used to split "Job Title – Company" headings,
/// tried in this exact order.
pub(crate) const TITLE_SEPARATORS: &[&str] = &[" – ", " - ", " — ", "–", "-"];

/// One fallback step in a field's extraction chain.
type Strategy = fn(&ElementRef) -> Option<String>;

/// Run strategies in order; first non-empty result wins.
fn first_match(entry: &ElementRef, strategies: &[Strategy]) -> Option<String> {
    strategies
        .iter()
        .find_map(|strategy| strategy(entry).filter(|v| !v.is_empty()))
}

/// Extract a [`JobListing`] from one `article` entry node.
///
/// Returns `None` when the entry resolves neither a title nor a URL; the
/// caller skips such entries silently.
pub fn extract_entry(entry: &ElementRef, source_name: &str) -> Option<JobListing> {
    let title = first_match(entry, &[title_from_heading_link, title_from_heading, title_from_attr])?;
    let url = first_match(
        entry,
        &[url_from_attr, url_from_heading_link, url_from_details_link, url_from_primary_action],
    )?;

    let mut job = JobListing::new(&title, url, source_name);
    job.id = entry_id(entry);
    job.company = company_from_title(&title).or_else(|| company_from_classes(entry));
    job.job_type = first_match(entry, &[job_type_from_span, job_type_from_classes]);
    job.location = first_match(entry, &[location_from_span, location_from_classes]);
    job.category = first_match(entry, &[category_from_spans, category_from_classes]);
    job.closing_date = closing_date(entry);
    job.posted_date = posted_date(entry);
    job.posted_ago = posted_ago(entry);
    job.is_closed = is_closed(entry);
    Some(job)
}

fn classes<'a>(entry: &'a ElementRef) -> impl Iterator<Item = &'a str> {
    entry.value().classes()
}

// --- title ---

fn title_from_heading_link(entry: &ElementRef) -> Option<String> {
    let link = entry.select(&selector("h3.loop-item-title a")).next()?;
    nonempty_text(&link)
}

fn title_from_heading(entry: &ElementRef) -> Option<String> {
    let heading = entry.select(&selector("h3.loop-item-title")).next()?;
    nonempty_text(&heading)
}

fn title_from_attr(entry: &ElementRef) -> Option<String> {
    entry.value().attr("data-title").map(str::trim).map(String::from)
}

// --- url ---

fn url_from_attr(entry: &ElementRef) -> Option<String> {
    entry.value().attr("data-url").map(String::from)
}

fn url_from_heading_link(entry: &ElementRef) -> Option<String> {
    let link = entry.select(&selector("h3.loop-item-title a")).next()?;
    link.value().attr("href").map(String::from)
}

fn url_from_details_link(entry: &ElementRef) -> Option<String> {
    let link = entry.select(&selector("a.details")).next()?;
    link.value().attr("href").map(String::from)
}

fn url_from_primary_action(entry: &ElementRef) -> Option<String> {
    let link = entry.select(&selector("a.btn-primary")).next()?;
    link.value().attr("href").map(String::from)
}

// --- company ---

/// Split a "Job Title – Company" heading on the first separator found and
/// take the trailing segment.
pub(crate) fn company_from_title(title: &str) -> Option<String> {
    for sep in TITLE_SEPARATORS {
        if title.contains(sep) {
            let company = title.split(sep).last()?.trim();
            if !company.is_empty() {
                return Some(company.to_string());
            }
            return None;
        }
    }
    None
}

fn company_from_classes(entry: &ElementRef) -> Option<String> {
    classes(entry)
        .find_map(|c| c.strip_prefix("job_company-"))
        .map(|slug| title_case_slug(slug.strip_suffix("-job-vacancies").unwrap_or(slug)))
}

// --- job type / location / category ---

fn job_type_from_span(entry: &ElementRef) -> Option<String> {
    let inner = entry.select(&selector("span.job-type span")).next()?;
    nonempty_text(&inner)
}

fn job_type_from_classes(entry: &ElementRef) -> Option<String> {
    classes(entry)
        .find_map(|c| c.strip_prefix("job_type-"))
        .map(title_case_slug)
}

fn location_from_span(entry: &ElementRef) -> Option<String> {
    let span = entry.select(&selector("span.job-location")).next()?;
    if let Some(em) = span.select(&selector("em")).next() {
        return nonempty_text(&em);
    }
    let link = span.select(&selector("a")).next()?;
    nonempty_text(&link)
}

fn location_from_classes(entry: &ElementRef) -> Option<String> {
    classes(entry)
        .find_map(|c| c.strip_prefix("job_location-"))
        .map(title_case_slug)
}

fn category_from_spans(entry: &ElementRef) -> Option<String> {
    let terms: Vec<String> = entry
        .select(&selector("span.job-category a"))
        .map(|a| text_of(&a))
        .filter(|t| !t.is_empty())
        .collect();
    (!terms.is_empty()).then(|| terms.join(" - "))
}

fn category_from_classes(entry: &ElementRef) -> Option<String> {
    let terms: Vec<String> = classes(entry)
        .filter_map(|c| c.strip_prefix("job_category-"))
        .map(title_case_slug)
        .collect();
    (!terms.is_empty()).then(|| terms.join(" - "))
}

// --- remaining single-strategy fields ---

fn entry_id(entry: &ElementRef) -> Option<String> {
    classes(entry)
        .filter_map(|c| c.strip_prefix("post-"))
        .find(|rest| !rest.is_empty() && rest.chars().all(|ch| ch.is_ascii_digit()))
        .map(String::from)
}

fn closing_date(entry: &ElementRef) -> Option<String> {
    let span = entry.select(&selector("span.job-date__closing")).next()?;
    nonempty_text(&span)
}

fn posted_date(entry: &ElementRef) -> Option<String> {
    let time = entry.select(&selector("time.entry-date")).next()?;
    time.value().attr("datetime").map(String::from)
}

fn posted_ago(entry: &ElementRef) -> Option<String> {
    let span = entry.select(&selector("span.job-date-ago")).next()?;
    nonempty_text(&span)
}

fn is_closed(entry: &ElementRef) -> bool {
    classes(entry).any(|c| c == "closed-job")
}
