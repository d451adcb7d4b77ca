//! Parse the sidebar facet widgets (categories and locations).
//!
//! Both widgets are plain `<ul>` lists of `<a>` links with the job count in
//! parentheses inside the item text. Slugs come from the canonical URL path
//! segment when the link has one, else from the display name.

use super::{selector, text_of};
use crate::models::{name_slug, JobCategory, JobLocation};
use regex::Regex;
use scraper::{ElementRef, Html};

/// Parse the category widget. Returns an empty vec when the widget is absent.
pub fn parse_categories(html: &str) -> Vec<JobCategory> {
    let doc = Html::parse_document(html);
    let Some(widget) = doc
        .select(&selector("div.noo-job-category-widget ul.job-categories"))
        .next()
    else {
        return Vec::new();
    };

    widget
        .select(&selector("li.cat-item"))
        .filter_map(|item| {
            let link = item.select(&selector("a")).next()?;
            let name = text_of(&link);
            let href = link.value().attr("href").unwrap_or_default().to_string();
            Some(JobCategory {
                slug: slug_from_path(&href, "job-category").unwrap_or_else(|| name_slug(&name)),
                name,
                count: item_count(&item),
                url: (!href.is_empty()).then_some(href),
            })
        })
        .collect()
}

/// Parse the location widget, sorted by job count descending (stable, so
/// ties keep document order). Empty vec when the widget is absent.
pub fn parse_locations(html: &str) -> Vec<JobLocation> {
    let doc = Html::parse_document(html);
    let Some(widget) = doc
        .select(&selector("div.noo-job-location-widget ul"))
        .next()
    else {
        return Vec::new();
    };

    let mut locations: Vec<JobLocation> = widget
        .select(&selector("li.cat-item"))
        .filter_map(|item| {
            let link = item.select(&selector("a")).next()?;
            let name = text_of(&link);
            let href = link.value().attr("href").unwrap_or_default().to_string();
            Some(JobLocation {
                slug: slug_from_path(&href, "job-location").unwrap_or_else(|| name_slug(&name)),
                name,
                count: item_count(&item),
                description: link.value().attr("title").map(String::from),
                url: (!href.is_empty()).then_some(href),
            })
        })
        .collect();

    locations.sort_by(|a, b| b.count.cmp(&a.count));
    locations
}

/// Extract `/job-<dimension>/<slug>/` from a facet link.
fn slug_from_path(href: &str, dimension: &str) -> Option<String> {
    let re = Regex::new(&format!(r"/{dimension}/([^/]+)/?")).expect("slug pattern");
    re.captures(href).map(|caps| caps[1].to_string())
}

/// Job count from the `(N)` suffix in the item text, 0 when absent.
fn item_count(item: &ElementRef) -> u32 {
    let re = Regex::new(r"\((\d+)\)").expect("count pattern");
    re.captures(&text_of(item))
        .and_then(|caps| caps[1].parse().ok())
        .unwrap_or(0)
}
