//! Single job detail-page extraction.

use super::{nonempty_text, selector, text_of, truncate_chars};
use crate::extract::entry::company_from_title;
use crate::models::JobListing;
use scraper::Html;

/// Maximum description length in characters before the ellipsis marker.
const DESCRIPTION_LIMIT: usize = 1000;

/// Number of leading paragraphs sampled from the content container.
const DESCRIPTION_PARAGRAPHS: usize = 5;

/// Extract a [`JobListing`] from a detail page.
///
/// A page with no extractable title is "not found" and yields `None`; that
/// is a normal outcome for delisted postings, not an error.
pub fn extract_detail(html: &str, url: &str, source_name: &str) -> Option<JobListing> {
    let doc = Html::parse_document(html);

    let title = doc
        .select(&selector("h1.entry-title"))
        .next()
        .and_then(|h| nonempty_text(&h))
        .or_else(|| doc.select(&selector("h1")).next().and_then(|h| nonempty_text(&h)))?;

    let mut job = JobListing::new(&title, url, source_name);
    job.company = company_from_title(&title);
    job.description = description(&doc);
    job.closing_date = doc
        .select(&selector("span.job-date__closing"))
        .next()
        .and_then(|s| nonempty_text(&s));
    Some(job)
}

fn description(doc: &Html) -> Option<String> {
    let content = doc.select(&selector("div.entry-content")).next()?;
    let texts: Vec<String> = content
        .select(&selector("p"))
        .take(DESCRIPTION_PARAGRAPHS)
        .map(|p| text_of(&p))
        .filter(|t| !t.is_empty())
        .collect();
    if texts.is_empty() {
        return None;
    }
    Some(truncate_chars(&texts.join(" "), DESCRIPTION_LIMIT))
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://jobsbotswana.info/job/accountant-debswana/";

    #[test]
    fn test_detail_page() {
        let html = r#"
            <html><body>
            <h1 class="entry-title">Accountant – Debswana</h1>
            <span class="job-date__closing">Closes 15 Sep 2026</span>
            <div class="entry-content">
                <p>First paragraph.</p>
                <p>  Second   paragraph. </p>
                <p></p>
                <p>Third.</p>
            </div>
            </body></html>"#;
        let job = extract_detail(html, URL, "Jobs Botswana").expect("job");
        assert_eq!(job.title, "Accountant – Debswana");
        assert_eq!(job.url, URL);
        assert_eq!(job.company.as_deref(), Some("Debswana"));
        assert_eq!(
            job.description.as_deref(),
            Some("First paragraph. Second paragraph. Third.")
        );
        assert_eq!(job.closing_date.as_deref(), Some("Closes 15 Sep 2026"));
    }

    #[test]
    fn test_plain_h1_fallback() {
        let html = "<html><body><h1>Groundskeeper</h1></body></html>";
        let job = extract_detail(html, URL, "Jobs Botswana").expect("job");
        assert_eq!(job.title, "Groundskeeper");
        assert!(job.description.is_none());
    }

    #[test]
    fn test_no_title_is_not_found() {
        let html = "<html><body><div class='entry-content'><p>orphan</p></div></body></html>";
        assert!(extract_detail(html, URL, "Jobs Botswana").is_none());
    }

    #[test]
    fn test_description_truncated_at_limit() {
        let para = "x".repeat(600);
        let html = format!(
            "<html><body><h1>Long Post</h1><div class=\"entry-content\"><p>{para}</p><p>{para}</p></div></body></html>"
        );
        let job = extract_detail(&html, URL, "Jobs Botswana").expect("job");
        let desc = job.description.expect("description");
        assert_eq!(desc.len(), 1003);
        assert!(desc.ends_with("..."));
    }

    #[test]
    fn test_only_first_five_paragraphs_used() {
        let paras: String = (1..=7).map(|i| format!("<p>p{i}</p>")).collect();
        let html =
            format!("<html><body><h1>Role</h1><div class=\"entry-content\">{paras}</div></body></html>");
        let job = extract_detail(&html, URL, "Jobs Botswana").expect("job");
        assert_eq!(job.description.as_deref(), Some("p1 p2 p3 p4 p5"));
    }
}
