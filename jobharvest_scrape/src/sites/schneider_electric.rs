//! Schneider Electric careers: the base URL already carries a `page=`
//! parameter, so paging rewrites it in place.

use scraper::Html;

use crate::errors::FetchError;
use crate::select::{sel, text_of};
use crate::types::{JobPosting, Listing};

use super::SiteScraper;

pub struct SchneiderElectric;

impl SiteScraper for SchneiderElectric {
    fn company(&self) -> &'static str {
        "Schneider Electric"
    }

    fn key(&self) -> &'static str {
        "schneiderelectric"
    }

    fn page_url(&self, base_url: &str, page: i64) -> String {
        replace_page_param(base_url, page)
    }

    fn parse_listing(&self, html: &str, page: i64) -> Result<Listing, FetchError> {
        let doc = Html::parse_document(html);
        let item = sel(".jobs-list-item");
        let title = sel(".job-title");
        let location = sel(".job-location");
        let function = sel(".job-function");
        let job_id = sel(".job-id");
        let posted = sel(".job-posted-date");
        let description = sel(".job-description");

        let mut jobs = Vec::new();
        for el in doc.select(&item) {
            let function_text = text_of(el, &function).unwrap_or_default();
            jobs.push(JobPosting {
                company: self.company().to_string(),
                job_id: text_of(el, &job_id).unwrap_or_default(),
                title: text_of(el, &title).unwrap_or_default(),
                location: text_of(el, &location).unwrap_or_default(),
                description: text_of(el, &description).unwrap_or_else(|| function_text.clone()),
                posted_on: text_of(el, &posted).unwrap_or_default(),
                function: function_text,
                page,
                ..Default::default()
            });
        }

        let no_results = sel(".no-results-message");
        Ok(Listing {
            jobs,
            total_pages: None,
            end_of_results: doc.select(&no_results).next().is_some(),
        })
    }
}

/// Rewrites the `page=` value in the base URL, or appends one when the input
/// file's URL does not carry it.
fn replace_page_param(url: &str, page: i64) -> String {
    let Some(idx) = url.find("page=") else {
        let sep = if url.contains('?') { '&' } else { '?' };
        return format!("{}{}page={}", url, sep, page);
    };
    let start = idx + "page=".len();
    let rest = &url[start..];
    let end = rest.find('&').map(|i| start + i).unwrap_or(url.len());
    format!("{}{}{}", &url[..start], page, &url[end..])
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = r#"
      <div class="jobs-list-item">
        <h3 class="job-title">Field Service Engineer</h3>
        <span class="job-id">009ABC</span>
        <span class="job-function">Field Services</span>
        <span class="job-location">Gurgaon</span>
        <span class="job-posted-date">2025-12-20</span>
        <p class="job-description">Commission and maintain switchgear.</p>
      </div>
      <div class="jobs-list-item">
        <h3 class="job-title">Sales Manager</h3>
        <span class="job-id">009ABD</span>
        <span class="job-function">Sales</span>
        <span class="job-location">Mumbai</span>
        <span class="job-posted-date">2025-12-19</span>
      </div>"#;

    #[test]
    fn page_url_rewrites_existing_param() {
        insta::assert_snapshot!(
            SchneiderElectric.page_url("https://careers.se.com/jobs?page=1&country=India", 4),
            @"https://careers.se.com/jobs?page=4&country=India"
        );
    }

    #[test]
    fn page_url_appends_when_missing() {
        insta::assert_snapshot!(
            SchneiderElectric.page_url("https://careers.se.com/jobs", 2),
            @"https://careers.se.com/jobs?page=2"
        );
    }

    #[test]
    fn extracts_items_with_function_fallback() {
        let listing = SchneiderElectric.parse_listing(LISTING, 1).unwrap();
        assert_eq!(listing.jobs.len(), 2);
        assert_eq!(listing.jobs[0].description, "Commission and maintain switchgear.");
        // No description element: the function text stands in.
        assert_eq!(listing.jobs[1].description, "Sales");
    }

    #[test]
    fn no_results_marker_is_detected() {
        let listing = SchneiderElectric
            .parse_listing(r#"<div class="no-results-message">No results found</div>"#, 7)
            .unwrap();
        assert!(listing.jobs.is_empty());
        assert!(listing.end_of_results);
    }
}
