//! SBI careers: numbered pages that re-serve earlier jobs, so the run relies
//! on id-based deduplication and the site's end-of-results markers.

use std::time::Duration;

use scraper::{ElementRef, Html};

use crate::errors::FetchError;
use crate::select::{attr_of, sel, text_of};
use crate::types::{CsvColumns, JobPosting, Listing};

use super::SiteScraper;

pub struct Sbi;

impl SiteScraper for Sbi {
    fn company(&self) -> &'static str {
        "SBI"
    }

    fn key(&self) -> &'static str {
        "sbi"
    }

    fn page_url(&self, base_url: &str, page: i64) -> String {
        format!("{}?page={}", base_url, page)
    }

    fn parse_listing(&self, html: &str, page: i64) -> Result<Listing, FetchError> {
        let doc = Html::parse_document(html);
        let card = sel(".job-list-item");
        let title = sel(".job-tile__title");
        let link = sel(".job-list-item__link");
        let description = sel(".job-list-item__description");
        let location = sel(r#"[data-bind="html: primaryLocation"]"#);
        let posting_label = sel(".job-list-item__job-info-label--posting-date");
        let info_value = sel(".job-list-item__job-info-value");

        let mut jobs = Vec::new();
        for el in doc.select(&card) {
            let raw_title = text_of(el, &title).unwrap_or_default();
            let (job_title, function) = split_title(&raw_title);

            let posted_on = el
                .select(&posting_label)
                .next()
                .and_then(|label| label.parent())
                .and_then(ElementRef::wrap)
                .and_then(|row| text_of(row, &info_value))
                .unwrap_or_default();

            jobs.push(JobPosting {
                company: self.company().to_string(),
                job_id: attr_of(el, &link, "aria-labelledby").unwrap_or_default(),
                title: job_title,
                function,
                location: text_of(el, &location)
                    .map(|l| l.replace(", India", ""))
                    .unwrap_or_default(),
                description: text_of(el, &description).unwrap_or_default(),
                posted_on,
                page,
                ..Default::default()
            });
        }

        let no_results = sel(".no-results-found, .end-of-jobs-message");
        Ok(Listing {
            jobs,
            total_pages: None,
            end_of_results: doc.select(&no_results).next().is_some(),
        })
    }

    // Page numbers never made it into the SBI output.
    fn columns(&self) -> CsvColumns {
        CsvColumns::NoPage
    }

    fn page_delay(&self) -> Duration {
        Duration::from_millis(3000)
    }
}

/// SBI titles read `Role - Department`; both halves are kept.
fn split_title(raw: &str) -> (String, String) {
    match raw.split_once(" - ") {
        Some((role, department)) => (role.trim().to_string(), department.trim().to_string()),
        None => (raw.trim().to_string(), String::new()),
    }
}
