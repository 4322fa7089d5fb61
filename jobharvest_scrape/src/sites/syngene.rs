//! Syngene careers: the same SuccessFactors row family as Deloitte, plus a
//! per-job detail fetch for the full description.

use std::time::Duration;

use scraper::Html;

use crate::errors::FetchError;
use crate::select::{paragraph_text, sel, text_of};
use crate::types::{JobPosting, Listing};

use super::SiteScraper;

const JOBS_PER_PAGE: i64 = 25;

pub struct Syngene;

impl SiteScraper for Syngene {
    fn company(&self) -> &'static str {
        "Syngene"
    }

    fn key(&self) -> &'static str {
        "syngene"
    }

    fn page_url(&self, base_url: &str, page: i64) -> String {
        format!("{}&startrow={}", base_url, (page - 1) * JOBS_PER_PAGE)
    }

    fn parse_listing(&self, html: &str, page: i64) -> Result<Listing, FetchError> {
        let doc = Html::parse_document(html);
        let row = sel(".data-row");
        let facility = sel(".jobFacility");
        let department = sel(".jobDepartment");
        let location = sel(".jobLocation");
        let title_link = sel(".jobTitle-link");
        let date = sel(".jobDate");

        let mut jobs = Vec::new();
        for el in doc.select(&row) {
            let detail_url = el
                .select(&title_link)
                .next()
                .and_then(|link| link.value().attr("href"))
                .map(str::to_string);

            jobs.push(JobPosting {
                company: self.company().to_string(),
                job_id: text_of(el, &facility).unwrap_or_default(),
                title: text_of(el, &title_link).unwrap_or_default(),
                function: text_of(el, &department).unwrap_or_default(),
                location: text_of(el, &location)
                    .map(|l| l.replace(", India", "").trim().to_string())
                    .unwrap_or_default(),
                posted_on: text_of(el, &date).unwrap_or_default(),
                page,
                detail_url,
                ..Default::default()
            });
        }

        Ok(Listing {
            jobs,
            total_pages: None,
            end_of_results: false,
        })
    }

    fn detail_url(&self, job: &JobPosting) -> Option<String> {
        job.detail_url.clone()
    }

    fn apply_detail_page(&self, job: &mut JobPosting, html: &str) -> Result<(), FetchError> {
        let doc = Html::parse_document(html);
        let description = sel(".jobdescription");
        job.description = doc
            .select(&description)
            .next()
            .map(paragraph_text)
            .ok_or(FetchError::MissingElement(".jobdescription"))?;
        Ok(())
    }

    fn page_delay(&self) -> Duration {
        Duration::from_millis(3000)
    }
}
