//! Cognizant careers: card list with a fixed India filter in the query string
//! and per-job detail pages for the description.

use scraper::Html;

use crate::errors::FetchError;
use crate::select::{attr_of, own_text, sel};
use crate::types::{JobPosting, Listing};

use super::SiteScraper;

pub struct Cognizant;

impl SiteScraper for Cognizant {
    fn company(&self) -> &'static str {
        "Cognizant"
    }

    fn key(&self) -> &'static str {
        "cognizant"
    }

    fn page_url(&self, base_url: &str, page: i64) -> String {
        format!(
            "{}/?page={}&location=India&radius=100&cname=India&ccode=IN&pagesize=10#results",
            base_url.trim_end_matches('/'),
            page
        )
    }

    fn parse_listing(&self, html: &str, page: i64) -> Result<Listing, FetchError> {
        let doc = Html::parse_document(html);
        let card = sel(".card.card-job");
        let title_link = sel(".card-title a");
        let meta_item = sel(".job-meta .list-inline-item");
        let actions = sel(".card-job-actions");

        let mut jobs = Vec::new();
        for el in doc.select(&card) {
            let Some(link) = el.select(&title_link).next() else {
                continue;
            };
            let meta: Vec<String> = el.select(&meta_item).map(own_text).collect();

            jobs.push(JobPosting {
                company: self.company().to_string(),
                job_id: attr_of(el, &actions, "data-id").unwrap_or_default(),
                title: own_text(link),
                function: meta.get(1).cloned().unwrap_or_default(),
                location: meta.first().cloned().unwrap_or_default(),
                page,
                detail_url: link.value().attr("href").map(str::to_string),
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
        let content = sel(".cms-content");
        job.description = doc
            .select(&content)
            .next()
            .map(own_text)
            .ok_or(FetchError::MissingElement(".cms-content"))?;
        Ok(())
    }
}
