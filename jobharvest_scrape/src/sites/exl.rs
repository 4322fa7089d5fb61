//! EXL careers: pager-driven card list. The first page reports the total job
//! count, which fixes the page count for the whole run, and every job gets a
//! detail fetch into a dedicated CSV column.

use std::time::Duration;

use scraper::Html;

use crate::errors::FetchError;
use crate::select::{digits, own_text, sel, text_of};
use crate::types::{CsvColumns, JobPosting, Listing};

use super::SiteScraper;

const JOBS_PER_PAGE: i64 = 45;

pub struct Exl;

impl SiteScraper for Exl {
    fn company(&self) -> &'static str {
        "EXL"
    }

    fn key(&self) -> &'static str {
        "exl"
    }

    // The pager is query-driven; page 1 is the bare base URL.
    fn page_url(&self, base_url: &str, page: i64) -> String {
        if page <= 1 {
            base_url.to_string()
        } else {
            format!("{}&page={}", base_url, page)
        }
    }

    fn parse_listing(&self, html: &str, page: i64) -> Result<Listing, FetchError> {
        let doc = Html::parse_document(html);
        let card = sel(".card-block");
        let title_link = sel(".title_block .link");
        let job_code = sel(".job-code");
        let function_item = sel(".listing-inline li:first-child");
        let location_item = sel(".listing-inline li:nth-child(2)");
        let experience = sel(".text-cell.font-bold");
        let tag = sel(".tag-job");
        let posted = sel(".last-child .link2");

        let mut jobs = Vec::new();
        for el in doc.select(&card) {
            let Some(link) = el.select(&title_link).next() else {
                continue;
            };

            let function_text = text_of(el, &function_item).unwrap_or_default();
            let simplified_function = function_text
                .rsplit('>')
                .next()
                .unwrap_or_default()
                .trim()
                .to_string();
            let location = text_of(el, &location_item)
                .map(|raw| clean_location(&raw))
                .unwrap_or_default();
            let experience_text = text_of(el, &experience).unwrap_or_default();
            let skills: Vec<String> = el
                .select(&tag)
                .map(own_text)
                .filter(|t| !t.is_empty())
                .collect();

            jobs.push(JobPosting {
                company: self.company().to_string(),
                job_id: text_of(el, &job_code).unwrap_or_default(),
                title: own_text(link),
                function: function_text,
                location,
                description: format!(
                    "{} | Experience: {} | Skills: {}",
                    simplified_function,
                    experience_text,
                    skills.join(", ")
                ),
                posted_on: text_of(el, &posted).unwrap_or_default(),
                page,
                detail_url: link.value().attr("href").map(str::to_string),
                ..Default::default()
            });
        }

        Ok(Listing {
            jobs,
            total_pages: total_pages(&doc),
            end_of_results: false,
        })
    }

    fn detail_url(&self, job: &JobPosting) -> Option<String> {
        job.detail_url.clone()
    }

    fn apply_detail_page(&self, job: &mut JobPosting, html: &str) -> Result<(), FetchError> {
        let doc = Html::parse_document(html);
        let panel = sel(".panel-body");
        let paragraph = sel("p");
        let body = doc
            .select(&panel)
            .next()
            .ok_or(FetchError::MissingElement(".panel-body"))?;
        let text: Vec<String> = body
            .select(&paragraph)
            .map(own_text)
            .filter(|t| !t.is_empty())
            .collect();
        job.detailed_description = Some(text.join("\n"));
        Ok(())
    }

    fn apply_detail_failure(&self, job: &mut JobPosting) {
        job.detailed_description = Some("Failed to fetch detailed description".to_string());
    }

    fn columns(&self) -> CsvColumns {
        CsvColumns::WithDetailed
    }

    fn page_delay(&self) -> Duration {
        Duration::from_millis(3000)
    }

    fn detail_delay(&self) -> Duration {
        Duration::from_millis(1000)
    }
}

/// Page count derived from the total-jobs counter shown above the list.
fn total_pages(doc: &Html) -> Option<i64> {
    let counter = sel(".totale-num");
    let total_jobs = doc.select(&counter).next().and_then(|el| digits(&own_text(el)))?;
    Some((total_jobs + JOBS_PER_PAGE - 1) / JOBS_PER_PAGE)
}

/// Location breadcrumbs read `Country > State > City`; the country and empty
/// segments are dropped.
fn clean_location(raw: &str) -> String {
    raw.split('>')
        .map(str::trim)
        .filter(|part| !part.is_empty() && *part != "India")
        .collect::<Vec<_>>()
        .join(", ")
}
