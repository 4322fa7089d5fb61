//! IBM careers: numbered `p=` pages of card markup, per-job detail pages.

use chrono::Utc;
use scraper::{ElementRef, Html};

use crate::errors::FetchError;
use crate::select::{attr_of, collapse_ws, own_text, sel, text_of};
use crate::types::{JobPosting, Listing};

use super::SiteScraper;

pub struct Ibm;

impl SiteScraper for Ibm {
    fn company(&self) -> &'static str {
        "IBM"
    }

    fn key(&self) -> &'static str {
        "ibm"
    }

    fn page_url(&self, base_url: &str, page: i64) -> String {
        format!("{}&p={}", base_url, page)
    }

    fn parse_listing(&self, html: &str, page: i64) -> Result<Listing, FetchError> {
        let doc = Html::parse_document(html);
        let card = sel(".bx--card-group__cards__col");
        let link = sel("a");
        let eyebrow = sel(".bx--card__eyebrow");
        let heading = sel(".bx--card__heading");
        let copy_inner = sel(".ibm--card__copy__inner");

        let mut jobs = Vec::new();
        for el in doc.select(&card) {
            let Some(url) = attr_of(el, &link, "href") else {
                continue;
            };
            let job_id = req_id_from_url(&url).unwrap_or_default();
            let location = el
                .select(&copy_inner)
                .next()
                .map(card_location)
                .unwrap_or_default();

            jobs.push(JobPosting {
                company: self.company().to_string(),
                job_id,
                title: text_of(el, &heading).unwrap_or_default(),
                function: text_of(el, &eyebrow).unwrap_or_default(),
                location,
                posted_on: Utc::now().date_naive().to_string(),
                page,
                detail_url: Some(url),
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
        let description = sel(".jd-description");
        job.description = doc
            .select(&description)
            .next()
            .map(own_text)
            .ok_or(FetchError::MissingElement(".jd-description"))?;
        Ok(())
    }
}

/// The numeric `/job/{id}/` segment of a card link, with the `REQ` prefix the
/// output has always carried.
fn req_id_from_url(url: &str) -> Option<String> {
    let idx = url.find("/job/")?;
    let rest = &url[idx + "/job/".len()..];
    let end = rest.find('/')?;
    let id = &rest[..end];
    if id.is_empty() || !id.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    Some(format!("REQ{}", id))
}

/// The card copy is `level<br>location`; only the location is kept, with the
/// country suffix trimmed.
fn card_location(el: ElementRef<'_>) -> String {
    let inner = el.inner_html();
    let mut parts = inner.split("<br>");
    let _level = parts.next();
    match parts.next() {
        Some(raw) => {
            let fragment = Html::parse_fragment(raw);
            collapse_ws(&fragment.root_element().text().collect::<String>()).replace(", IN", "")
        }
        None => String::new(),
    }
}
