//! Marriott careers: result-list items where the advertised company is the
//! owning hotel brand, with per-job detail pages for the description.

use chrono::Utc;
use scraper::Html;

use crate::errors::FetchError;
use crate::select::{own_text, sel, text_of};
use crate::types::{JobPosting, Listing};

use super::SiteScraper;

pub struct Marriott;

impl SiteScraper for Marriott {
    fn company(&self) -> &'static str {
        "Marriott"
    }

    fn key(&self) -> &'static str {
        "marriott"
    }

    fn page_url(&self, base_url: &str, page: i64) -> String {
        format!("{}&page={}", base_url, page)
    }

    fn parse_listing(&self, html: &str, page: i64) -> Result<Listing, FetchError> {
        let doc = Html::parse_document(html);
        let item = sel(".results-list__item");
        let title_link = sel(".results-list__item-title");
        let title_text = sel(".results-list__item-title span:first-child");
        let reference = sel(".reference");
        let street = sel(".results-list__item-street--label");
        let ownership = sel(".results-list__item-ownership--label");
        let hotel = sel(".results-list__item-location--label");

        let mut jobs = Vec::new();
        for el in doc.select(&item) {
            let location = match (text_of(el, &street), text_of(el, &hotel)) {
                (Some(street), Some(hotel)) => format!("{} - {}", street, hotel),
                _ => String::new(),
            };

            jobs.push(JobPosting {
                company: text_of(el, &ownership).unwrap_or_else(|| self.company().to_string()),
                job_id: text_of(el, &reference).unwrap_or_default(),
                title: text_of(el, &title_text).unwrap_or_default(),
                location,
                posted_on: Utc::now().date_naive().to_string(),
                page,
                detail_url: el
                    .select(&title_link)
                    .next()
                    .and_then(|link| link.value().attr("href"))
                    .map(str::to_string),
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
        let description = sel(".job-description");
        job.description = doc
            .select(&description)
            .next()
            .map(own_text)
            .ok_or(FetchError::MissingElement(".job-description"))?;
        Ok(())
    }

    fn apply_detail_failure(&self, job: &mut JobPosting) {
        job.description = "Description not available".to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = r#"
      <ul>
        <li class="results-list__item">
          <a class="results-list__item-title" href="https://jobs.marriott.com/marriott/jobs/25011234">
            <span>Guest Experience Expert</span><span>New</span>
          </a>
          <span class="reference">25011234</span>
          <span class="results-list__item-street--label">Juhu Tara Road</span>
          <span class="results-list__item-location--label">JW Marriott Mumbai Juhu</span>
          <span class="results-list__item-ownership--label">JW Marriott</span>
        </li>
      </ul>"#;

    #[test]
    fn page_url_appends_page_param() {
        insta::assert_snapshot!(
            Marriott.page_url("https://jobs.marriott.com/marriott/jobs?keyword=chef", 3),
            @"https://jobs.marriott.com/marriott/jobs?keyword=chef&page=3"
        );
    }

    #[test]
    fn extracts_items_with_brand_as_company() {
        let listing = Marriott.parse_listing(LISTING, 1).unwrap();
        assert_eq!(listing.jobs.len(), 1);

        let job = &listing.jobs[0];
        assert_eq!(job.company, "JW Marriott");
        assert_eq!(job.job_id, "25011234");
        assert_eq!(job.title, "Guest Experience Expert");
        assert_eq!(job.location, "Juhu Tara Road - JW Marriott Mumbai Juhu");
        assert!(job.detail_url.as_deref().unwrap().ends_with("25011234"));
    }

    #[test]
    fn failed_detail_gets_placeholder() {
        let mut job = JobPosting::default();
        Marriott.apply_detail_failure(&mut job);
        assert_eq!(job.description, "Description not available");
    }
}
