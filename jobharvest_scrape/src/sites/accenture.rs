//! Accenture careers: teaser cards with a `pg=` query parameter. The base URL
//! from the input file already carries a `pg=` value, so it is stripped before
//! the current page is appended.

use std::time::Duration;

use scraper::Html;

use crate::errors::FetchError;
use crate::select::{attr_of, sel, text_of};
use crate::types::{JobPosting, Listing};

use super::SiteScraper;

/// Teaser cards that are site chrome rather than jobs.
const EXCLUDED_TITLES: &[&str] = &["Join Our Team", "Keep Up to Date", "Job Alert Emails"];

pub struct Accenture;

impl SiteScraper for Accenture {
    fn company(&self) -> &'static str {
        "Accenture"
    }

    fn key(&self) -> &'static str {
        "accenture"
    }

    fn page_url(&self, base_url: &str, page: i64) -> String {
        format!("{}&pg={}", strip_pg_param(base_url), page)
    }

    fn parse_listing(&self, html: &str, page: i64) -> Result<Listing, FetchError> {
        let doc = Html::parse_document(html);
        let card = sel(".cmp-teaser.card");
        let title = sel(".cmp-teaser__title");
        let save_card = sel(".cmp-teaser__save-job-card");
        let skill = sel(".cmp-teaser__job-listing-semibold.skill");
        let city = sel(".cmp-teaser-city");
        let description = sel(".cmp-teaser__job-listing .description");
        let posted = sel(".cmp-teaser__job-listing-posted-date");

        let mut jobs = Vec::new();
        for el in doc.select(&card) {
            let card_title = text_of(el, &title).unwrap_or_default();
            if EXCLUDED_TITLES.contains(&card_title.as_str()) {
                continue;
            }

            jobs.push(JobPosting {
                company: self.company().to_string(),
                job_id: attr_of(el, &save_card, "data-job-id").unwrap_or_default(),
                title: card_title,
                function: text_of(el, &skill).unwrap_or_default(),
                location: text_of(el, &city).unwrap_or_default(),
                description: text_of(el, &description).unwrap_or_default(),
                posted_on: text_of(el, &posted).unwrap_or_default(),
                page,
                ..Default::default()
            });
        }

        Ok(Listing {
            jobs,
            total_pages: None,
            end_of_results: false,
        })
    }

    fn page_delay(&self) -> Duration {
        Duration::from_millis(3000)
    }
}

/// Removes an existing `&pg=<n>` from the base URL, leaving any later
/// parameters in place.
fn strip_pg_param(url: &str) -> String {
    let Some(idx) = url.find("&pg=") else {
        return url.to_string();
    };
    let after = &url[idx + "&pg=".len()..];
    let end = after
        .find('&')
        .map(|i| idx + "&pg=".len() + i)
        .unwrap_or(url.len());
    format!("{}{}", &url[..idx], &url[end..])
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = r#"
      <div class="cmp-teaser card">
        <div class="cmp-teaser__save-job-card" data-job-id="R00254117"></div>
        <h3 class="cmp-teaser__title">Application Developer</h3>
        <span class="cmp-teaser__job-listing-semibold skill">Technology</span>
        <span class="cmp-teaser-city">Hyderabad</span>
        <div class="cmp-teaser__job-listing">
          <span class="cmp-teaser__job-listing-posted-date">Posted 3 days ago</span>
          <p class="description">Design, build and configure  applications.</p>
        </div>
      </div>
      <div class="cmp-teaser card">
        <h3 class="cmp-teaser__title">Join Our Team</h3>
      </div>"#;

    #[test]
    fn page_url_replaces_existing_pg() {
        insta::assert_snapshot!(
            Accenture.page_url("https://www.accenture.com/in-en/careers/jobsearch?ct=India&pg=9&sb=1", 2),
            @"https://www.accenture.com/in-en/careers/jobsearch?ct=India&sb=1&pg=2"
        );
    }

    #[test]
    fn page_url_without_pg_just_appends() {
        insta::assert_snapshot!(
            Accenture.page_url("https://www.accenture.com/in-en/careers/jobsearch?ct=India", 1),
            @"https://www.accenture.com/in-en/careers/jobsearch?ct=India&pg=1"
        );
    }

    #[test]
    fn extracts_cards_and_skips_chrome_teasers() {
        let listing = Accenture.parse_listing(LISTING, 2).unwrap();
        assert_eq!(listing.jobs.len(), 1);

        let job = &listing.jobs[0];
        assert_eq!(job.job_id, "R00254117");
        assert_eq!(job.title, "Application Developer");
        assert_eq!(job.function, "Technology");
        assert_eq!(job.location, "Hyderabad");
        assert_eq!(job.description, "Design, build and configure applications.");
        assert_eq!(job.posted_on, "Posted 3 days ago");
        assert_eq!(job.page, 2);
    }
}
