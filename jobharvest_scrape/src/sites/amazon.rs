//! Amazon jobs: card list with a pager that reports the total page count.

use scraper::Html;

use crate::errors::FetchError;
use crate::select::{own_text, sel, text_of};
use crate::types::{JobPosting, Listing};

use super::SiteScraper;

pub struct Amazon;

impl SiteScraper for Amazon {
    fn company(&self) -> &'static str {
        "Amazon"
    }

    fn key(&self) -> &'static str {
        "amazon"
    }

    fn page_url(&self, base_url: &str, page: i64) -> String {
        format!("{}&page={}", base_url, page)
    }

    fn parse_listing(&self, html: &str, page: i64) -> Result<Listing, FetchError> {
        let doc = Html::parse_document(html);
        let card = sel(r#"li div[role="button"]"#);
        let title_link = sel("h3 a");
        let metadatum = sel(".metadatum-module_text__ncKFr");
        let content = sel(".job-card-module_content__8sS0J");

        let mut jobs = Vec::new();
        for el in doc.select(&card) {
            let Some(link) = el.select(&title_link).next() else {
                continue;
            };
            let title = own_text(link);
            let Some(job_id) = link
                .value()
                .attr("href")
                .and_then(|href| href.split_once("/jobs/"))
                .map(|(_, id)| id.to_string())
            else {
                continue;
            };
            if job_id.is_empty() || title.is_empty() {
                continue;
            }

            let metadata: Vec<String> = el.select(&metadatum).map(own_text).collect();
            let location = metadata
                .first()
                .map(|m| clean_location(m))
                .unwrap_or_default();
            let posted_on = metadata
                .get(1)
                .map(|m| m.replace("Updated:", "").trim().to_string())
                .unwrap_or_default();
            let description = text_of(el, &content).unwrap_or_default();

            jobs.push(JobPosting {
                company: self.company().to_string(),
                job_id,
                title,
                function: if description.contains("FireTV") {
                    "FireTV".to_string()
                } else {
                    "Program Management".to_string()
                },
                location,
                description,
                posted_on,
                page,
                ..Default::default()
            });
        }

        Ok(Listing {
            jobs,
            total_pages: pager_total(&doc),
            end_of_results: false,
        })
    }
}

/// Highest numbered page button in the pager. The next-page button carries a
/// non-numeric `data-test-id` and drops out of the max.
fn pager_total(doc: &Html) -> Option<i64> {
    let button = sel(r#"nav[aria-label="Page selection"] button[data-test-id]"#);
    doc.select(&button)
        .filter_map(|b| b.value().attr("data-test-id"))
        .filter_map(|id| id.parse::<i64>().ok())
        .max()
}

/// Everything before the first comma; Amazon locations repeat region and
/// country after it.
fn clean_location(raw: &str) -> String {
    raw.split(',').next().unwrap_or(raw).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = r#"
      <nav aria-label="Page selection">
        <button data-test-id="1">1</button>
        <button data-test-id="2">2</button>
        <button data-test-id="7">7</button>
        <button data-test-id="next-page">Next</button>
      </nav>
      <ul>
        <li><div role="button">
          <h3><a href="https://www.amazon.jobs/en/jobs/2897101/senior-pm">Senior Program Manager</a></h3>
          <div class="metadatum-module_text__ncKFr">Bengaluru, Karnataka, IND</div>
          <div class="metadatum-module_text__ncKFr">Updated: 2 days ago</div>
          <div class="job-card-module_content__8sS0J">Drive roadmap planning for devices.</div>
        </div></li>
        <li><div role="button">
          <h3><a href="https://www.amazon.jobs/en/jobs/2897102/firetv-pm">FireTV Program Manager</a></h3>
          <div class="metadatum-module_text__ncKFr">Chennai, Tamil Nadu, IND</div>
          <div class="metadatum-module_text__ncKFr">Updated: 5 days ago</div>
          <div class="job-card-module_content__8sS0J">Own the FireTV launch calendar.</div>
        </div></li>
      </ul>"#;

    #[test]
    fn page_url_appends_page_param() {
        insta::assert_snapshot!(
            Amazon.page_url("https://www.amazon.jobs/en/search?base_query=pm", 2),
            @"https://www.amazon.jobs/en/search?base_query=pm&page=2"
        );
    }

    #[test]
    fn extracts_cards_and_total_pages() {
        let listing = Amazon.parse_listing(LISTING, 1).unwrap();
        assert_eq!(listing.jobs.len(), 2);
        assert_eq!(listing.total_pages, Some(7));

        let job = &listing.jobs[0];
        assert_eq!(job.job_id, "2897101/senior-pm");
        assert_eq!(job.title, "Senior Program Manager");
        assert_eq!(job.location, "Bengaluru");
        assert_eq!(job.posted_on, "2 days ago");
        assert_eq!(job.function, "Program Management");
    }

    #[test]
    fn firetv_jobs_are_categorized() {
        let listing = Amazon.parse_listing(LISTING, 1).unwrap();
        assert_eq!(listing.jobs[1].function, "FireTV");
    }

    #[test]
    fn missing_pager_means_unknown_total() {
        let listing = Amazon.parse_listing("<ul></ul>", 1).unwrap();
        assert!(listing.jobs.is_empty());
        assert_eq!(listing.total_pages, None);
    }
}
