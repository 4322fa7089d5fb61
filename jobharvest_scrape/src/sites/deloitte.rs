//! Deloitte careers: SuccessFactors result rows paged by a `startrow` offset.

use std::time::Duration;

use scraper::Html;

use crate::errors::FetchError;
use crate::select::{own_text, sel, text_of};
use crate::types::{JobPosting, Listing};

use super::SiteScraper;

const JOBS_PER_PAGE: i64 = 25;

pub struct Deloitte;

impl SiteScraper for Deloitte {
    fn company(&self) -> &'static str {
        "Deloitte"
    }

    fn key(&self) -> &'static str {
        "deloitte"
    }

    fn page_url(&self, base_url: &str, page: i64) -> String {
        format!("{}&startrow={}", base_url, (page - 1) * JOBS_PER_PAGE)
    }

    fn parse_listing(&self, html: &str, page: i64) -> Result<Listing, FetchError> {
        let doc = Html::parse_document(html);
        let row = sel("tr.data-row");
        let title_link = sel(".jobTitle-link");
        let location = sel(".jobLocation");
        let date = sel(".jobDate");

        let mut jobs = Vec::new();
        for el in doc.select(&row) {
            let Some(link) = el.select(&title_link).next() else {
                continue;
            };

            jobs.push(JobPosting {
                company: self.company().to_string(),
                job_id: link
                    .value()
                    .attr("href")
                    .map(last_path_segment)
                    .unwrap_or_default(),
                title: own_text(link),
                location: text_of(el, &location).unwrap_or_default(),
                posted_on: text_of(el, &date).unwrap_or_default(),
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

/// Last non-empty path segment of a job link, which Deloitte uses as the
/// requisition id.
fn last_path_segment(href: &str) -> String {
    href.trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = r#"
      <table><tbody>
        <tr class="data-row">
          <td><a class="jobTitle-link" href="/job/Bengaluru-Analyst/210349/">Analyst</a></td>
          <td><span class="jobLocation">Bengaluru</span></td>
          <td><span class="jobDate">Jan 5, 2026</span></td>
        </tr>
        <tr class="data-row">
          <td><a class="jobTitle-link" href="/job/Mumbai-Consultant/210388/">Consultant</a></td>
          <td><span class="jobLocation">Mumbai</span></td>
          <td><span class="jobDate">Jan 3, 2026</span></td>
        </tr>
      </tbody></table>"#;

    #[test]
    fn page_url_uses_startrow_offset() {
        insta::assert_snapshot!(
            Deloitte.page_url("https://jobsindia.deloitte.com/search/?q=", 1),
            @"https://jobsindia.deloitte.com/search/?q=&startrow=0"
        );
        insta::assert_snapshot!(
            Deloitte.page_url("https://jobsindia.deloitte.com/search/?q=", 3),
            @"https://jobsindia.deloitte.com/search/?q=&startrow=50"
        );
    }

    #[test]
    fn extracts_rows() {
        let listing = Deloitte.parse_listing(LISTING, 2).unwrap();
        assert_eq!(listing.jobs.len(), 2);

        let job = &listing.jobs[0];
        assert_eq!(job.job_id, "210349");
        assert_eq!(job.title, "Analyst");
        assert_eq!(job.location, "Bengaluru");
        assert_eq!(job.posted_on, "Jan 5, 2026");
        assert_eq!(job.function, "");
        assert_eq!(job.page, 2);
    }
}
