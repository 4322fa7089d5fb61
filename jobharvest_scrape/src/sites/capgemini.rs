//! Capgemini careers: table rows that are themselves links, with the
//! description and posted date living on the detail page.

use scraper::{ElementRef, Html};

use crate::errors::FetchError;
use crate::select::{own_text, sel, text_of};
use crate::types::{JobPosting, Listing};

use super::SiteScraper;

pub struct Capgemini;

impl SiteScraper for Capgemini {
    fn company(&self) -> &'static str {
        "Capgemini"
    }

    fn key(&self) -> &'static str {
        "capgemini"
    }

    fn page_url(&self, base_url: &str, page: i64) -> String {
        format!("{}&page={}", base_url, page)
    }

    fn parse_listing(&self, html: &str, page: i64) -> Result<Listing, FetchError> {
        let doc = Html::parse_document(html);
        let row = sel(".table-tr.filter-box.tag-active.joblink");
        let title_cell = sel("div.table-td:nth-child(1) > div");
        let location_cell = sel("div.table-td:nth-child(3) > div");
        let hidden_cell = sel(r#"div.table-td[style="display: none;"] div"#);

        let mut jobs = Vec::new();
        for el in doc.select(&row) {
            let Some(job_id) = el.value().attr("href").and_then(job_id_from_href) else {
                continue;
            };

            jobs.push(JobPosting {
                company: self.company().to_string(),
                job_id,
                title: text_of(el, &title_cell).unwrap_or_default(),
                function: labelled_value(el, &hidden_cell, "Business Unit").unwrap_or_default(),
                location: text_of(el, &location_cell).unwrap_or_default(),
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

    fn detail_url(&self, job: &JobPosting) -> Option<String> {
        Some(format!(
            "https://www.capgemini.com/jobs/{}+sap_btp/",
            job.job_id
        ))
    }

    fn apply_detail_page(&self, job: &mut JobPosting, html: &str) -> Result<(), FetchError> {
        let doc = Html::parse_document(html);
        let section = sel(r#".article-text div[style="padding:10.0px 0.0px;border:1.0px solid transparent"]"#);
        let header = sel("h2");
        let content = sel(r#"div:not([style*="font-size:16.0px"])"#);

        let mut parts = Vec::new();
        for block in doc.select(&section) {
            let Some(heading) = text_of(block, &header) else {
                continue;
            };
            if !heading.contains("Job Description") && !heading.contains("Grade Specific") {
                continue;
            }
            if let Some(text) = text_of(block, &content) {
                if !text.is_empty() {
                    parts.push(text);
                }
            }
        }

        job.description = if parts.is_empty() {
            "No description available".to_string()
        } else {
            parts.join("\n\n")
        };
        job.posted_on = posted_on(&doc).unwrap_or_default();
        Ok(())
    }

    fn apply_detail_failure(&self, job: &mut JobPosting) {
        job.description = "No description available".to_string();
    }
}

/// Job id is the third path segment of the row link, before the slug suffix:
/// `/jobs/{id}+{slug}/`.
fn job_id_from_href(href: &str) -> Option<String> {
    let segment = href.split('/').nth(2)?;
    let id = segment.split('+').next()?;
    if id.is_empty() {
        return None;
    }
    Some(id.to_string())
}

/// Value of a hidden label/value cell pair, matched by label text.
fn labelled_value(el: ElementRef<'_>, cells: &scraper::Selector, label: &str) -> Option<String> {
    el.select(cells)
        .find(|cell| {
            prev_element(*cell)
                .map(|prev| own_text(prev).contains(label))
                .unwrap_or(false)
        })
        .map(own_text)
}

fn prev_element<'a>(el: ElementRef<'a>) -> Option<ElementRef<'a>> {
    el.prev_siblings().find_map(ElementRef::wrap)
}

/// Posted date from the labelled meta boxes on the detail page.
fn posted_on(doc: &Html) -> Option<String> {
    let meta_box = sel(".job-meta-box-detail");
    let label = sel(".label");
    let value = sel(".value");
    doc.select(&meta_box)
        .find(|b| text_of(*b, &label).as_deref() == Some("Posted on"))
        .and_then(|b| text_of(b, &value))
}
