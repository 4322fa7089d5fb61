//! Record types shared between the site extractors and the run engine.

use serde::Serialize;

/// One normalized job record extracted from a listing page.
///
/// Flat and immutable once written: identity is the optional `job_id`, used
/// only to deduplicate within a single run. The sequence number is assigned
/// by the CSV sink at append time, not here.
#[derive(Debug, Clone, Default, Serialize)]
pub struct JobPosting {
    pub company: String,
    pub job_id: String,
    pub title: String,
    /// Department or category the site files the job under.
    pub function: String,
    pub location: String,
    pub description: String,
    /// Long-form description fetched from the detail page. Only populated
    /// for sites whose CSV layout carries the extra column.
    pub detailed_description: Option<String>,
    pub posted_on: String,
    /// Listing page the record was extracted from.
    pub page: i64,
    /// Detail-page URL, kept for enrichment and never written to CSV.
    #[serde(skip)]
    pub detail_url: Option<String>,
}

/// One parsed listing page.
pub struct Listing {
    pub jobs: Vec<JobPosting>,
    /// Total page count when the site reports one (pager widget or total
    /// job count). `None` for sites that only reveal the end by running out.
    pub total_pages: Option<i64>,
    /// True when the page carries an explicit "no results" marker.
    pub end_of_results: bool,
}

/// Column layout of a company's output CSV.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CsvColumns {
    /// `S.No., Company, Job ID, Function, Location, Title, Description,
    /// Posted On, Page Number`
    Standard,
    /// Standard minus the page column.
    NoPage,
    /// Standard plus `Detailed Description` after `Description`.
    WithDetailed,
}
