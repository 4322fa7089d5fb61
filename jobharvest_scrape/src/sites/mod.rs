//! The fixed set of career-site extractors.
//!
//! Each site is a unit struct implementing [`SiteScraper`]: typed extraction
//! functions over one site's markup plus the site's pagination quirks. The
//! shared run engine drives any of them through the same
//! fetch/extract/dedup/append loop.

mod accenture;
mod amazon;
mod capgemini;
mod cognizant;
mod deloitte;
mod exl;
mod ibm;
mod marriott;
mod sbi;
mod schneider_electric;
mod syngene;

use std::time::Duration;

use crate::errors::FetchError;
use crate::types::{CsvColumns, JobPosting, Listing};

pub use accenture::Accenture;
pub use amazon::Amazon;
pub use capgemini::Capgemini;
pub use cognizant::Cognizant;
pub use deloitte::Deloitte;
pub use exl::Exl;
pub use ibm::Ibm;
pub use marriott::Marriott;
pub use sbi::Sbi;
pub use schneider_electric::SchneiderElectric;
pub use syngene::Syngene;

/// One company's career site: URL construction for listing pages, extraction
/// of job records, and optional per-job detail enrichment.
pub trait SiteScraper: Send + Sync {
    /// Canonical company name as written to the CSV.
    fn company(&self) -> &'static str;

    /// Lowercase key used in the input CSV and the scrape route.
    fn key(&self) -> &'static str;

    /// Builds the URL of one listing page from the configured base URL.
    fn page_url(&self, base_url: &str, page: i64) -> String;

    /// Extracts the job records of one listing page.
    fn parse_listing(&self, html: &str, page: i64) -> Result<Listing, FetchError>;

    /// Detail-page URL for a job, when the site needs per-job enrichment.
    fn detail_url(&self, job: &JobPosting) -> Option<String> {
        let _ = job;
        None
    }

    /// Applies a fetched detail page to the record. Most sites fill
    /// `description`; some also pick up the posted date or fill a dedicated
    /// column.
    fn apply_detail_page(&self, job: &mut JobPosting, html: &str) -> Result<(), FetchError> {
        let _ = (job, html);
        Err(FetchError::Parse("site has no detail pages".into()))
    }

    /// Fills the record's placeholder when a detail fetch or extraction
    /// fails; the run continues.
    fn apply_detail_failure(&self, job: &mut JobPosting) {
        job.description = "Failed to load description".to_string();
    }

    /// Column layout of this company's output CSV.
    fn columns(&self) -> CsvColumns {
        CsvColumns::Standard
    }

    /// Fixed pause between listing pages.
    fn page_delay(&self) -> Duration {
        Duration::from_millis(2000)
    }

    /// Fixed pause between detail-page fetches.
    fn detail_delay(&self) -> Duration {
        Duration::from_millis(800)
    }
}

/// Every supported site, in input-CSV order.
pub static ALL_SITES: &[&dyn SiteScraper] = &[
    &Ibm,
    &Amazon,
    &Sbi,
    &Accenture,
    &Deloitte,
    &Cognizant,
    &Exl,
    &Capgemini,
    &Marriott,
    &SchneiderElectric,
    &Syngene,
];

/// Looks up a site by company name, case-insensitively.
pub fn site_for(company: &str) -> Option<&'static dyn SiteScraper> {
    let key = company.trim().to_ascii_lowercase();
    ALL_SITES.iter().copied().find(|site| site.key() == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(site_for("IBM").map(|s| s.company()), Some("IBM"));
        assert_eq!(site_for("ibm").map(|s| s.company()), Some("IBM"));
        assert_eq!(
            site_for(" SchneiderElectric ").map(|s| s.company()),
            Some("Schneider Electric")
        );
    }

    #[test]
    fn unknown_company_is_none() {
        assert!(site_for("globex").is_none());
    }

    #[test]
    fn keys_are_unique_and_lowercase() {
        let mut keys: Vec<_> = ALL_SITES.iter().map(|s| s.key()).collect();
        assert!(keys.iter().all(|k| *k == k.to_ascii_lowercase()));
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), ALL_SITES.len());
    }
}
