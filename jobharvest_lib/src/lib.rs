//! Library layer for jobharvest: company registry, the shared scrape run
//! engine, and per-company CSV output.
//!
//! Wraps the site-facing `jobharvest_scrape` crate with input parsing,
//! validation, the pagination/deduplication control loop, and run summaries.

pub mod error;
pub mod registry;
pub mod run;
pub mod sink;
pub mod validation;

pub use jobharvest_scrape;
pub use jobharvest_scrape::types;
pub use jobharvest_scrape::{site_for, CsvColumns, FetchClient, JobPosting, SiteScraper, ALL_SITES};

pub use error::JobHarvestError;
pub use registry::{read_input_csv, CompanyConfig};
pub use run::{run_company, RunSummary, StopReason};
pub use sink::CsvSink;
