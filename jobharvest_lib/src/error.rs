//! Error types for the library layer.

use std::fmt;

/// Errors produced by the library layer, wrapping site fetch/extraction
/// errors and adding input, registry, and output failures.
#[derive(Debug)]
pub enum JobHarvestError {
    /// A listing or detail page could not be fetched or extracted.
    Scrape(jobharvest_scrape::FetchError),
    /// Reading the input file or writing the output file failed.
    Io(std::io::Error),
    /// The input or output CSV could not be parsed or written.
    Csv(csv::Error),
    /// User-provided input failed validation.
    InvalidInput(String),
    /// The requested company is not in the input file or has no scraper.
    UnknownCompany(String),
}

impl fmt::Display for JobHarvestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scrape(e) => write!(f, "Scrape error: {}", e),
            Self::Io(e) => write!(f, "IO error: {}", e),
            Self::Csv(e) => write!(f, "CSV error: {}", e),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::UnknownCompany(name) => write!(f, "Unknown company: {}", name),
        }
    }
}

impl std::error::Error for JobHarvestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Scrape(e) => Some(e),
            Self::Io(e) => Some(e),
            Self::Csv(e) => Some(e),
            _ => None,
        }
    }
}

impl From<jobharvest_scrape::FetchError> for JobHarvestError {
    fn from(e: jobharvest_scrape::FetchError) -> Self {
        Self::Scrape(e)
    }
}

impl From<std::io::Error> for JobHarvestError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<csv::Error> for JobHarvestError {
    fn from(e: csv::Error) -> Self {
        Self::Csv(e)
    }
}
