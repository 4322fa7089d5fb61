//! The company registry: the input CSV of companies and their search URLs.
//!
//! One row per company: `company,base_url,start_page,end_page`. A blank
//! start page means 1; a blank end page means "auto" (scrape until the site
//! runs out).

use std::path::Path;

use serde::Deserialize;

use crate::error::JobHarvestError;
use crate::validation;

/// One configured company scrape.
#[derive(Debug, Clone, Deserialize)]
pub struct CompanyConfig {
    pub company: String,
    pub base_url: String,
    pub start_page: Option<i64>,
    pub end_page: Option<i64>,
}

impl CompanyConfig {
    /// Start page with the blank-field default applied.
    pub fn start_page(&self) -> i64 {
        self.start_page.unwrap_or(1)
    }
}

/// Reads and validates the whole input file.
pub fn read_input_csv(path: &Path) -> Result<Vec<CompanyConfig>, JobHarvestError> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut rows = Vec::new();
    for row in reader.deserialize::<CompanyConfig>() {
        let row = row?;
        validation::validate_company(&row.company)?;
        validation::validate_base_url(&row.base_url)?;
        validation::validate_page_range(row.start_page.unwrap_or(1), row.end_page)?;
        rows.push(apply_url_rewrite(row));
    }
    Ok(rows)
}

/// Finds a company row by name, case-insensitively.
pub fn find_company<'a>(
    rows: &'a [CompanyConfig],
    company: &str,
) -> Option<&'a CompanyConfig> {
    let needle = company.trim().to_ascii_lowercase();
    rows.iter()
        .find(|row| row.company.trim().to_ascii_lowercase() == needle)
}

/// Accenture's saved search URL pins a `pg=` value; the row's end page has
/// always been substituted into it before a run.
fn apply_url_rewrite(mut row: CompanyConfig) -> CompanyConfig {
    if row.company.trim().eq_ignore_ascii_case("accenture") {
        row.base_url = rewrite_pg_param(&row.base_url, row.end_page.unwrap_or(1));
    }
    row
}

fn rewrite_pg_param(url: &str, page: i64) -> String {
    let Some(idx) = url.find("pg=") else {
        return url.to_string();
    };
    let start = idx + "pg=".len();
    let rest = &url[start..];
    let end = rest.find('&').map(|i| start + i).unwrap_or(url.len());
    format!("{}{}{}", &url[..start], page, &url[end..])
}
