//! Validation of user- and file-supplied input before a run starts.

use url::Url;

use crate::error::JobHarvestError;

pub const MAX_COMPANY_LENGTH: usize = 64;

/// Strip ASCII control characters, trim whitespace, and enforce a byte-length
/// limit on a company name.
pub fn validate_company(input: &str) -> Result<String, JobHarvestError> {
    if input.len() > MAX_COMPANY_LENGTH {
        return Err(JobHarvestError::InvalidInput(format!(
            "company name exceeds maximum length of {} bytes",
            MAX_COMPANY_LENGTH
        )));
    }
    let sanitized: String = input
        .chars()
        .filter(|c| !c.is_ascii_control())
        .collect::<String>()
        .trim()
        .to_string();
    if sanitized.is_empty() {
        return Err(JobHarvestError::InvalidInput(
            "company name is empty".to_string(),
        ));
    }
    Ok(sanitized)
}

/// Validate a base URL: must parse and use http or https.
pub fn validate_base_url(input: &str) -> Result<Url, JobHarvestError> {
    let url = Url::parse(input.trim()).map_err(|e| {
        JobHarvestError::InvalidInput(format!("invalid base URL '{}': {}", input, e))
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(JobHarvestError::InvalidInput(format!(
            "unsupported URL scheme '{}'; expected http or https",
            other
        ))),
    }
}

/// Validate a page number (must be >= 1).
pub fn validate_page(page: i64) -> Result<i64, JobHarvestError> {
    if page < 1 {
        return Err(JobHarvestError::InvalidInput(
            "page must be >= 1".to_string(),
        ));
    }
    Ok(page)
}

/// Validate a start/end page pair. The end page is optional ("auto").
pub fn validate_page_range(start: i64, end: Option<i64>) -> Result<(), JobHarvestError> {
    validate_page(start)?;
    if let Some(end) = end {
        validate_page(end)?;
        if end < start {
            return Err(JobHarvestError::InvalidInput(format!(
                "end page {} is before start page {}",
                end, start
            )));
        }
    }
    Ok(())
}
