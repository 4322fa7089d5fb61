//! The shared scrape run engine.
//!
//! Every site reimplemented the same control loop in its own way; here it is
//! once: resolve the page range, fetch one listing page, extract records,
//! stop on an end condition, otherwise enrich, deduplicate by job id, append
//! to CSV, sleep, advance.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::time::sleep;
use url::Url;

use jobharvest_scrape::{FetchClient, JobPosting, SiteScraper};

use crate::error::JobHarvestError;
use crate::registry::CompanyConfig;
use crate::sink::CsvSink;

/// Why a run stopped advancing through pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum StopReason {
    /// The configured end page was reached.
    EndPage,
    /// The site's reported total page count was exhausted.
    LastPage,
    /// A page yielded no records.
    EmptyPage,
    /// Every record on a page had already been seen this run.
    AllDuplicates,
    /// The site showed its explicit "no results" marker.
    EndOfResults,
}

/// What one company run did, reported back through the API and the log.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    pub company: String,
    pub pages_fetched: i64,
    pub jobs_written: usize,
    pub duplicates_skipped: usize,
    pub stop: StopReason,
    pub output_file: PathBuf,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

/// Runs one company scrape to completion: a single sequential page loop with
/// fixed sleeps, per the site's delays.
///
/// A failed listing page halts the run with an error; everything already
/// appended to the CSV stays. A failed detail fetch only costs that job its
/// description.
pub async fn run_company(
    site: &dyn SiteScraper,
    client: &FetchClient,
    config: &CompanyConfig,
    output_dir: &Path,
) -> Result<RunSummary, JobHarvestError> {
    let started_at = Utc::now();
    let mut sink = CsvSink::for_site(output_dir, site)?;
    let mut seen_ids: HashSet<String> = HashSet::new();

    let mut page = config.start_page();
    let mut pages_fetched = 0;
    let mut duplicates_skipped = 0;
    let mut total_pages: Option<i64> = None;

    let stop = loop {
        if let Some(end) = config.end_page {
            if page > end {
                break StopReason::EndPage;
            }
        }
        if let Some(total) = total_pages {
            if page > total {
                break StopReason::LastPage;
            }
        }

        let url = site.page_url(&config.base_url, page);
        tracing::debug!(company = site.company(), page, %url, "fetching listing page");
        let html = client.fetch_html(&url).await?;
        let listing = site.parse_listing(&html, page)?;
        pages_fetched += 1;
        total_pages = total_pages.or(listing.total_pages);

        if listing.jobs.is_empty() {
            break if listing.end_of_results {
                StopReason::EndOfResults
            } else {
                StopReason::EmptyPage
            };
        }

        let mut fresh: Vec<JobPosting> = Vec::new();
        for job in listing.jobs {
            if !job.job_id.is_empty() && !seen_ids.insert(job.job_id.clone()) {
                duplicates_skipped += 1;
                continue;
            }
            fresh.push(job);
        }
        if fresh.is_empty() {
            break StopReason::AllDuplicates;
        }

        for job in &mut fresh {
            let Some(raw_url) = site.detail_url(job) else {
                continue;
            };
            let detail_url = resolve_url(&config.base_url, &raw_url);
            match client.fetch_html(&detail_url).await {
                Ok(detail_html) => {
                    if let Err(err) = site.apply_detail_page(job, &detail_html) {
                        tracing::warn!(
                            company = site.company(),
                            job_id = %job.job_id,
                            "detail extraction failed: {}",
                            err
                        );
                        site.apply_detail_failure(job);
                    }
                }
                Err(err) => {
                    tracing::warn!(
                        company = site.company(),
                        job_id = %job.job_id,
                        "detail fetch failed: {}",
                        err
                    );
                    site.apply_detail_failure(job);
                }
            }
            sleep(site.detail_delay()).await;
        }

        sink.append(&fresh)?;
        tracing::info!(
            company = site.company(),
            "page {}/{} ({} new jobs, {} total)",
            page,
            total_pages.unwrap_or(page),
            fresh.len(),
            sink.written()
        );

        if listing.end_of_results {
            break StopReason::EndOfResults;
        }

        sleep(site.page_delay()).await;
        page += 1;
    };

    let summary = RunSummary {
        company: site.company().to_string(),
        pages_fetched,
        jobs_written: sink.written(),
        duplicates_skipped,
        stop,
        output_file: sink.path().to_path_buf(),
        started_at,
        finished_at: Utc::now(),
    };
    tracing::info!(
        company = %summary.company,
        "run complete: {} jobs over {} pages ({:?})",
        summary.jobs_written,
        summary.pages_fetched,
        summary.stop
    );
    Ok(summary)
}

/// Resolves a detail link against the company base URL; sites emit a mix of
/// absolute and site-relative links.
fn resolve_url(base_url: &str, link: &str) -> String {
    match Url::parse(base_url).and_then(|base| base.join(link)) {
        Ok(resolved) => resolved.to_string(),
        Err(_) => link.to_string(),
    }
}
