//! Per-company CSV output.
//!
//! One file per company under the output directory, truncated at the start of
//! each run, with the company's fixed column header and a sequence number
//! that keeps counting across pages.

use std::fs;
use std::path::{Path, PathBuf};

use jobharvest_scrape::{CsvColumns, JobPosting, SiteScraper};

use crate::error::JobHarvestError;

pub struct CsvSink {
    writer: csv::Writer<fs::File>,
    columns: CsvColumns,
    path: PathBuf,
    next_sno: usize,
}

impl CsvSink {
    /// Creates the output directory if needed and opens a fresh CSV for the
    /// site, writing its header row.
    pub fn for_site(output_dir: &Path, site: &dyn SiteScraper) -> Result<Self, JobHarvestError> {
        fs::create_dir_all(output_dir)?;
        let path = output_dir.join(format!("{}.csv", site.company().replace(' ', "")));
        let mut writer = csv::Writer::from_path(&path)?;
        writer.write_record(header(site.columns()))?;
        writer.flush()?;
        Ok(Self {
            writer,
            columns: site.columns(),
            path,
            next_sno: 1,
        })
    }

    /// Appends records with continuing sequence numbers and flushes, so a
    /// halted run keeps everything written so far.
    pub fn append(&mut self, jobs: &[JobPosting]) -> Result<(), JobHarvestError> {
        for job in jobs {
            self.writer.write_record(row(self.columns, self.next_sno, job))?;
            self.next_sno += 1;
        }
        self.writer.flush()?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn written(&self) -> usize {
        self.next_sno - 1
    }
}

fn header(columns: CsvColumns) -> Vec<&'static str> {
    let mut cols = vec![
        "S.No.",
        "Company",
        "Job ID",
        "Function",
        "Location",
        "Title",
        "Description",
    ];
    if columns == CsvColumns::WithDetailed {
        cols.push("Detailed Description");
    }
    cols.push("Posted On");
    if columns != CsvColumns::NoPage {
        cols.push("Page Number");
    }
    cols
}

fn row(columns: CsvColumns, sno: usize, job: &JobPosting) -> Vec<String> {
    let mut fields = vec![
        sno.to_string(),
        job.company.clone(),
        job.job_id.clone(),
        job.function.clone(),
        job.location.clone(),
        job.title.clone(),
        job.description.clone(),
    ];
    if columns == CsvColumns::WithDetailed {
        fields.push(job.detailed_description.clone().unwrap_or_default());
    }
    fields.push(job.posted_on.clone());
    if columns != CsvColumns::NoPage {
        fields.push(job.page.to_string());
    }
    fields
}
