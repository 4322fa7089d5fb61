mod client;
mod errors;
mod select;
pub mod sites;
pub mod types;
mod user_agent;
pub use self::client::FetchClient;
pub use self::errors::FetchError;
pub use self::sites::{site_for, SiteScraper, ALL_SITES};
pub use self::types::{CsvColumns, JobPosting, Listing};
