//! Turns the page-level result counter into an ordered traversal plan.

use thiserror::Error;
use url::Url;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlanError {
    #[error("total result count is negative: {0}")]
    InvalidCount(i64),
    #[error("page size must be positive")]
    InvalidPageSize,
    #[error("unreadable result count: {0:?}")]
    BadCount(String),
}

/// Parse the counter text as rendered on the landing page, e.g. `"(154)"`.
pub fn parse_total_count(raw: &str) -> Result<i64, PlanError> {
    let digits = raw.trim().trim_matches(['(', ')']).trim();
    digits
        .parse()
        .map_err(|_| PlanError::BadCount(raw.to_owned()))
}

/// 1-based page indices covering `total_count` results at `page_size`
/// results per page, in ascending traversal order. A partial final page
/// still counts (ceiling division). Zero results plan zero pages.
pub fn plan(total_count: i64, page_size: u32) -> Result<Vec<u32>, PlanError> {
    if total_count < 0 {
        return Err(PlanError::InvalidCount(total_count));
    }
    if page_size == 0 {
        return Err(PlanError::InvalidPageSize);
    }

    let page_count = (total_count as u64).div_ceil(u64::from(page_size)) as u32;
    Ok((1..=page_count).collect())
}

/// Listing URL for each planned page: the base query plus `page=N`.
pub fn page_urls(base: &Url, pages: &[u32]) -> Vec<Url> {
    pages
        .iter()
        .map(|page| {
            let mut url = base.clone();
            url.query_pairs_mut()
                .append_pair("page", &page.to_string());
            url
        })
        .collect()
}
