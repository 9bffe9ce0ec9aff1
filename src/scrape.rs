//! Sequential listing traversal: plan pages, visit each one, extract, and
//! write the accumulated records once at the end.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context as _;
use url::Url;

use crate::browser::BrowserSession;
use crate::cli::ScrapeArgs;
use crate::dom::{DomError, DomSession};
use crate::extract;
use crate::formats::{Bike, CSV_HEADER};
use crate::pagination;
use crate::store::{self, Table};

pub const LISTING_URL: &str =
    "https://bikeindex.org/bikes?serial=&button=&location=you&distance=5&stolenness=proximity";
pub const PAGE_SIZE: u32 = 10;
pub const OUTPUT_FILE: &str = "bikes.csv";

/// Total-result counter on the landing page, e.g. "(154)".
const COUNT_SELECTOR: &str = "#stolenness_tab_proximity .count";

const NAV_ATTEMPTS: u32 = 3;
const NAV_BACKOFF: Duration = Duration::from_secs(2);
const PAGE_TIMEOUT: Duration = Duration::from_secs(30);

pub async fn run(args: ScrapeArgs) -> anyhow::Result<()> {
    let base = Url::parse(&args.url).context("parse listing url")?;
    if base.scheme() != "http" && base.scheme() != "https" {
        anyhow::bail!("listing url must be http/https: {base}");
    }

    let mut session = BrowserSession::launch().await.context("launch browser")?;
    let result = scrape_listing(&mut session, &base, args.page_size).await;
    if let Err(err) = session.close().await {
        tracing::warn!(%err, "browser shutdown failed");
    }
    let bikes = result?;

    let out = PathBuf::from(&args.out);
    let table = Table {
        header: CSV_HEADER.iter().map(|name| (*name).to_owned()).collect(),
        rows: bikes.iter().map(Bike::to_row).collect(),
    };
    store::write_all(&out, &table).with_context(|| format!("write {}", out.display()))?;

    tracing::info!(bikes = bikes.len(), out = %out.display(), "scrape finished");
    Ok(())
}

/// Core traversal, generic over the DOM session so tests can drive it with
/// an in-memory fake. Pages are visited strictly in ascending plan order;
/// no page is fetched before the previous page's extraction completes.
pub async fn scrape_listing<D: DomSession>(
    dom: &mut D,
    base: &Url,
    page_size: u32,
) -> anyhow::Result<Vec<Bike>> {
    goto_with_retry(dom, base.as_str())
        .await
        .context("open listing page")?;

    let total = read_total_count(dom).await?;
    let plan = pagination::plan(total, page_size)?;
    tracing::info!(total, pages = plan.len(), "planned listing traversal");

    let mut bikes = Vec::new();
    for url in pagination::page_urls(base, &plan) {
        goto_with_retry(dom, url.as_str())
            .await
            .with_context(|| format!("open {url}"))?;
        let page_bikes = extract::extract_page(dom)
            .await
            .with_context(|| format!("extract {url}"))?;
        tracing::info!(%url, count = page_bikes.len(), "extracted listing page");
        bikes.extend(page_bikes);
    }

    Ok(bikes)
}

async fn read_total_count<D: DomSession>(dom: &D) -> anyhow::Result<i64> {
    let counters = dom.query_all(None, COUNT_SELECTOR).await?;
    let counter = counters
        .first()
        .ok_or_else(|| anyhow::anyhow!("result counter not found: {COUNT_SELECTOR}"))?;
    let raw = dom.text_content(counter).await?;
    Ok(pagination::parse_total_count(&raw)?)
}

/// Navigation with a per-page timeout and bounded retry. Only the final
/// failure escalates; the run is fatal past that point because there is no
/// partial-output recovery.
async fn goto_with_retry<D: DomSession>(dom: &mut D, url: &str) -> Result<(), DomError> {
    let mut attempt = 0;
    loop {
        attempt += 1;
        let err = match tokio::time::timeout(PAGE_TIMEOUT, dom.goto(url)).await {
            Ok(Ok(())) => return Ok(()),
            Ok(Err(err)) => err,
            Err(_) => DomError::Navigation(format!(
                "timed out after {}s: {url}",
                PAGE_TIMEOUT.as_secs()
            )),
        };
        if attempt >= NAV_ATTEMPTS {
            return Err(err);
        }
        tracing::warn!(%url, attempt, %err, "navigation failed; retrying");
        tokio::time::sleep(NAV_BACKOFF * attempt).await;
    }
}
