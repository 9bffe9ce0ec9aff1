//! Field extraction over the rendered item blocks of one listing page.

use thiserror::Error;

use crate::dom::{DomError, DomSession};
use crate::formats::Bike;
use crate::labels::{self, FieldSlot};

pub const BIKE_BOX_SELECTOR: &str = ".bike-box-item";
const TITLE_SELECTOR: &str = ".title-link";
const ATTR_LIST_SELECTOR: &str = "ul.attr-list";
const ATTR_ITEM_SELECTOR: &str = "li";

/// A DOM query failed while walking the page. Aborts the whole page:
/// extraction is fail-fast at page granularity, never item granularity.
#[derive(Debug, Error)]
#[error("page extraction failed: {0}")]
pub struct ExtractError(#[from] DomError);

/// Extract one [`Bike`] per item block on the current page.
///
/// Missing fields degrade to empty strings; a block with nothing but a
/// title (or not even that) still yields a record, because downstream
/// consumers treat blanks as "not reported" rather than filtering rows.
pub async fn extract_page<D: DomSession>(dom: &D) -> Result<Vec<Bike>, ExtractError> {
    let blocks = dom.query_all(None, BIKE_BOX_SELECTOR).await?;

    let mut bikes = Vec::with_capacity(blocks.len());
    for block in &blocks {
        bikes.push(extract_block(dom, block).await?);
    }

    Ok(bikes)
}

async fn extract_block<D: DomSession>(dom: &D, block: &D::Node) -> Result<Bike, ExtractError> {
    let mut bike = Bike {
        title: extract_title(dom, block).await?,
        ..Bike::default()
    };

    for group in dom.query_all(Some(block), ATTR_LIST_SELECTOR).await? {
        let items = dom.query_all(Some(&group), ATTR_ITEM_SELECTOR).await?;
        if items.len() < 2 {
            // a label without its value line carries nothing usable
            continue;
        }

        let mut lines = Vec::with_capacity(items.len());
        for item in &items {
            lines.push(dom.text_content(item).await?);
        }

        // Label and value are not separately addressable in the markup;
        // join the group's lines and let the label classifier split them.
        let combined = lines
            .iter()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        match labels::classify(&combined) {
            (FieldSlot::Serial, value) => bike.serial = value,
            (FieldSlot::Colors, value) => bike.colors = value,
            (FieldSlot::DateStolen, value) => bike.date_stolen = value,
            (FieldSlot::Location, value) => bike.location = value,
            (FieldSlot::Unknown, _) => {}
        }
    }

    Ok(bike)
}

async fn extract_title<D: DomSession>(dom: &D, block: &D::Node) -> Result<String, ExtractError> {
    let links = dom.query_all(Some(block), TITLE_SELECTOR).await?;
    let Some(link) = links.first() else {
        tracing::debug!("item block has no title link");
        return Ok(String::new());
    };

    let raw = dom.text_content(link).await?;
    Ok(labels::collapse_lines(&raw))
}
