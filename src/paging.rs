use log::info;

use crate::error::Result;
use crate::gateway::{Gateway, Resource};
use crate::query::QueryOptions;
use crate::reconcile::add_to_collection_if_missing;

/// Page cap for [`load_all`], so a misbehaving server can't keep us looping.
pub const MAX_PAGES: u32 = 100;

/// Walks the list endpoint page by page and merges everything it sees.
///
/// Stops on a short page, on a page that brings nothing new (a backend that
/// ignores paging hands out the same records every time) or after
/// [`MAX_PAGES`].
pub async fn load_all<T: Resource>(gateway: &Gateway<T>, page_size: u32) -> Result<Vec<T>> {
    let mut records = Vec::new();

    for page in 0..MAX_PAGES {
        let options = QueryOptions::new().page(page).size(page_size).sort("id,asc");
        let batch = gateway.query(&options).await?;
        let fetched = batch.len();

        let known = records.len();
        records = add_to_collection_if_missing(records, batch.into_iter().map(Some));
        info!(
            "{}: page {} brought {} records, {} new",
            T::ENTITY_NAME,
            page,
            fetched,
            records.len() - known
        );

        if records.len() == known || fetched < page_size as usize {
            break;
        }
    }

    Ok(records)
}
