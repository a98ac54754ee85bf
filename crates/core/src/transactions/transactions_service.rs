//! Operations over the transaction collection that span several requests.

use log::{debug, warn};

use super::transactions_model::{Transaction, TransactionFilter};
use super::transactions_traits::TransactionClientTrait;
use crate::errors::Result;

/// Upper bound on pages walked by [`list_all_transactions`].
pub const MAX_TRANSACTION_PAGES: u32 = 500;

/// Every transaction matching `filter`, starting at `filter.page` and
/// following the backend's pages until the last one.
///
/// Aggregations (budget spend, dashboard totals) must see the whole window,
/// so this is what they are fed instead of a single page.
pub async fn list_all_transactions(
    client: &dyn TransactionClientTrait,
    filter: &TransactionFilter,
) -> Result<Vec<Transaction>> {
    let mut request = filter.clone();
    let mut all = Vec::new();

    for _ in 0..MAX_TRANSACTION_PAGES {
        let page = client.list_transactions(&request).await?;
        let received = page.content.len();
        all.extend(page.content);

        let reached_end = received == 0
            || page.last
            || (page.total_pages > 0 && request.page + 1 >= page.total_pages)
            || (received as u64) < u64::from(request.size);
        if reached_end {
            debug!(
                "Fetched {} transactions over {} page(s)",
                all.len(),
                request.page - filter.page + 1
            );
            return Ok(all);
        }
        request.page += 1;
    }

    warn!(
        "Stopped after {} transaction pages; totals may be incomplete",
        MAX_TRANSACTION_PAGES
    );
    Ok(all)
}
