//! Drawing the working pool for a ritual.

use tracing::{info, warn};

use crate::card::Card;
use crate::error::DeckResult;
use crate::source::DeckSource;

/// Draw from `source` and keep the first `pool_size` cards.
///
/// A short draw is returned as-is with a warning; the ritual tolerates it.
pub async fn draw_pool<S: DeckSource>(source: &S, pool_size: usize) -> DeckResult<Vec<Card>> {
    let mut cards = source.draw().await?;
    if cards.len() < pool_size {
        warn!(
            source = %source.describe(),
            drawn = cards.len(),
            pool_size,
            "source returned fewer cards than the pool needs"
        );
    }
    cards.truncate(pool_size);
    info!(source = %source.describe(), cards = cards.len(), "card pool drawn");
    Ok(cards)
}
