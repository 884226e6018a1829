//! Synchronous wrappers for front ends that run their own event loop.

use crate::card::Card;
use crate::error::DeckResult;
use crate::source::DeckSource;

/// Draw a pool on a throwaway current-thread runtime.
///
/// The fetch is the only suspension point in the ritual, so the UI simply
/// waits for it.
pub fn draw_pool<S: DeckSource>(source: &S, pool_size: usize) -> DeckResult<Vec<Card>> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(crate::pool::draw_pool(source, pool_size))
}
