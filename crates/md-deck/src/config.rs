//! Configuration for remote card sources.

use std::time::Duration;

/// Public shuffled-deck API.
pub const DEFAULT_API_URL: &str = "https://deckofcardsapi.com";

/// Cards requested per draw (a full deck).
pub const DEFAULT_DRAW_COUNT: usize = 52;

/// Configuration for [`crate::HttpDeckSource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckConfig {
    /// Base URL of the deck API, without a trailing slash.
    pub api_url: String,
    /// Number of cards to draw from a fresh deck.
    pub draw_count: usize,
    /// Whole-request timeout.
    pub timeout: Duration,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            draw_count: DEFAULT_DRAW_COUNT,
            timeout: Duration::from_secs(10),
        }
    }
}

impl DeckConfig {
    /// Set the API base URL (a trailing slash is dropped).
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the number of cards to draw (clamped to 1-52).
    pub fn with_draw_count(mut self, count: usize) -> Self {
        self.draw_count = count.clamp(1, 52);
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Full URL of the "new shuffled deck, draw N" endpoint.
    pub fn draw_url(&self) -> String {
        format!("{}/api/deck/new/draw/?count={}", self.api_url, self.draw_count)
    }
}
