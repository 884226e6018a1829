//! The remote shuffled-deck API source.

use tracing::{debug, warn};

use crate::card::{Card, DrawResponse};
use crate::config::DeckConfig;
use crate::error::{DeckError, DeckResult};
use crate::source::DeckSource;

/// Draws a freshly shuffled deck from the deck API with one GET request.
///
/// There is no retry: a failed draw surfaces as
/// [`DeckError::ItemSourceUnavailable`] and the caller decides what to do.
#[derive(Debug, Clone)]
pub struct HttpDeckSource {
    client: reqwest::Client,
    config: DeckConfig,
}

impl HttpDeckSource {
    /// Build a source with its own HTTP client.
    pub fn new(config: DeckConfig) -> DeckResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| DeckError::unavailable(&config.api_url, e))?;
        Ok(Self { client, config })
    }

    /// Get the configuration.
    pub fn config(&self) -> &DeckConfig {
        &self.config
    }
}

impl DeckSource for HttpDeckSource {
    async fn draw(&self) -> DeckResult<Vec<Card>> {
        let url = self.config.draw_url();
        debug!(%url, "drawing shuffled deck");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| DeckError::unavailable(&url, e))?;

        let status = response.status();
        if !status.is_success() {
            warn!(%url, %status, "deck API returned an error status");
            return Err(DeckError::unavailable(&url, format!("HTTP {status}")));
        }

        let body: DrawResponse = response
            .json()
            .await
            .map_err(|e| DeckError::unavailable(&url, e))?;

        if !body.success {
            let reason = body
                .error
                .unwrap_or_else(|| "deck API reported failure".to_string());
            warn!(%url, %reason, "deck API refused the draw");
            return Err(DeckError::unavailable(&url, reason));
        }

        debug!(cards = body.cards.len(), deck_id = ?body.deck_id, "deck drawn");
        Ok(body.cards)
    }

    fn describe(&self) -> String {
        self.config.api_url.clone()
    }
}

#[cfg(test)]
mod integration_tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn card_json(code: &str, value: &str, suit: &str) -> serde_json::Value {
        serde_json::json!({
            "code": code,
            "image": format!("https://deckofcardsapi.com/static/img/{code}.png"),
            "value": value,
            "suit": suit,
        })
    }

    fn source_for(server: &MockServer) -> HttpDeckSource {
        HttpDeckSource::new(DeckConfig::default().with_api_url(server.uri())).unwrap()
    }

    #[tokio::test]
    async fn draws_cards_in_order() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/deck/new/draw/"))
            .and(query_param("count", "52"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true,
                "deck_id": "abc123",
                "cards": [
                    card_json("AS", "ACE", "SPADES"),
                    card_json("7H", "7", "HEARTS"),
                    card_json("QC", "QUEEN", "CLUBS"),
                ],
                "remaining": 49,
            })))
            .expect(1)
            .mount(&server)
            .await;

        let cards = source_for(&server).draw().await.unwrap();
        let labels: Vec<String> = cards.iter().map(Card::label).collect();
        assert_eq!(labels, vec!["ACE of SPADES", "7 of HEARTS", "QUEEN of CLUBS"]);
    }

    #[tokio::test]
    async fn server_error_is_unavailable() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .expect(1)
            .mount(&server)
            .await;

        let err = source_for(&server).draw().await.unwrap_err();
        assert!(err.is_unavailable());
        assert!(err.to_string().contains("503"));
    }

    #[tokio::test]
    async fn refused_draw_is_unavailable() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": false,
                "error": "Not enough cards remaining",
            })))
            .mount(&server)
            .await;

        let err = source_for(&server).draw().await.unwrap_err();
        assert!(err.is_unavailable());
        assert!(err.to_string().contains("Not enough cards remaining"));
    }

    #[tokio::test]
    async fn malformed_body_is_unavailable() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = source_for(&server).draw().await.unwrap_err();
        assert!(err.is_unavailable());
    }

    #[tokio::test]
    async fn unreachable_host_is_unavailable() {
        // Nothing listens on port 9 (discard) in the test environment.
        let source =
            HttpDeckSource::new(DeckConfig::default().with_api_url("http://127.0.0.1:9")).unwrap();
        let err = source.draw().await.unwrap_err();
        assert!(err.is_unavailable());
    }
}
