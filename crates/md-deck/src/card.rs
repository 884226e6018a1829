//! Card payloads as served by the deck API.

use serde::{Deserialize, Serialize};

use md_core::Suit;

/// One playing card. Only the fields the ritual displays are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Two-character code, e.g. `"QH"` or `"0S"` (ten of spades).
    pub code: String,
    /// Face image URL.
    pub image: String,
    /// Rank name, e.g. `"QUEEN"` or `"7"`.
    pub value: String,
    /// Suit name, e.g. `"HEARTS"`.
    pub suit: String,
}

impl Card {
    /// Human-readable label, e.g. `"QUEEN of HEARTS"`.
    pub fn label(&self) -> String {
        format!("{} of {}", self.value, self.suit)
    }

    /// The categorical attribute fate messages are keyed on.
    pub fn category(&self) -> &str {
        &self.suit
    }

    /// The parsed suit, if the card has a standard one.
    pub fn parsed_suit(&self) -> Option<Suit> {
        Suit::parse(&self.suit)
    }

    /// Short rank for compact layouts: `"A"`, `"10"`, `"K"`, ...
    pub fn short_rank(&self) -> String {
        match self.value.to_uppercase().as_str() {
            "ACE" => "A".to_string(),
            "JACK" => "J".to_string(),
            "QUEEN" => "Q".to_string(),
            "KING" => "K".to_string(),
            other => other.to_string(),
        }
    }

    /// Compact face such as `"Q♥"`; unknown suits show `?`.
    pub fn face(&self) -> String {
        let glyph = self.parsed_suit().map_or('?', Suit::glyph);
        format!("{}{glyph}", self.short_rank())
    }

    /// The reading for this card.
    pub fn fate(&self) -> &'static str {
        md_core::fate_message(self.category())
    }
}

/// Body of a draw request against the deck API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawResponse {
    /// Whether the API fulfilled the request.
    pub success: bool,
    /// Identifier of the shuffled deck.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deck_id: Option<String>,
    /// Drawn cards, in draw order.
    #[serde(default)]
    pub cards: Vec<Card>,
    /// Cards left in the deck.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remaining: Option<u32>,
    /// Error text on failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DrawResponse {
    /// Wrap cards drawn locally in the API's response shape.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            success: true,
            deck_id: None,
            cards,
            remaining: None,
            error: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "success": true,
        "deck_id": "kxozasf3edqu",
        "cards": [
            {
                "code": "6H",
                "image": "https://deckofcardsapi.com/static/img/6H.png",
                "images": {
                    "svg": "https://deckofcardsapi.com/static/img/6H.svg",
                    "png": "https://deckofcardsapi.com/static/img/6H.png"
                },
                "value": "6",
                "suit": "HEARTS"
            },
            {
                "code": "0S",
                "image": "https://deckofcardsapi.com/static/img/0S.png",
                "value": "10",
                "suit": "SPADES"
            }
        ],
        "remaining": 50
    }"#;

    #[test]
    fn parses_api_body() {
        let body: DrawResponse = serde_json::from_str(SAMPLE).unwrap();
        assert!(body.success);
        assert_eq!(body.deck_id.as_deref(), Some("kxozasf3edqu"));
        assert_eq!(body.remaining, Some(50));
        assert_eq!(body.cards.len(), 2);
        assert_eq!(body.cards[0].label(), "6 of HEARTS");
        assert_eq!(body.cards[1].face(), "10♠");
    }

    #[test]
    fn failure_body_without_cards() {
        let body: DrawResponse =
            serde_json::from_str(r#"{"success": false, "error": "Deck not found"}"#).unwrap();
        assert!(!body.success);
        assert!(body.cards.is_empty());
        assert_eq!(body.error.as_deref(), Some("Deck not found"));
    }

    #[test]
    fn fate_keyed_on_suit() {
        let card = Card {
            code: "KD".to_string(),
            image: String::new(),
            value: "KING".to_string(),
            suit: "DIAMONDS".to_string(),
        };
        assert_eq!(card.fate(), Suit::Diamonds.fate());
        assert_eq!(card.face(), "K♦");

        let odd = Card {
            suit: "STARS".to_string(),
            ..card
        };
        assert_eq!(odd.fate(), md_core::fate::UNKNOWN_FATE_MESSAGE);
        assert_eq!(odd.face(), "K?");
    }
}
