//! Static content records consumed by the motion components.
//!
//! Records arrive as JSON from the host page. Loading them is the host's
//! business; this crate only parses and validates.

use std::collections::BTreeSet;

use serde::{Deserialize, Deserializer, Serialize};

mod defaults;
pub use defaults::default_cards;

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("content is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("card deck is empty")]
    Empty,
    #[error("duplicate card id `{0}`")]
    DuplicateId(String),
    #[error("card `{id}` has a non-finite rotation")]
    InvalidRotation { id: String },
    #[error("card `{id}` is missing `{field}`")]
    MissingField { id: String, field: &'static str },
}

/// Card payload as authored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardRecord {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    #[serde(alias = "title")]
    pub client_name: String,
    #[serde(default)]
    pub project_title: String,
    #[serde(default)]
    pub years: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub image: String,
    #[serde(default)]
    pub image_alt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default = "default_theme_color", alias = "theme")]
    pub theme_color: String,
    /// Authored resting tilt, degrees.
    #[serde(default)]
    pub rotation: f64,
}

fn default_theme_color() -> String {
    "#8082f8".to_string()
}

fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Int(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Int(n) => n.to_string(),
    })
}

/// Parses and validates a JSON array of card records.
pub fn parse_cards(json: &str) -> Result<Vec<CardRecord>, ContentError> {
    let cards: Vec<CardRecord> = serde_json::from_str(json)?;
    validate_cards(&cards)?;
    Ok(cards)
}

pub fn validate_cards(cards: &[CardRecord]) -> Result<(), ContentError> {
    if cards.is_empty() {
        return Err(ContentError::Empty);
    }
    let mut seen = BTreeSet::new();
    for card in cards {
        if card.id.trim().is_empty() {
            return Err(ContentError::MissingField {
                id: card.client_name.clone(),
                field: "id",
            });
        }
        if !seen.insert(card.id.as_str()) {
            return Err(ContentError::DuplicateId(card.id.clone()));
        }
        if !card.rotation.is_finite() {
            return Err(ContentError::InvalidRotation {
                id: card.id.clone(),
            });
        }
        if card.image.trim().is_empty() {
            return Err(ContentError::MissingField {
                id: card.id.clone(),
                field: "image",
            });
        }
    }
    Ok(())
}
