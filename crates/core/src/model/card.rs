use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::CardIndex;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardError {
    #[error("card term cannot be empty")]
    EmptyTerm,

    #[error("card definition cannot be empty")]
    EmptyDefinition,
}

//
// ─── CARD ──────────────────────────────────────────────────────────────────────
//

/// A single term/definition pair.
///
/// Both sides are guaranteed to contain non-whitespace text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCard")]
pub struct Card {
    term: String,
    definition: String,
}

impl Card {
    /// Build a card from its two sides.
    ///
    /// # Errors
    ///
    /// Returns `CardError::EmptyTerm` or `CardError::EmptyDefinition` when a side
    /// is blank.
    pub fn new(term: impl Into<String>, definition: impl Into<String>) -> Result<Self, CardError> {
        let term = term.into();
        let definition = definition.into();
        if term.trim().is_empty() {
            return Err(CardError::EmptyTerm);
        }
        if definition.trim().is_empty() {
            return Err(CardError::EmptyDefinition);
        }
        Ok(Self { term, definition })
    }

    #[must_use]
    pub fn term(&self) -> &str {
        &self.term
    }

    #[must_use]
    pub fn definition(&self) -> &str {
        &self.definition
    }
}

#[derive(Deserialize)]
struct RawCard {
    #[serde(default)]
    term: String,
    #[serde(default)]
    definition: String,
}

impl TryFrom<RawCard> for Card {
    type Error = CardError;

    fn try_from(raw: RawCard) -> Result<Self, Self::Error> {
        Card::new(raw.term, raw.definition)
    }
}

//
// ─── CARD SET ──────────────────────────────────────────────────────────────────
//

/// Ordered cards handed to an engine for one session.
///
/// The title is carried for display only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawCardSet")]
pub struct CardSet {
    title: String,
    cards: Vec<Card>,
}

impl CardSet {
    #[must_use]
    pub fn new(title: impl Into<String>, cards: Vec<Card>) -> Self {
        Self {
            title: title.into(),
            cards,
        }
    }

    /// Build a set from raw pairs, skipping any pair with a blank side.
    pub fn from_pairs<I, T, D>(title: impl Into<String>, pairs: I) -> Self
    where
        I: IntoIterator<Item = (T, D)>,
        T: Into<String>,
        D: Into<String>,
    {
        let cards = pairs
            .into_iter()
            .enumerate()
            .filter_map(|(position, (term, definition))| {
                match Card::new(term, definition) {
                    Ok(card) => Some(card),
                    Err(err) => {
                        tracing::warn!(position, error = %err, "skipping malformed card");
                        None
                    }
                }
            })
            .collect();
        Self::new(title, cards)
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: CardIndex) -> Option<&Card> {
        self.cards.get(index.value())
    }

    /// All valid indices, in set order.
    pub fn indices(&self) -> impl Iterator<Item = CardIndex> + '_ {
        (0..self.cards.len()).map(CardIndex::new)
    }
}

#[derive(Deserialize)]
struct RawCardSet {
    #[serde(default)]
    title: String,
    #[serde(default)]
    cards: Vec<RawCard>,
}

impl From<RawCardSet> for CardSet {
    fn from(raw: RawCardSet) -> Self {
        CardSet::from_pairs(
            raw.title,
            raw.cards.into_iter().map(|card| (card.term, card.definition)),
        )
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
