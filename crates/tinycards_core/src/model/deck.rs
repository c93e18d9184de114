//! Deck domain model.
//!
//! # Responsibility
//! - Hold a named, ordered collection of cards plus its visibility settings.
//! - Build cards from plain (front, back) text pairs for tabular import and
//!   flatten them back out for export.
//!
//! # Invariants
//! - Visibility is one of three defined (private, shareable) combinations;
//!   `(false, true)` cannot be represented.
//! - The shareable link is derived from visibility + identifiers and has no
//!   setter.

use crate::error::{ConvertError, ConvertResult};
use crate::model::card::Card;
use serde::{Deserialize, Serialize};

/// Base URL for link-shared decks.
pub const SHAREABLE_LINK_BASE: &str = "https://tiny.cards/decks";

/// Who can see a deck.
///
/// The service models this with two booleans; only three of the four
/// combinations are defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    /// Everyone. `private=false, shareable=false`.
    #[default]
    Public,
    /// People holding the link. `private=true, shareable=true`.
    Shareable,
    /// Only the owner. `private=true, shareable=false`.
    Private,
}

impl Visibility {
    /// Maps the service flag pair to a visibility.
    ///
    /// # Errors
    /// - `InvalidArgument` for `private=false, shareable=true`.
    pub fn from_flags(private: bool, shareable: bool) -> ConvertResult<Self> {
        match (private, shareable) {
            (false, false) => Ok(Self::Public),
            (true, true) => Ok(Self::Shareable),
            (true, false) => Ok(Self::Private),
            (false, true) => Err(ConvertError::InvalidArgument(
                "a public deck cannot be shareable; set private=true for link sharing"
                    .to_string(),
            )),
        }
    }

    pub fn is_private(self) -> bool {
        matches!(self, Self::Shareable | Self::Private)
    }

    pub fn is_shareable(self) -> bool {
        matches!(self, Self::Shareable)
    }

    /// Stable label used in log events.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Shareable => "shareable",
            Self::Private => "private",
        }
    }
}

/// Top-level content unit of the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    /// Server-assigned; `None` until the deck has been created remotely.
    pub id: Option<String>,
    /// Short name. Only known after the service created the deck.
    pub slug: String,
    /// Short unique ID. Only known after the service created the deck.
    pub compact_id: String,
    pub title: String,
    pub description: Option<String>,
    /// Cover image. A local file reference before upload, a URL after.
    pub cover: Option<String>,
    pub cards: Vec<Card>,
    pub visibility: Visibility,
    pub front_language: Option<String>,
    pub back_language: Option<String>,
}

impl Deck {
    /// Creates an empty public deck.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: None,
            slug: String::new(),
            compact_id: String::new(),
            title: title.into(),
            description: None,
            cover: None,
            cards: Vec::new(),
            visibility: Visibility::Public,
            front_language: None,
            back_language: None,
        }
    }

    /// Creates an empty deck from the service's flag pair.
    ///
    /// # Errors
    /// - `InvalidArgument` for the undefined `private=false, shareable=true`.
    pub fn with_flags(
        title: impl Into<String>,
        private: bool,
        shareable: bool,
    ) -> ConvertResult<Self> {
        let mut deck = Self::new(title);
        deck.visibility = Visibility::from_flags(private, shareable)?;
        Ok(deck)
    }

    pub fn is_private(&self) -> bool {
        self.visibility.is_private()
    }

    pub fn is_shareable(&self) -> bool {
        self.visibility.is_shareable()
    }

    /// Link for people-with-the-link decks.
    ///
    /// Empty unless the deck is link-shared and both `compact_id` and `slug`
    /// are known.
    pub fn shareable_link(&self) -> String {
        if self.is_shareable() && !self.compact_id.is_empty() && !self.slug.is_empty() {
            format!("{SHAREABLE_LINK_BASE}/{}/{}", self.compact_id, self.slug)
        } else {
            String::new()
        }
    }

    /// Appends a card built from a (front, back) text pair.
    pub fn add_card<F, B>(&mut self, pair: (F, B))
    where
        F: Into<String>,
        B: Into<String>,
    {
        let (front, back) = pair;
        self.cards.push(Card::from_text_pair(front, back));
    }

    /// Appends a card from an untyped tabular row.
    ///
    /// # Errors
    /// - `InvalidArgument` unless `row` has exactly two cells.
    pub fn add_card_from_row<S: AsRef<str>>(&mut self, row: &[S]) -> ConvertResult<()> {
        match row {
            [front, back] => {
                self.add_card((front.as_ref(), back.as_ref()));
                Ok(())
            }
            _ => Err(ConvertError::InvalidArgument(format!(
                "card row must have exactly 2 cells (front, back), got {}",
                row.len()
            ))),
        }
    }

    /// Bulk import of tabular rows; returns the number of cards added.
    ///
    /// Stops at the first malformed row. Cards from earlier rows stay in the
    /// deck.
    pub fn add_cards<I, R, S>(&mut self, rows: I) -> ConvertResult<usize>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let mut added = 0;
        for (index, row) in rows.into_iter().enumerate() {
            self.add_card_from_row(row.as_ref()).map_err(|err| match err {
                ConvertError::InvalidArgument(message) => {
                    ConvertError::InvalidArgument(format!("row {index}: {message}"))
                }
                other => other,
            })?;
            added += 1;
        }
        Ok(added)
    }

    /// Flattens cards to (front text, back text) pairs for tabular export.
    ///
    /// Uses the first concept of each side.
    pub fn word_pairs(&self) -> ConvertResult<Vec<(String, String)>> {
        self.cards
            .iter()
            .enumerate()
            .map(|(index, card)| -> ConvertResult<(String, String)> {
                let front = card.front.first_text().ok_or_else(|| {
                    ConvertError::mismatch(format!("cards[{index}].front"), "a side with text")
                })?;
                let back = card.back.first_text().ok_or_else(|| {
                    ConvertError::mismatch(format!("cards[{index}].back"), "a side with text")
                })?;
                Ok((front.to_string(), back.to_string()))
            })
            .collect()
    }
}
