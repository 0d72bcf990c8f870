use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::{fmt, str::FromStr};

use crate::domain::{
    ids::{CardId, ListId},
    ordering::Positioned,
};
use crate::error::BoardError;

/// Workflow status of a card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CardStatus {
    #[default]
    Todo,
    InProgress,
    Done,
}

impl CardStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in-progress",
            Self::Done => "done",
        }
    }
}

impl fmt::Display for CardStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CardStatus {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "todo" => Ok(Self::Todo),
            "in-progress" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            _ => Err(BoardError::InvalidStatus(s.to_string())),
        }
    }
}

/// A card placed in one list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub list_id: ListId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: CardStatus,
    #[serde(default)]
    pub deadline: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: String,
    pub order: usize,
}

impl Card {
    /// Creates a `todo` card with both timestamps set to now
    pub fn new(
        id: CardId,
        list_id: ListId,
        title: String,
        created_by: String,
        order: usize,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            list_id,
            title,
            description: None,
            status: CardStatus::Todo,
            deadline: None,
            created_at: now,
            updated_at: now,
            created_by,
            order,
        }
    }

    /// Refreshes `updated_at`
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Merges a partial update into this card.
    ///
    /// An empty title or a zero list id keeps the current value.
    /// `description` and `deadline` are replaced whenever the patch carries
    /// them, so an explicit `None` clears the field. `created_at`,
    /// `created_by` and `order` are never touched.
    pub fn apply(&mut self, patch: CardPatch) {
        if let Some(title) = patch.title.filter(|t| !t.is_empty()) {
            self.title = title;
        }
        if let Some(list_id) = patch.list_id.filter(|id| id.get() != 0) {
            self.list_id = list_id;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(deadline) = patch.deadline {
            self.deadline = deadline;
        }
        self.touch();
    }
}

impl Positioned for Card {
    fn position(&self) -> usize {
        self.order
    }

    fn set_position(&mut self, position: usize) {
        self.order = position;
    }
}

/// Partial update for a card.
///
/// The doubly optional fields distinguish "not supplied" (`None`) from
/// "supplied as empty" (`Some(None)`). When deserialized, a missing key maps
/// to the former and an explicit `null` to the latter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<CardStatus>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub deadline: Option<Option<DateTime<Utc>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_id: Option<ListId>,
}

impl CardPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = Some(description);
        self
    }

    pub fn with_status(mut self, status: CardStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_deadline(mut self, deadline: Option<DateTime<Utc>>) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn with_list(mut self, list_id: ListId) -> Self {
        self.list_id = Some(list_id);
        self
    }
}

// Invoked only when the key is present, so `null` becomes `Some(None)`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
