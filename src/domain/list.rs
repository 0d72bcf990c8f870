use serde::{Deserialize, Serialize};

use crate::domain::{ids::ListId, ordering::Positioned};

/// A column of cards on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
    pub id: ListId,
    pub name: String,
    pub order: usize,
}

impl List {
    pub fn new(id: ListId, name: String, order: usize) -> Self {
        Self { id, name, order }
    }

    /// Merges a partial update into this list.
    ///
    /// An empty name keeps the current one. `order` is applied whenever it
    /// is present, including `Some(0)`, and is written as-is: siblings are not
    /// shifted.
    pub fn apply(&mut self, patch: ListPatch) {
        if let Some(name) = patch.name.filter(|n| !n.is_empty()) {
            self.name = name;
        }
        if let Some(order) = patch.order {
            self.order = order;
        }
    }
}

impl Positioned for List {
    fn position(&self) -> usize {
        self.order
    }

    fn set_position(&mut self, position: usize) {
        self.order = position;
    }
}

/// Partial update for a list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<usize>,
}

impl ListPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_order(mut self, order: usize) -> Self {
        self.order = Some(order);
        self
    }
}
