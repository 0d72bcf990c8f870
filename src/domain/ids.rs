use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::error::BoardError;

/// Identifier of a list on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListId(u64);

impl ListId {
    /// Wraps a raw list number
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw list number
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl FromStr for ListId {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<u64>() {
            Ok(value) if value > 0 => Ok(Self(value)),
            _ => Err(BoardError::InvalidListId(s.to_string())),
        }
    }
}

impl fmt::Display for ListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a card, unique across the whole board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(u64);

impl CardId {
    /// Wraps a raw card number
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw card number
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl FromStr for CardId {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<u64>() {
            Ok(value) if value > 0 => Ok(Self(value)),
            _ => Err(BoardError::InvalidCardId(s.to_string())),
        }
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monotonic id counter. Numbers are handed out starting at 1 and are never
/// reused, even after the record that held them is deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Returns the next number and advances the counter
    pub fn allocate(&mut self) -> u64 {
        let value = self.next;
        self.next += 1;
        value
    }

    /// The number the next call to `allocate` will return
    pub fn peek(&self) -> u64 {
        self.next
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}
