//! # Listboard Core
//!
//! Order maintenance for kanban-style boards: lists on a board and cards
//! within each list, with positional indices that are assigned, shifted and
//! renumbered as records are created, deleted and moved.
//!
//! All state lives in a [`Board`] value owned by the caller. Nothing is
//! persisted and no action blocks.

pub mod actor;
pub mod board;
pub mod config;
pub mod domain;
pub mod error;
pub mod repository;

// Re-export commonly used types
pub use actor::{ActorSource, Anonymous, NamedActor, SharedActor};
pub use board::Board;
pub use config::BoardConfig;
pub use domain::{
    card::{Card, CardPatch, CardStatus},
    ids::{CardId, ListId},
    list::{List, ListPatch},
    ordering::TailPlacement,
};
pub use error::{BoardError, Result};
pub use repository::{CardRepository, ListRepository};
