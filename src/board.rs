use std::sync::Arc;

use crate::{
    actor::{ActorSource, Anonymous},
    config::BoardConfig,
    domain::{Card, CardId, CardPatch, List, ListId, ListPatch},
    repository::{CardRepository, ListRepository},
};

/// One board session: the lists, their cards, and the settings they share.
///
/// Every action runs to completion before returning and reports failure
/// (an unknown id) through its return value, leaving state untouched.
#[derive(Debug, Clone)]
pub struct Board {
    config: BoardConfig,
    lists: ListRepository,
    cards: CardRepository,
}

impl Board {
    pub fn new(config: BoardConfig, actor: Arc<dyn ActorSource>) -> Self {
        Self {
            cards: CardRepository::new(config.clone(), actor),
            lists: ListRepository::new(),
            config,
        }
    }

    /// Board with default settings reading the actor from `actor`
    pub fn with_actor(actor: impl ActorSource + 'static) -> Self {
        Self::new(BoardConfig::default(), Arc::new(actor))
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn lists(&self) -> &ListRepository {
        &self.lists
    }

    pub fn cards(&self) -> &CardRepository {
        &self.cards
    }

    pub fn create_list(&mut self, name: impl Into<String>) -> ListId {
        self.lists.create_list(name)
    }

    pub fn update_list(&mut self, id: ListId, patch: ListPatch) -> bool {
        self.lists.update_list(id, patch)
    }

    /// Deletes the list together with all of its cards
    pub fn delete_list(&mut self, id: ListId) -> bool {
        if !self.lists.delete_list(id) {
            return false;
        }

        let removed = self.cards.remove_cards_in_list(id);
        tracing::debug!(list_id = %id, removed_cards = removed, "cascaded list deletion");
        true
    }

    pub fn move_list(&mut self, id: ListId, new_order: usize) -> bool {
        self.lists.move_list(id, new_order)
    }

    pub fn create_card(&mut self, list_id: ListId, title: impl Into<String>) -> CardId {
        self.cards.create_card(list_id, title)
    }

    pub fn update_card(&mut self, id: CardId, patch: CardPatch) -> bool {
        self.cards.update_card(id, patch)
    }

    pub fn delete_card(&mut self, id: CardId) -> bool {
        self.cards.delete_card(id)
    }

    pub fn move_card(&mut self, card_id: CardId, new_list_id: ListId) -> bool {
        self.cards.move_card(card_id, new_list_id)
    }

    pub fn move_card_in_list(&mut self, card_id: CardId, new_order: usize) -> bool {
        self.cards.move_card_in_list(card_id, new_order)
    }

    pub fn reorder_cards_in_list(&mut self, list_id: ListId) -> bool {
        self.cards.reorder_cards_in_list(list_id)
    }

    pub fn list(&self, id: ListId) -> Option<&List> {
        self.lists.get(id)
    }

    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id)
    }

    /// Cards of a list in storage order
    pub fn cards_in_list(&self, list_id: ListId) -> Vec<&Card> {
        self.cards.in_list(list_id)
    }

    /// Cards of a list sorted by `order`
    pub fn sorted_cards_in_list(&self, list_id: ListId) -> Vec<&Card> {
        self.cards.sorted_in_list(list_id)
    }

    /// Lists sorted by `order`
    pub fn sorted_lists(&self) -> Vec<&List> {
        self.lists.sorted()
    }

    pub fn list_count(&self) -> usize {
        self.lists.len()
    }

    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    pub fn is_list_scope_contiguous(&self) -> bool {
        self.lists.is_contiguous()
    }

    pub fn is_card_scope_contiguous(&self, list_id: ListId) -> bool {
        self.cards.is_contiguous(list_id)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::with_actor(Anonymous)
    }
}
