use std::{fmt, sync::Arc};

use crate::{
    actor::{resolve_actor, ActorSource},
    config::BoardConfig,
    domain::{
        card::{Card, CardPatch},
        ids::{CardId, IdAllocator, ListId},
        ordering,
    },
};

/// Owns every card on the board and their positions within each list.
///
/// Card ids are unique across the whole board. Positions are contiguous per
/// list except right after an append into an empty list under
/// [`TailPlacement::Legacy`](crate::domain::TailPlacement::Legacy), and
/// after `delete_card` or `move_card`, which leave the affected list for
/// [`reorder_cards_in_list`](Self::reorder_cards_in_list) to close up.
#[derive(Clone)]
pub struct CardRepository {
    cards: Vec<Card>,
    ids: IdAllocator,
    config: BoardConfig,
    actor: Arc<dyn ActorSource>,
}

impl fmt::Debug for CardRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardRepository")
            .field("cards", &self.cards)
            .field("ids", &self.ids)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl CardRepository {
    pub fn new(config: BoardConfig, actor: Arc<dyn ActorSource>) -> Self {
        Self {
            cards: Vec::new(),
            ids: IdAllocator::new(),
            config,
            actor,
        }
    }

    fn index_of(&self, id: CardId) -> Option<usize> {
        self.cards.iter().position(|c| c.id == id)
    }

    fn orders_in(&self, list_id: ListId) -> impl Iterator<Item = usize> + '_ {
        self.cards
            .iter()
            .filter(move |c| c.list_id == list_id)
            .map(|c| c.order)
    }

    /// Appends a new card to the tail of `list_id` and returns its id.
    ///
    /// The creator is the currently signed-in actor, or the configured
    /// fallback name when nobody is.
    pub fn create_card(&mut self, list_id: ListId, title: impl Into<String>) -> CardId {
        let id = CardId::new(self.ids.allocate());
        let order =
            ordering::tail_position(self.orders_in(list_id), self.config.tail_placement);
        let created_by = resolve_actor(&*self.actor, &self.config.unknown_actor);

        tracing::debug!(
            card_id = %id,
            list_id = %list_id,
            order,
            created_by = %created_by,
            "created card"
        );
        self.cards
            .push(Card::new(id, list_id, title.into(), created_by, order));
        id
    }

    /// Merges `patch` into the card and refreshes `updated_at`.
    ///
    /// Changing `list_id` here does not reposition the card; use
    /// [`move_card`](Self::move_card) for that.
    pub fn update_card(&mut self, id: CardId, patch: CardPatch) -> bool {
        let Some(card) = self.cards.iter_mut().find(|c| c.id == id) else {
            tracing::debug!(card_id = %id, "update_card: card not found");
            return false;
        };

        card.apply(patch);
        tracing::debug!(card_id = %id, "updated card");
        true
    }

    /// Removes the card. Siblings keep their positions.
    pub fn delete_card(&mut self, id: CardId) -> bool {
        let Some(index) = self.index_of(id) else {
            tracing::debug!(card_id = %id, "delete_card: card not found");
            return false;
        };

        let card = self.cards.remove(index);
        tracing::debug!(
            card_id = %id,
            list_id = %card.list_id,
            order = card.order,
            "deleted card"
        );
        true
    }

    /// Moves the card to the tail of another list and renumbers the list it
    /// left. The destination list is not renumbered.
    pub fn move_card(&mut self, card_id: CardId, new_list_id: ListId) -> bool {
        let Some(index) = self.index_of(card_id) else {
            tracing::debug!(card_id = %card_id, "move_card: card not found");
            return false;
        };

        let old_list_id = self.cards[index].list_id;
        if old_list_id == new_list_id {
            tracing::trace!(
                card_id = %card_id,
                list_id = %old_list_id,
                "move_card: already in list"
            );
            return true;
        }

        let order =
            ordering::tail_position(self.orders_in(new_list_id), self.config.tail_placement);
        let card = &mut self.cards[index];
        card.list_id = new_list_id;
        card.order = order;
        card.touch();

        tracing::debug!(
            card_id = %card_id,
            from = %old_list_id,
            to = %new_list_id,
            order,
            "moved card between lists"
        );
        self.reorder_cards_in_list(old_list_id)
    }

    /// Moves the card to `new_order` within its own list, shifting the cards
    /// in between. A request matching the current order is a no-op;
    /// otherwise `new_order` is clamped to the last slot of the list.
    pub fn move_card_in_list(&mut self, card_id: CardId, new_order: usize) -> bool {
        let Some(index) = self.index_of(card_id) else {
            tracing::debug!(card_id = %card_id, "move_card_in_list: card not found");
            return false;
        };

        let list_id = self.cards[index].list_id;
        let old_order = self.cards[index].order;
        if old_order == new_order {
            tracing::trace!(
                card_id = %card_id,
                order = old_order,
                "move_card_in_list: already in place"
            );
            return true;
        }

        let new_order = ordering::clamp_position(new_order, self.orders_in(list_id).count());
        if old_order == new_order {
            tracing::trace!(
                card_id = %card_id,
                order = old_order,
                "move_card_in_list: already in place"
            );
            return true;
        }

        let siblings = self
            .cards
            .iter_mut()
            .filter(|c| c.list_id == list_id && c.id != card_id);
        let shifted = ordering::shift_range(siblings, old_order, new_order);

        let card = &mut self.cards[index];
        card.order = new_order;
        card.touch();

        tracing::debug!(
            card_id = %card_id,
            list_id = %list_id,
            old_order,
            new_order,
            shifted,
            "moved card within list"
        );
        true
    }

    /// Renumbers the cards of `list_id` to `0..count` following their
    /// current order. Always succeeds.
    pub fn reorder_cards_in_list(&mut self, list_id: ListId) -> bool {
        let mut scope: Vec<&mut Card> = self
            .cards
            .iter_mut()
            .filter(|c| c.list_id == list_id)
            .collect();
        let renumbered = ordering::renumber(&mut scope);

        if renumbered > 0 {
            tracing::debug!(list_id = %list_id, renumbered, "reordered cards in list");
        }
        true
    }

    /// Drops every card of `list_id` and returns how many were removed
    pub fn remove_cards_in_list(&mut self, list_id: ListId) -> usize {
        let before = self.cards.len();
        self.cards.retain(|c| c.list_id != list_id);
        before - self.cards.len()
    }

    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    /// Cards of `list_id` in storage (creation) order
    pub fn in_list(&self, list_id: ListId) -> Vec<&Card> {
        self.cards.iter().filter(|c| c.list_id == list_id).collect()
    }

    /// Cards of `list_id` sorted by `order` ascending
    pub fn sorted_in_list(&self, list_id: ListId) -> Vec<&Card> {
        let mut cards = self.in_list(list_id);
        cards.sort_by_key(|c| c.order);
        cards
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// True when the orders of `list_id`'s cards are exactly `0..count`
    pub fn is_contiguous(&self, list_id: ListId) -> bool {
        ordering::is_contiguous(self.orders_in(list_id))
    }
}
