use crate::domain::{
    ids::{IdAllocator, ListId},
    list::{List, ListPatch},
    ordering,
};

/// Owns the lists of one board and their board-level order.
///
/// Lists are kept in creation order; `order` is tracked separately and the
/// two are allowed to diverge after a move.
#[derive(Debug, Clone, Default)]
pub struct ListRepository {
    lists: Vec<List>,
    ids: IdAllocator,
}

impl ListRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new list at the end of the board and returns its id
    pub fn create_list(&mut self, name: impl Into<String>) -> ListId {
        let id = ListId::new(self.ids.allocate());
        let order = self.lists.len();
        self.lists.push(List::new(id, name.into(), order));

        tracing::debug!(list_id = %id, order, "created list");
        id
    }

    /// Merges `patch` into the list.
    ///
    /// A supplied `order` is written without shifting siblings; use
    /// [`move_list`](Self::move_list) to reposition a list.
    pub fn update_list(&mut self, id: ListId, patch: ListPatch) -> bool {
        let Some(list) = self.lists.iter_mut().find(|l| l.id == id) else {
            tracing::debug!(list_id = %id, "update_list: list not found");
            return false;
        };

        list.apply(patch);
        tracing::debug!(list_id = %id, order = list.order, "updated list");
        true
    }

    /// Removes the list and closes the gap it leaves in the board order.
    ///
    /// Remaining lists are renumbered by their current `order`, not by their
    /// place in storage. Cards are not touched here.
    pub fn delete_list(&mut self, id: ListId) -> bool {
        let Some(index) = self.lists.iter().position(|l| l.id == id) else {
            tracing::debug!(list_id = %id, "delete_list: list not found");
            return false;
        };

        self.lists.remove(index);
        let mut scope: Vec<&mut List> = self.lists.iter_mut().collect();
        let renumbered = ordering::renumber(&mut scope);

        tracing::debug!(list_id = %id, renumbered, "deleted list");
        true
    }

    /// Moves a list to `new_order`, shifting the lists in between.
    ///
    /// A request matching the current order is a no-op; otherwise
    /// `new_order` is clamped to the last slot of the board.
    pub fn move_list(&mut self, id: ListId, new_order: usize) -> bool {
        let Some(index) = self.lists.iter().position(|l| l.id == id) else {
            tracing::debug!(list_id = %id, "move_list: list not found");
            return false;
        };

        let old_order = self.lists[index].order;
        if old_order == new_order {
            tracing::trace!(list_id = %id, order = old_order, "move_list: already in place");
            return true;
        }

        let new_order = ordering::clamp_position(new_order, self.lists.len());
        if old_order == new_order {
            tracing::trace!(list_id = %id, order = old_order, "move_list: already in place");
            return true;
        }

        let shifted = ordering::shift_range(self.lists.iter_mut(), old_order, new_order);
        self.lists[index].order = new_order;

        tracing::debug!(list_id = %id, old_order, new_order, shifted, "moved list");
        true
    }

    pub fn get(&self, id: ListId) -> Option<&List> {
        self.lists.iter().find(|l| l.id == id)
    }

    /// Lists sorted by `order` ascending
    pub fn sorted(&self) -> Vec<&List> {
        let mut sorted: Vec<&List> = self.lists.iter().collect();
        sorted.sort_by_key(|l| l.order);
        sorted
    }

    /// Lists in storage (creation) order
    pub fn iter(&self) -> impl Iterator<Item = &List> {
        self.lists.iter()
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// True when list orders are exactly `0..len`
    pub fn is_contiguous(&self) -> bool {
        ordering::is_contiguous(self.lists.iter().map(|l| l.order))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order_of(repo: &ListRepository, id: ListId) -> usize {
        repo.get(id).unwrap().order
    }

    #[test]
    fn test_create_list_appends() {
        let mut repo = ListRepository::new();
        let todo = repo.create_list("Todo");
        let doing = repo.create_list("Doing");

        assert_eq!(todo, ListId::new(1));
        assert_eq!(doing, ListId::new(2));
        assert_eq!(order_of(&repo, todo), 0);
        assert_eq!(order_of(&repo, doing), 1);
        assert!(repo.is_contiguous());
    }

    #[test]
    fn test_ids_are_not_reused() {
        let mut repo = ListRepository::new();
        let first = repo.create_list("A");
        assert!(repo.delete_list(first));

        let second = repo.create_list("B");
        assert_eq!(second, ListId::new(2));
    }

    #[test]
    fn test_update_list() {
        let mut repo = ListRepository::new();
        let id = repo.create_list("Todo");

        assert!(repo.update_list(id, ListPatch::new().with_name("Backlog")));
        assert_eq!(repo.get(id).unwrap().name, "Backlog");

        assert!(repo.update_list(id, ListPatch::new().with_name("")));
        assert_eq!(repo.get(id).unwrap().name, "Backlog");
    }

    #[test]
    fn test_update_list_order_does_not_shift_siblings() {
        let mut repo = ListRepository::new();
        let a = repo.create_list("A");
        let b = repo.create_list("B");

        assert!(repo.update_list(b, ListPatch::new().with_order(0)));
        assert_eq!(order_of(&repo, a), 0);
        assert_eq!(order_of(&repo, b), 0);
        assert!(!repo.is_contiguous());
    }

    #[test]
    fn test_update_missing_list() {
        let mut repo = ListRepository::new();
        assert!(!repo.update_list(ListId::new(5), ListPatch::new().with_name("x")));
    }

    #[test]
    fn test_move_list_down() {
        let mut repo = ListRepository::new();
        let a = repo.create_list("A");
        let b = repo.create_list("B");
        let c = repo.create_list("C");

        assert!(repo.move_list(a, 2));
        assert_eq!(order_of(&repo, b), 0);
        assert_eq!(order_of(&repo, c), 1);
        assert_eq!(order_of(&repo, a), 2);
    }

    #[test]
    fn test_move_list_up() {
        let mut repo = ListRepository::new();
        let a = repo.create_list("A");
        let b = repo.create_list("B");
        let c = repo.create_list("C");

        assert!(repo.move_list(c, 0));
        assert_eq!(order_of(&repo, c), 0);
        assert_eq!(order_of(&repo, a), 1);
        assert_eq!(order_of(&repo, b), 2);
    }

    #[test]
    fn test_move_list_past_the_end_is_clamped() {
        let mut repo = ListRepository::new();
        let a = repo.create_list("A");
        let b = repo.create_list("B");

        assert!(repo.move_list(a, 10));
        assert_eq!(order_of(&repo, a), 1);
        assert_eq!(order_of(&repo, b), 0);
        assert!(repo.is_contiguous());
    }

    #[test]
    fn test_move_list_in_place() {
        let mut repo = ListRepository::new();
        let a = repo.create_list("A");
        let b = repo.create_list("B");

        assert!(repo.move_list(b, 1));
        assert_eq!(order_of(&repo, a), 0);
        assert_eq!(order_of(&repo, b), 1);
    }

    #[test]
    fn test_move_list_to_its_own_out_of_range_order_is_noop() {
        let mut repo = ListRepository::new();
        let a = repo.create_list("A");
        let b = repo.create_list("B");
        assert!(repo.update_list(b, ListPatch::new().with_order(5)));

        assert!(repo.move_list(b, 5));
        assert_eq!(order_of(&repo, a), 0);
        assert_eq!(order_of(&repo, b), 5);
    }

    #[test]
    fn test_move_missing_list() {
        let mut repo = ListRepository::new();
        repo.create_list("A");
        assert!(!repo.move_list(ListId::new(9), 0));
    }

    #[test]
    fn test_delete_renumbers_by_order_not_storage() {
        let mut repo = ListRepository::new();
        let a = repo.create_list("A");
        let b = repo.create_list("B");
        let c = repo.create_list("C");

        // Board order is now C, A, B while storage is still A, B, C
        assert!(repo.move_list(c, 0));
        assert!(repo.delete_list(a));

        assert_eq!(order_of(&repo, c), 0);
        assert_eq!(order_of(&repo, b), 1);
        assert!(repo.is_contiguous());
    }

    #[test]
    fn test_delete_missing_list() {
        let mut repo = ListRepository::new();
        repo.create_list("A");
        assert!(!repo.delete_list(ListId::new(2)));
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn test_sorted_lists() {
        let mut repo = ListRepository::new();
        let a = repo.create_list("A");
        let b = repo.create_list("B");
        repo.move_list(b, 0);

        let sorted: Vec<ListId> = repo.sorted().iter().map(|l| l.id).collect();
        assert_eq!(sorted, vec![b, a]);
    }
}
