use crate::model::AppEntry;

/// One page's ordered app list. Slot index is simply the position in
/// the list and is recomputed by every structural change. Callers relay
/// the minimal change (insert/remove/move) to the view layer; a full
/// refresh is only issued for `set_apps`, never during an active drag.
pub struct PageGrid {
    apps: Vec<AppEntry>,
    dragging: bool,
}

impl PageGrid {
    pub fn new() -> Self {
        Self {
            apps: Vec::new(),
            dragging: false,
        }
    }

    pub fn len(&self) -> usize {
        self.apps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }

    pub fn apps(&self) -> &[AppEntry] {
        &self.apps
    }

    pub fn app_at(&self, slot: usize) -> Option<&AppEntry> {
        self.apps.get(slot)
    }

    /// While true, taps and long-presses on this page are ignored.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn set_dragging(&mut self, dragging: bool) {
        self.dragging = dragging;
    }

    /// Walks the item one step at a time so everything between `from`
    /// and `to` shifts by exactly one slot, matching a card dragged
    /// across its neighbours. Out-of-range indices are a no-op.
    pub fn move_item(&mut self, from: usize, to: usize) -> bool {
        if from >= self.apps.len() || to >= self.apps.len() {
            return false;
        }
        self.dragging = true;
        if from < to {
            for i in from..to {
                self.apps.swap(i, i + 1);
            }
        } else {
            for i in ((to + 1)..=from).rev() {
                self.apps.swap(i, i - 1);
            }
        }
        true
    }

    /// Inserts at `slot` clamped to the current length; returns the
    /// slot actually used.
    pub fn insert_app(&mut self, app: AppEntry, slot: usize) -> usize {
        let slot = slot.min(self.apps.len());
        self.apps.insert(slot, app);
        slot
    }

    pub fn remove_app_at(&mut self, slot: usize) -> Option<AppEntry> {
        if slot < self.apps.len() {
            Some(self.apps.remove(slot))
        } else {
            None
        }
    }

    pub fn set_apps(&mut self, apps: Vec<AppEntry>) {
        self.apps = apps;
    }
}

impl Default for PageGrid {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(names: &[&str]) -> PageGrid {
        let mut grid = PageGrid::new();
        grid.set_apps(
            names
                .iter()
                .map(|name| AppEntry::new(format!("com.{}", name.to_lowercase()), name.to_string()))
                .collect(),
        );
        grid
    }

    fn names(grid: &PageGrid) -> Vec<&str> {
        grid.apps().iter().map(|app| app.name.as_str()).collect()
    }

    #[test]
    fn move_rotates_rather_than_swaps() {
        let mut grid = grid(&["A", "B", "C", "D", "E"]);
        assert!(grid.move_item(0, 3));
        assert_eq!(names(&grid), vec!["B", "C", "D", "A", "E"]);
    }

    #[test]
    fn move_backwards_rotates_the_other_way() {
        let mut grid = grid(&["A", "B", "C", "D", "E"]);
        assert!(grid.move_item(3, 0));
        assert_eq!(names(&grid), vec!["D", "A", "B", "C", "E"]);
    }

    #[test]
    fn move_and_reverse_move_is_identity_here() {
        // Not an identity in general, but for a single item moved out
        // and straight back it is.
        let mut grid = grid(&["A", "B", "C", "D", "E"]);
        grid.move_item(0, 3);
        grid.move_item(3, 0);
        assert_eq!(names(&grid), vec!["A", "B", "C", "D", "E"]);
    }

    #[test]
    fn out_of_range_move_is_a_no_op() {
        let mut grid = grid(&["A", "B"]);
        assert!(!grid.move_item(0, 2));
        assert!(!grid.move_item(5, 0));
        assert_eq!(names(&grid), vec!["A", "B"]);
    }

    #[test]
    fn move_marks_the_page_dragging() {
        let mut grid = grid(&["A", "B"]);
        assert!(!grid.is_dragging());
        grid.move_item(0, 1);
        assert!(grid.is_dragging());
        grid.set_dragging(false);
        assert!(!grid.is_dragging());
    }

    #[test]
    fn insert_past_end_lands_at_end() {
        let mut grid = grid(&["A", "B"]);
        let slot = grid.insert_app(AppEntry::new("com.c", "C"), 99);
        assert_eq!(slot, 2);
        assert_eq!(names(&grid), vec!["A", "B", "C"]);
    }

    #[test]
    fn insert_at_zero_lands_first() {
        let mut grid = grid(&["A", "B"]);
        let slot = grid.insert_app(AppEntry::new("com.c", "C"), 0);
        assert_eq!(slot, 0);
        assert_eq!(names(&grid), vec!["C", "A", "B"]);
    }

    #[test]
    fn remove_returns_the_app_or_none() {
        let mut grid = grid(&["A", "B"]);
        let removed = grid.remove_app_at(0).expect("in range");
        assert_eq!(removed.name, "A");
        assert!(grid.remove_app_at(5).is_none());
        assert_eq!(names(&grid), vec!["B"]);
    }
}
