use crate::config::RedoPolicy;
use crate::item::Item;

/// Committed drawing content plus the undo buffer used for redo.
///
/// `items` is in insertion order, which is also the z-order.
#[derive(Debug, Clone, Default)]
pub struct History {
    /// Items currently on the canvas
    items: Vec<Item>,
    /// Items removed by undo, most recent last
    undone: Vec<Item>,
    policy: RedoPolicy,
}

impl History {
    /// Creates a new empty history
    pub fn new(policy: RedoPolicy) -> Self {
        Self {
            items: Vec::new(),
            undone: Vec::new(),
            policy,
        }
    }

    /// Append a finished item to the canvas
    pub fn commit(&mut self, item: Item) {
        log::debug!("Commit {} ({} items)", item.kind(), self.items.len() + 1);
        self.items.push(item);
        if self.policy == RedoPolicy::ClearOnCommit {
            self.undone.clear();
        }
    }

    /// Move the newest item to the undo buffer. Returns false if there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.items.pop() {
            Some(item) => {
                log::debug!("Undo {}", item.kind());
                self.undone.push(item);
                true
            }
            None => false,
        }
    }

    /// Move the most recently undone item back. Returns false if there was nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.undone.pop() {
            Some(item) => {
                log::debug!("Redo {}", item.kind());
                self.items.push(item);
                true
            }
            None => false,
        }
    }

    /// Forget everything, including what could have been redone
    pub fn clear(&mut self) {
        self.items.clear();
        self.undone.clear();
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn undone(&self) -> &[Item] {
        &self.undone
    }

    pub fn can_undo(&self) -> bool {
        !self.items.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.undone.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PenStyle;
    use crate::stroke::Stroke;
    use egui::{Color32, pos2};

    fn stroke(x: f32) -> Item {
        Stroke::from_points(
            vec![pos2(x, 0.0), pos2(x, 10.0)],
            PenStyle::new(1.0, Color32::BLACK),
        )
        .into()
    }

    #[test]
    fn test_undo_on_empty_is_noop() {
        let mut history = History::new(RedoPolicy::ClearOnCommit);
        assert!(!history.undo());
        assert!(!history.redo());
        assert!(history.items().is_empty());
        assert!(history.undone().is_empty());
    }

    #[test]
    fn test_undo_redo_restores_same_item() {
        let mut history = History::new(RedoPolicy::ClearOnCommit);
        history.commit(stroke(1.0));
        history.commit(stroke(2.0));
        let before = history.items().to_vec();

        assert!(history.undo());
        assert_eq!(history.items().len(), 1);
        assert_eq!(history.undone().len(), 1);

        assert!(history.redo());
        assert_eq!(history.items(), before.as_slice());
        assert!(history.undone().is_empty());
    }

    #[test]
    fn test_clear_on_commit_policy_drops_redo() {
        let mut history = History::new(RedoPolicy::ClearOnCommit);
        history.commit(stroke(1.0));
        history.undo();
        history.commit(stroke(2.0));
        assert!(!history.can_redo());
    }

    #[test]
    fn test_preserve_policy_keeps_stale_redo() {
        let mut history = History::new(RedoPolicy::Preserve);
        history.commit(stroke(1.0));
        let undone_id = history.items()[0].id();
        history.undo();
        history.commit(stroke(2.0));
        assert!(history.redo());
        assert_eq!(history.items().len(), 2);
        assert_eq!(history.items()[1].id(), undone_id);
    }

    #[test]
    fn test_clear_empties_both_stacks() {
        let mut history = History::new(RedoPolicy::Preserve);
        history.commit(stroke(1.0));
        history.commit(stroke(2.0));
        history.undo();
        history.clear();
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }
}
