use rand::Rng;

use crate::shuffle::shuffled;

/// A reorderable list of items, shown in shuffled order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortingSurface {
    items: Vec<String>,
}

impl SortingSurface {
    pub fn new<R: Rng + ?Sized>(items: &[String], rng: &mut R) -> Self {
        Self {
            items: shuffled(items, rng),
        }
    }

    /// Items in their current displayed order.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Drop the item at `from` onto the item at `to`.
    ///
    /// Dragging downwards lands the item after the target, dragging upwards
    /// lands it before, so the dragged item always ends up at index `to`.
    pub fn reorder(&mut self, from: usize, to: usize) -> bool {
        if from == to || from >= self.items.len() || to >= self.items.len() {
            return false;
        }
        let item = self.items.remove(from);
        self.items.insert(to, item);
        true
    }
}
