use crate::PlacementError;
use crate::entities::{Color, Item};

/// Default capacity of a [`Container`].
pub const DEFAULT_CAPACITY: usize = 7;

/// Fixed-capacity holding structure for [`Item`]s of a single colour.
#[derive(Clone, Debug)]
pub struct Container {
    /// Colour of the container, fixed at creation
    pub color: Color,
    /// Maximum number of items the container can hold, must be >= 1
    pub capacity: usize,
    items: Vec<Item>,
}

impl Container {
    pub fn new(color: Color) -> Container {
        Container::with_capacity(color, DEFAULT_CAPACITY)
    }

    pub fn with_capacity(color: Color, capacity: usize) -> Container {
        Container {
            color,
            capacity,
            items: Vec::with_capacity(capacity),
        }
    }

    /// Appends `item` to the container.
    /// Refuses items of a different colour, and any item once at capacity.
    pub fn add_item(&mut self, item: Item) -> Result<(), PlacementError> {
        if item.color != self.color {
            return Err(PlacementError::ColorMismatch {
                item: item.color,
                container: self.color,
            });
        }
        if self.is_full() {
            return Err(PlacementError::ContainerFull {
                capacity: self.capacity,
            });
        }
        self.items.push(item);
        Ok(())
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Contained items, in arrival order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }
}
