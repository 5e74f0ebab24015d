use crate::entities::Color;

/// A single unit to be packed, carrying one colour. Immutable once created.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Item {
    pub color: Color,
}

impl Item {
    pub fn new(color: Color) -> Item {
        Item { color }
    }
}
