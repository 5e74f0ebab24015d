mod color;
mod container;
mod item;
mod registry;

#[doc(inline)]
pub use color::Color;
#[doc(inline)]
pub use color::N_COLORS;
#[doc(inline)]
pub use container::Container;
#[doc(inline)]
pub use container::DEFAULT_CAPACITY;
#[doc(inline)]
pub use item::Item;
#[doc(inline)]
pub use registry::ContainerRegistry;
