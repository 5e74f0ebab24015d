//! Core crate for colour-constrained bin packing: items of a fixed set of
//! colours are packed into colour-homogeneous containers of fixed capacity
//! using a greedy last-open-container placement policy.

/// Entities to model the colour-constrained bin packing process
pub mod entities;

/// Helper functions which do not belong to any specific module
pub mod util;

mod errors;

#[doc(inline)]
pub use errors::PlacementError;
