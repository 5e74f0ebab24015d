use thiserror::Error;

use crate::entities::Color;

/// All the ways placement can fail. Each variant signals a broken invariant:
/// errors surface immediately and are never caught and retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// Item offered to a container of a different colour
    #[error("item colour {item} does not match container colour {container}")]
    ColorMismatch { item: Color, container: Color },
    /// Container already holds `capacity` items
    #[error("the container is full (capacity: {capacity})")]
    ContainerFull { capacity: usize },
    /// The single-open-container-per-colour policy was about to be broken
    #[error("invariant violation: {0}")]
    InvariantViolation(&'static str),
}
