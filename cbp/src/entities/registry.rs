use log::debug;

use crate::PlacementError;
use crate::entities::{Color, Container, DEFAULT_CAPACITY, Item, N_COLORS};
use crate::util::assertions;

/// Owns all [`Container`]s of one trial and implements the greedy placement
/// policy: per colour, only the most recently opened container can receive
/// items, and a new one is opened only once it is full.
#[derive(Clone, Debug)]
pub struct ContainerRegistry {
    /// All containers in creation order, append-only
    pub(crate) containers: Vec<Container>,
    /// Per colour, index into `containers` of the most recently opened container of that colour
    pub(crate) open: [Option<usize>; N_COLORS],
    /// Capacity given to every container opened by the registry
    pub(crate) capacity: usize,
}

impl ContainerRegistry {
    pub fn new() -> ContainerRegistry {
        ContainerRegistry::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> ContainerRegistry {
        ContainerRegistry {
            containers: vec![],
            open: [None; N_COLORS],
            capacity,
        }
    }

    /// Places `item` into the open container of its colour, opening a fresh
    /// container first when there is none or it is full.
    ///
    /// Never fails for capacity >= 1: a freshly opened container always has
    /// room. A capacity of 0 surfaces [`PlacementError::ContainerFull`] from
    /// the fresh container.
    pub fn place_item(&mut self, item: Item) -> Result<(), PlacementError> {
        //fast path: the open container of this colour still has room
        if let Some(idx) = self.open[item.color.index()]
            && !self.containers[idx].is_full()
        {
            self.containers[idx].add_item(item)?;
            debug_assert!(assertions::registry_is_consistent(self));
            return Ok(());
        }

        let idx = self.open_container(item.color)?;
        self.containers[idx].add_item(item)?;
        debug_assert!(assertions::registry_is_consistent(self));
        Ok(())
    }

    /// Opens a fresh container for `color` and marks it as the open one.
    /// Fails if the currently open container of `color` is not yet full,
    /// which would break the single-open-container-per-colour policy.
    fn open_container(&mut self, color: Color) -> Result<usize, PlacementError> {
        if let Some(prev) = self.open[color.index()]
            && !self.containers[prev].is_full()
        {
            return Err(PlacementError::InvariantViolation(
                "previous container for this colour not yet full",
            ));
        }

        self.containers
            .push(Container::with_capacity(color, self.capacity));
        let idx = self.containers.len() - 1;
        self.open[color.index()] = Some(idx);
        debug!("[REGISTRY] opened {} container at index {}", color, idx);
        Ok(idx)
    }

    /// Human-readable multi-line report of every container, in creation order.
    pub fn summary_view(&self) -> String {
        let mut out = String::from("\n############## ContainerRegistry ##############\n");
        for container in &self.containers {
            out.push_str(&format!(
                "- {} Container: {} items\n",
                container.color,
                container.len()
            ));
        }
        out.push_str("###############################################\n");
        out
    }

    /// Single-line report: one `index(count)` token per container, in creation order.
    pub fn compact_log(&self) -> String {
        self.containers
            .iter()
            .map(|c| format!("{}({}) ", c.color.index(), c.len()))
            .collect()
    }

    pub fn container_count(&self) -> usize {
        self.containers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }

    /// All containers, in creation order.
    pub fn containers(&self) -> &[Container] {
        &self.containers
    }
}

impl Default for ContainerRegistry {
    fn default() -> Self {
        ContainerRegistry::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_container_guard_rejects_superseding_a_non_full_container() {
        let mut registry = ContainerRegistry::with_capacity(2);
        registry.place_item(Item::new(Color::Red)).unwrap();

        //the red container at index 0 exists and has room, superseding it must fail
        let err = registry.open_container(Color::Red).unwrap_err();
        assert!(matches!(err, PlacementError::InvariantViolation(_)));

        //a colour without an open container is unaffected by the guard
        assert!(registry.open_container(Color::White).is_ok());
    }

    #[test]
    fn open_container_guard_applies_to_the_first_container_as_well() {
        let mut registry = ContainerRegistry::with_capacity(2);
        registry.place_item(Item::new(Color::Yellow)).unwrap();

        //the open yellow container sits at global index 0, the guard must still see it
        assert_eq!(registry.open[Color::Yellow.index()], Some(0));
        assert!(registry.open_container(Color::Yellow).is_err());
    }

    #[test]
    fn open_container_allows_superseding_a_full_container() {
        let mut registry = ContainerRegistry::with_capacity(1);
        registry.place_item(Item::new(Color::Red)).unwrap();
        assert!(registry.containers[0].is_full());

        let idx = registry.open_container(Color::Red).unwrap();
        assert_eq!(idx, 1);
        assert_eq!(registry.open[Color::Red.index()], Some(1));
    }
}
