use itertools::Itertools;

use crate::entities::{Color, ContainerRegistry};

/// Checks every invariant of the registry: capacity bounds, colour
/// homogeneity, all superseded same-colour containers full, and each open
/// index pointing at the last container of its colour.
pub fn registry_is_consistent(registry: &ContainerRegistry) -> bool {
    let containers = registry.containers();

    if containers.iter().any(|c| c.len() > c.capacity) {
        return false;
    }
    if containers
        .iter()
        .any(|c| c.items().iter().any(|item| item.color != c.color))
    {
        return false;
    }

    for color in Color::ALL {
        let indices = containers
            .iter()
            .positions(|c| c.color == color)
            .collect_vec();

        match (registry.open[color.index()], indices.last()) {
            (None, None) => (),
            (Some(open), Some(&last)) if open == last => (),
            _ => return false,
        }

        //all but the most recently opened container of a colour must be full
        if indices.iter().rev().skip(1).any(|&i| !containers[i].is_full()) {
            return false;
        }
    }

    true
}
