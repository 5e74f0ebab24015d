use std::fmt;

use rand::Rng;
use rand::distr::{Distribution, StandardUniform};
use serde::{Deserialize, Serialize};

/// Number of supported colours.
pub const N_COLORS: usize = 3;

/// Colour of an [`Item`](crate::entities::Item) or [`Container`](crate::entities::Container).
/// Closed enumeration, invalid colours are unrepresentable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Yellow,
    Red,
    White,
}

impl Color {
    /// All colours, in index order.
    pub const ALL: [Color; N_COLORS] = [Color::Yellow, Color::Red, Color::White];

    /// Stable numeric index of the colour, used in the compact log.
    pub fn index(self) -> usize {
        match self {
            Color::Yellow => 0,
            Color::Red => 1,
            Color::White => 2,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::Yellow => "Yellow",
            Color::Red => "Red",
            Color::White => "White",
        };
        write!(f, "{name}")
    }
}

/// Uniform sampling over all colours.
impl Distribution<Color> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Color {
        Color::ALL[rng.random_range(0..N_COLORS)]
    }
}
