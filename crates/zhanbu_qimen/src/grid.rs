//! A value per palace, indexed by palace number.

use serde::{Deserialize, Serialize};

use zhanbu_tables::{ALL_PALACES, Palace};

/// Nine slots, one per palace, iterated in palace-number order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PalaceGrid<T>([T; 9]);

impl<T> PalaceGrid<T> {
    /// Build a grid by evaluating a function per palace.
    pub fn from_fn(mut f: impl FnMut(Palace) -> T) -> PalaceGrid<T> {
        PalaceGrid(core::array::from_fn(|i| f(ALL_PALACES[i])))
    }

    /// Value at a palace.
    pub fn get(&self, palace: Palace) -> &T {
        &self.0[(palace.number() - 1) as usize]
    }

    /// Replace the value at a palace.
    pub fn set(&mut self, palace: Palace, value: T) {
        self.0[(palace.number() - 1) as usize] = value;
    }

    /// Iterate `(palace, value)` in palace-number order.
    pub fn iter(&self) -> impl Iterator<Item = (Palace, &T)> {
        ALL_PALACES.iter().copied().zip(self.0.iter())
    }
}

impl<T: PartialEq> PalaceGrid<T> {
    /// First palace holding the given value.
    pub fn find(&self, value: &T) -> Option<Palace> {
        self.iter().find(|(_, v)| *v == value).map(|(p, _)| p)
    }
}
