//! Per-style data storage.
//!
//! Each player owns exactly one `Style`, so per-player data is keyed by
//! style. `StyleMap` is backed by a fixed array for O(1) access and
//! supports iteration and indexing by `Style`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::piece::Style;

/// Per-style data storage with O(1) access.
///
/// Use `StyleMap::new()` to create with a factory function,
/// or `StyleMap::with_value()` to initialize both entries to the same value.
///
/// ## Example
///
/// ```
/// use quantik_engine::core::{Style, StyleMap};
///
/// let mut wins: StyleMap<u32> = StyleMap::with_value(0);
/// wins[Style::B] += 1;
///
/// assert_eq!(wins[Style::A], 0);
/// assert_eq!(wins[Style::B], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StyleMap<T> {
    data: [T; 2],
}

impl<T> StyleMap<T> {
    /// Create a new StyleMap with values from a factory function.
    pub fn new(factory: impl Fn(Style) -> T) -> Self {
        Self {
            data: [factory(Style::A), factory(Style::B)],
        }
    }

    /// Create a new StyleMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a style's data.
    #[must_use]
    pub fn get(&self, style: Style) -> &T {
        &self.data[style.index()]
    }

    /// Get a mutable reference to a style's data.
    pub fn get_mut(&mut self, style: Style) -> &mut T {
        &mut self.data[style.index()]
    }

    /// Iterate over (Style, &T) pairs in `Style::ALL` order.
    pub fn iter(&self) -> impl Iterator<Item = (Style, &T)> {
        Style::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T: Default> Default for StyleMap<T> {
    fn default() -> Self {
        Self::new(|_| T::default())
    }
}

impl<T> Index<Style> for StyleMap<T> {
    type Output = T;

    fn index(&self, style: Style) -> &Self::Output {
        self.get(style)
    }
}

impl<T> IndexMut<Style> for StyleMap<T> {
    fn index_mut(&mut self, style: Style) -> &mut Self::Output {
        self.get_mut(style)
    }
}
