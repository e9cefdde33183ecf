//! Commodity and location identifiers plus the per-commodity table.

use serde::Serialize;
use std::ops::{Index, IndexMut};

/// A tradeable good.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Commodity {
    Weed,
    Cocaine,
    Heroin,
    Ecstasy,
    Meth,
}

impl Commodity {
    pub const COUNT: usize = 5;

    pub fn all() -> [Commodity; Self::COUNT] {
        [
            Commodity::Weed,
            Commodity::Cocaine,
            Commodity::Heroin,
            Commodity::Ecstasy,
            Commodity::Meth,
        ]
    }

    pub fn index(self) -> usize {
        match self {
            Commodity::Weed => 0,
            Commodity::Cocaine => 1,
            Commodity::Heroin => 2,
            Commodity::Ecstasy => 3,
            Commodity::Meth => 4,
        }
    }

    pub fn from_index(index: usize) -> Option<Commodity> {
        Self::all().get(index).copied()
    }

    /// The next commodity in display order, wrapping around.
    pub fn next(self) -> Commodity {
        Self::all()[(self.index() + 1) % Self::COUNT]
    }

    /// The previous commodity in display order, wrapping around.
    pub fn previous(self) -> Commodity {
        Self::all()[(self.index() + Self::COUNT - 1) % Self::COUNT]
    }

    pub fn name(self) -> &'static str {
        match self {
            Commodity::Weed => "Weed",
            Commodity::Cocaine => "Cocaine",
            Commodity::Heroin => "Heroin",
            Commodity::Ecstasy => "Ecstasy",
            Commodity::Meth => "Meth",
        }
    }
}

/// A market the player can travel to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Location {
    NewYork,
    Miami,
    Chicago,
    LosAngeles,
}

impl Location {
    pub const COUNT: usize = 4;

    pub fn all() -> [Location; Self::COUNT] {
        [
            Location::NewYork,
            Location::Miami,
            Location::Chicago,
            Location::LosAngeles,
        ]
    }

    pub fn index(self) -> usize {
        match self {
            Location::NewYork => 0,
            Location::Miami => 1,
            Location::Chicago => 2,
            Location::LosAngeles => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Location::NewYork => "New York",
            Location::Miami => "Miami",
            Location::Chicago => "Chicago",
            Location::LosAngeles => "Los Angeles",
        }
    }
}

/// One value per commodity. Every commodity always has exactly one entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PerCommodity<T>([T; Commodity::COUNT]);

impl<T: Copy> PerCommodity<T> {
    pub fn filled(value: T) -> Self {
        Self([value; Commodity::COUNT])
    }
}

impl<T> PerCommodity<T> {
    pub fn from_fn(f: impl FnMut(Commodity) -> T) -> Self {
        Self(Commodity::all().map(f))
    }

    /// Iterates `(commodity, value)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Commodity, &T)> {
        Commodity::all().into_iter().zip(self.0.iter())
    }
}

impl<T: Copy + Default> Default for PerCommodity<T> {
    fn default() -> Self {
        Self::filled(T::default())
    }
}

impl<T> Index<Commodity> for PerCommodity<T> {
    type Output = T;

    fn index(&self, commodity: Commodity) -> &T {
        &self.0[commodity.index()]
    }
}

impl<T> IndexMut<Commodity> for PerCommodity<T> {
    fn index_mut(&mut self, commodity: Commodity) -> &mut T {
        &mut self.0[commodity.index()]
    }
}

/// A completed buy or sell of a single unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trade {
    pub commodity: Commodity,
    pub price: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commodity_index_matches_all_order() {
        for (i, commodity) in Commodity::all().into_iter().enumerate() {
            assert_eq!(commodity.index(), i);
            assert_eq!(Commodity::from_index(i), Some(commodity));
        }
        assert_eq!(Commodity::from_index(Commodity::COUNT), None);
    }

    #[test]
    fn test_commodity_next_previous_wrap() {
        assert_eq!(Commodity::Weed.next(), Commodity::Cocaine);
        assert_eq!(Commodity::Meth.next(), Commodity::Weed);
        assert_eq!(Commodity::Weed.previous(), Commodity::Meth);
        for commodity in Commodity::all() {
            assert_eq!(commodity.next().previous(), commodity);
        }
    }

    #[test]
    fn test_location_index_matches_all_order() {
        for (i, location) in Location::all().into_iter().enumerate() {
            assert_eq!(location.index(), i);
        }
    }

    #[test]
    fn test_names() {
        assert_eq!(Commodity::Ecstasy.name(), "Ecstasy");
        assert_eq!(Location::LosAngeles.name(), "Los Angeles");
        assert_eq!(Location::NewYork.name(), "New York");
    }

    #[test]
    fn test_per_commodity_index_and_iter() {
        let mut table = PerCommodity::filled(0u32);
        table[Commodity::Heroin] = 7;

        assert_eq!(table[Commodity::Heroin], 7);
        assert_eq!(table[Commodity::Weed], 0);

        let entries: Vec<_> = table.iter().map(|(c, v)| (c, *v)).collect();
        assert_eq!(entries.len(), Commodity::COUNT);
        assert_eq!(entries[2], (Commodity::Heroin, 7));
    }

    #[test]
    fn test_per_commodity_from_fn() {
        let table = PerCommodity::from_fn(|c| c.index() as u32 * 10);
        assert_eq!(table[Commodity::Meth], 40);
        assert_eq!(table[Commodity::Weed], 0);
    }
}
