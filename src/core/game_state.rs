use crate::core::constants::{DEFAULT_LOCATION, STARTING_CASH};
use crate::market::logic::generate_prices;
use crate::market::types::{Commodity, Location, PerCommodity};
use rand::Rng;

/// Everything the simulation mutates: wallet, stash, market and position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub cash: u64,
    pub inventory: PerCommodity<u32>,
    pub prices: PerCommodity<u32>,
    pub location: Location,
}

impl GameState {
    /// Starts a session with starting cash, an empty stash and a fresh market.
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let mut state = Self {
            cash: STARTING_CASH,
            inventory: PerCommodity::filled(0),
            prices: PerCommodity::filled(0),
            location: DEFAULT_LOCATION,
        };
        generate_prices(&mut state, rng);
        state
    }

    pub fn price(&self, commodity: Commodity) -> u32 {
        self.prices[commodity]
    }

    pub fn owned(&self, commodity: Commodity) -> u32 {
        self.inventory[commodity]
    }

    /// Cash plus the stash valued at the current market, clamped at `u64::MAX`.
    pub fn net_worth(&self) -> u64 {
        self.inventory
            .iter()
            .map(|(commodity, &count)| {
                (count as u64).saturating_mul(self.prices[commodity] as u64)
            })
            .fold(self.cash, u64::saturating_add)
    }

    pub fn total_units(&self) -> u64 {
        self.inventory.iter().map(|(_, &count)| count as u64).sum()
    }
}
