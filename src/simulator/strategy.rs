//! The scripted trader used by the simulator.

use crate::core::constants::{MAX_PRICE, MIN_PRICE};
use crate::core::game_state::GameState;
use crate::market::{buy, sell, travel, Commodity, Location};
use rand::Rng;

/// Prices strictly above this are sold into, strictly below are bought.
pub const MIDPOINT_PRICE: u32 = (MIN_PRICE + MAX_PRICE) / 2;

/// What one turn of the strategy did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnStats {
    pub bought: u32,
    pub sold: u32,
    pub destination: Location,
}

/// How many units of `commodity` can be bought right now: limited by cash,
/// by the room left in the stash count, and by `max_units`.
pub fn affordable_units(state: &GameState, commodity: Commodity, max_units: u32) -> u32 {
    let by_cash = state.cash / state.price(commodity).max(1) as u64;
    let room = u32::MAX - state.owned(commodity);
    by_cash.min(room as u64).min(max_units as u64) as u32
}

/// Plays one turn: dump everything that is expensive here, load up on the
/// cheapest commodity if it is a bargain (at most `max_units`), then travel.
pub fn play_turn<R: Rng>(state: &mut GameState, rng: &mut R, max_units: u32) -> TurnStats {
    let mut sold = 0;
    for commodity in Commodity::all() {
        if state.price(commodity) > MIDPOINT_PRICE {
            for _ in 0..state.owned(commodity) {
                if sell(state, commodity).is_some() {
                    sold += 1;
                }
            }
        }
    }

    let mut bought = 0;
    let cheapest = Commodity::all()
        .into_iter()
        .min_by_key(|&commodity| state.price(commodity));
    if let Some(commodity) = cheapest {
        if state.price(commodity) < MIDPOINT_PRICE {
            for _ in 0..affordable_units(state, commodity, max_units) {
                if buy(state, commodity).is_some() {
                    bought += 1;
                }
            }
        }
    }

    let (_, destination) = travel(state, rng);

    TurnStats {
        bought,
        sold,
        destination,
    }
}
