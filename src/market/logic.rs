//! Market transitions: price rolls, single-unit trades and travel.
//!
//! Trades that can't happen (not enough cash, nothing to sell, no room left
//! in the stash) leave the state untouched and return `None`. They are
//! ordinary outcomes, not errors.

use super::types::{Commodity, Location, PerCommodity, Trade};
use crate::core::constants::{MAX_PRICE, MIN_PRICE};
use crate::core::game_state::GameState;
use rand::Rng;

/// A player command, decoded from input before it reaches the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Buy(Commodity),
    Sell(Commodity),
    Travel,
}

/// What happened when an [`Action`] was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Bought(Trade),
    Sold(Trade),
    Traveled { from: Location, to: Location },
    CannotAfford { commodity: Commodity, price: u32 },
    NothingToSell(Commodity),
    StashFull(Commodity),
}

impl ActionOutcome {
    /// True when the action changed the game state.
    pub fn changed_state(&self) -> bool {
        matches!(
            self,
            ActionOutcome::Bought(_) | ActionOutcome::Sold(_) | ActionOutcome::Traveled { .. }
        )
    }

    /// One-line description for the trade log.
    pub fn message(&self) -> String {
        match self {
            ActionOutcome::Bought(trade) => {
                format!("Bought 1 {} for ${}", trade.commodity.name(), trade.price)
            }
            ActionOutcome::Sold(trade) => {
                format!("Sold 1 {} for ${}", trade.commodity.name(), trade.price)
            }
            ActionOutcome::Traveled { from, to } => {
                format!("Traveled from {} to {}", from.name(), to.name())
            }
            ActionOutcome::CannotAfford { commodity, price } => {
                format!("Can't afford {} at ${}", commodity.name(), price)
            }
            ActionOutcome::NothingToSell(commodity) => {
                format!("You have no {} to sell", commodity.name())
            }
            ActionOutcome::StashFull(commodity) => {
                format!("No room left for more {}", commodity.name())
            }
        }
    }
}

/// Draws a fresh price in [MIN_PRICE, MAX_PRICE] for every commodity.
pub fn roll_prices<R: Rng>(rng: &mut R) -> PerCommodity<u32> {
    PerCommodity::from_fn(|_| rng.gen_range(MIN_PRICE..=MAX_PRICE))
}

/// Replaces the whole market. Cash, inventory and location are untouched.
pub fn generate_prices<R: Rng>(state: &mut GameState, rng: &mut R) {
    state.prices = roll_prices(rng);
}

/// Buys one unit at the current price if the player can pay for it and the
/// stash count has room for one more.
pub fn buy(state: &mut GameState, commodity: Commodity) -> Option<Trade> {
    let price = state.prices[commodity];
    if state.cash < price as u64 {
        return None;
    }
    let owned = state.inventory[commodity].checked_add(1)?;
    state.cash -= price as u64;
    state.inventory[commodity] = owned;
    tracing::debug!(
        commodity = commodity.name(),
        price,
        cash = state.cash,
        "bought"
    );
    Some(Trade { commodity, price })
}

/// Sells one unit at the current price if the player holds any.
pub fn sell(state: &mut GameState, commodity: Commodity) -> Option<Trade> {
    if state.inventory[commodity] == 0 {
        return None;
    }
    let price = state.prices[commodity];
    state.inventory[commodity] -= 1;
    state.cash = state.cash.saturating_add(price as u64);
    tracing::debug!(
        commodity = commodity.name(),
        price,
        cash = state.cash,
        "sold"
    );
    Some(Trade { commodity, price })
}

/// Picks a location other than `current`, uniformly among the rest.
pub fn pick_destination<R: Rng>(current: Location, rng: &mut R) -> Location {
    // Draw among the other COUNT - 1 slots, skipping over the current one
    let mut index = rng.gen_range(0..Location::COUNT - 1);
    if index >= current.index() {
        index += 1;
    }
    Location::all()[index]
}

/// Moves to a different location and regenerates the market there.
/// Returns `(from, to)`.
pub fn travel<R: Rng>(state: &mut GameState, rng: &mut R) -> (Location, Location) {
    let from = state.location;
    let to = pick_destination(from, rng);
    state.location = to;
    generate_prices(state, rng);
    tracing::debug!(from = from.name(), to = to.name(), "traveled");
    (from, to)
}

/// Applies a decoded player action to the state.
pub fn apply_action<R: Rng>(
    state: &mut GameState,
    action: Action,
    rng: &mut R,
) -> ActionOutcome {
    match action {
        Action::Buy(commodity) => match buy(state, commodity) {
            Some(trade) => ActionOutcome::Bought(trade),
            None if state.inventory[commodity] == u32::MAX => ActionOutcome::StashFull(commodity),
            None => ActionOutcome::CannotAfford {
                commodity,
                price: state.prices[commodity],
            },
        },
        Action::Sell(commodity) => match sell(state, commodity) {
            Some(trade) => ActionOutcome::Sold(trade),
            None => ActionOutcome::NothingToSell(commodity),
        },
        Action::Travel => {
            let (from, to) = travel(state, rng);
            ActionOutcome::Traveled { from, to }
        }
    }
}
