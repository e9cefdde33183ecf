//! Integration test: trading scenarios
//!
//! Walks the buy/sell transitions through the public API the way the
//! terminal shell drives them.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use textwars::{
    apply_action, buy, generate_prices, sell, Action, ActionOutcome, Commodity, GameState,
    MAX_PRICE, MIN_PRICE, STARTING_CASH,
};

fn create_test_rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(2024)
}

fn fresh_state() -> GameState {
    GameState::new(&mut create_test_rng())
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_buy_then_sell_round_trip() {
    let mut state = fresh_state();
    assert_eq!(state.cash, 2000);
    state.prices[Commodity::Weed] = 100;

    assert!(buy(&mut state, Commodity::Weed).is_some());
    assert_eq!(state.cash, 1900);
    assert_eq!(state.inventory[Commodity::Weed], 1);

    assert!(sell(&mut state, Commodity::Weed).is_some());
    assert_eq!(state.cash, 2000);
    assert_eq!(state.inventory[Commodity::Weed], 0);
}

#[test]
fn test_buy_without_enough_cash_changes_nothing() {
    let mut state = fresh_state();
    state.cash = 40;
    state.prices[Commodity::Weed] = 100;

    assert!(buy(&mut state, Commodity::Weed).is_none());
    assert_eq!(state.cash, 40);
    assert_eq!(state.inventory[Commodity::Weed], 0);
}

#[test]
fn test_sell_without_stock_changes_nothing() {
    let mut state = fresh_state();
    let cash = state.cash;

    assert!(sell(&mut state, Commodity::Meth).is_none());
    assert_eq!(state.inventory[Commodity::Meth], 0);
    assert_eq!(state.cash, cash);
}

// =============================================================================
// Properties
// =============================================================================

#[test]
fn test_buy_moves_exactly_one_price_of_cash() {
    let mut rng = create_test_rng();
    let mut state = fresh_state();

    for round in 0..200 {
        generate_prices(&mut state, &mut rng);
        let commodity = Commodity::all()[round % Commodity::COUNT];
        let before = state.clone();
        let price = state.price(commodity) as u64;

        let trade = buy(&mut state, commodity);

        if before.cash >= price {
            assert_eq!(trade.map(|t| t.price as u64), Some(price));
            assert_eq!(state.cash, before.cash - price);
            assert_eq!(state.inventory[commodity], before.inventory[commodity] + 1);
            assert_eq!(state.prices, before.prices);
            assert_eq!(state.location, before.location);
        } else {
            assert_eq!(state, before);
        }
    }
}

#[test]
fn test_sell_moves_exactly_one_price_of_cash() {
    let mut rng = create_test_rng();
    let mut state = fresh_state();
    state.inventory[Commodity::Heroin] = 3;

    for _ in 0..6 {
        generate_prices(&mut state, &mut rng);
        let before = state.clone();
        let price = state.price(Commodity::Heroin) as u64;

        let trade = sell(&mut state, Commodity::Heroin);

        if before.inventory[Commodity::Heroin] > 0 {
            assert!(trade.is_some());
            assert_eq!(state.cash, before.cash + price);
            assert_eq!(
                state.inventory[Commodity::Heroin],
                before.inventory[Commodity::Heroin] - 1
            );
        } else {
            assert!(trade.is_none());
            assert_eq!(state, before);
        }
    }

    assert_eq!(state.inventory[Commodity::Heroin], 0);
}

#[test]
fn test_random_play_keeps_invariants() {
    let mut rng = create_test_rng();
    let mut state = fresh_state();
    let actions = [
        Action::Buy(Commodity::Weed),
        Action::Buy(Commodity::Cocaine),
        Action::Sell(Commodity::Weed),
        Action::Buy(Commodity::Ecstasy),
        Action::Sell(Commodity::Cocaine),
        Action::Travel,
        Action::Sell(Commodity::Ecstasy),
    ];

    for step in 0..2000 {
        let action = actions[step % actions.len()];
        let before = state.clone();
        let outcome = apply_action(&mut state, action, &mut rng);

        if !outcome.changed_state() {
            assert_eq!(state, before);
        }
        for commodity in Commodity::all() {
            let price = state.price(commodity);
            assert!((MIN_PRICE..=MAX_PRICE).contains(&price));
        }
    }
}

#[test]
fn test_apply_action_reports_refusals() {
    let mut rng = create_test_rng();
    let mut state = fresh_state();
    state.cash = 0;

    let outcome = apply_action(&mut state, Action::Buy(Commodity::Cocaine), &mut rng);
    assert!(matches!(
        outcome,
        ActionOutcome::CannotAfford {
            commodity: Commodity::Cocaine,
            ..
        }
    ));

    let outcome = apply_action(&mut state, Action::Sell(Commodity::Cocaine), &mut rng);
    assert_eq!(outcome, ActionOutcome::NothingToSell(Commodity::Cocaine));
    assert_eq!(state.cash, 0);
}

#[test]
fn test_new_game_starts_empty_handed() {
    let state = fresh_state();
    assert_eq!(state.cash, STARTING_CASH);
    assert_eq!(state.total_units(), 0);
    assert_eq!(state.net_worth(), STARTING_CASH);
}
