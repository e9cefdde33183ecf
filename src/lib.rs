//! TextWars - a terminal trading game in the spirit of Dope Wars.
//!
//! The library holds the market simulation, the input decoding and the
//! screen drawing; `main.rs` only wires them to a terminal.

pub mod core;
pub mod input;
pub mod market;
pub mod simulator;
pub mod ui;
pub mod utils;

pub use crate::core::constants::*;
pub use crate::core::game_state::GameState;
pub use crate::market::{
    apply_action, buy, generate_prices, sell, travel, Action, ActionOutcome, Commodity, Location,
    Trade,
};
