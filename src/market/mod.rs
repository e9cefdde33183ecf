//! The market simulator: commodities, locations, prices and the trades
//! that move cash and stock between them.

#![allow(unused_imports)]

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
