use crate::market::types::Location;

// Session
pub const STARTING_CASH: u64 = 2000;
pub const DEFAULT_LOCATION: Location = Location::NewYork;

// Market prices (inclusive range)
pub const MIN_PRICE: u32 = 50;
pub const MAX_PRICE: u32 = 1000;

// UI loop
pub const TICK_INTERVAL_MS: u64 = 100;
pub const TRADE_LOG_CAPACITY: usize = 50;

// Logging
pub const LOG_FILTER_ENV: &str = "TEXTWARS_LOG";
pub const DEFAULT_LOG_FILTER: &str = "info";
pub const LOG_DIR_NAME: &str = ".textwars";
pub const LOG_FILE_NAME: &str = "textwars.log";
