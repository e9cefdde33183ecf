//! Utility modules: build info, log setup and terminal handling.

#![allow(unused_imports)]

pub mod build_info;
pub mod logging;
pub mod terminal;

pub use build_info::*;
pub use logging::*;
pub use terminal::*;
