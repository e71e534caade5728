//! Core building blocks: RNG, rule configuration, errors.
//!
//! Everything else in the crate is built on these.

pub mod config;
pub mod error;
pub mod rng;

pub use config::RulesConfig;
pub use error::{Error, Result};
pub use rng::Twister;
