//! Monte-Carlo win-likelihood estimation.
//!
//! Each trial deals the unknown part of tiers 1 and 2 from the catalogue,
//! searches the completed board and records whether the win threshold was
//! reached. Sequential runs share one setup and one search generator across
//! all trials; parallel runs give every trial its own pair.

mod config;
mod estimate;
mod monte_carlo;

pub use config::{DriverConfig, EstimatorConfig};
pub use estimate::Estimate;
pub use monte_carlo::{MonteCarloDriver, TrialReport};
