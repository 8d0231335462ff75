//! Weapon console panel controllers

pub mod charge;

pub use charge::{ChargePanel, DEFAULT_NAMES, UPDATE_INTERVAL_MS};
