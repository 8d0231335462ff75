//! Board-agnostic core logic for the weapon console panel
//!
//! This crate contains all panel logic that does not depend on
//! specific hardware implementations:
//!
//! - Charge bank counters, rates and labels
//! - Bar graph segmentation and the custom glyph table
//! - Blink timer for the ready/fire flash
//! - Display abstraction trait

#![no_std]
#![deny(unsafe_code)]

pub mod bar;
pub mod blink;
pub mod charge;
pub mod traits;
