//! Hardware abstraction traits
//!
//! These traits define the interface between the panel logic and
//! hardware-specific display implementations.

pub mod display;

pub use display::{CharDisplay, DisplayError};
