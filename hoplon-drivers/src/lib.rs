//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in hoplon-core, plus the controller that ties them together:
//!
//! - HD44780 character LCD behind a PCF8574 I2C backpack
//! - Four-bank weapon charge panel

#![no_std]
#![deny(unsafe_code)]

pub mod lcd;
pub mod panel;
