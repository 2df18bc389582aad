//! Tip Pool Allocation Engine
//!
//! This crate converts counted cash denominations and a register-reported tips
//! figure into a distributable tip pool, nets out an estimated sales-tax
//! set-aside, and splits the remainder among employees in proportion to hours
//! worked, with every payout floored to the nearest $5.

#![warn(missing_docs)]

pub mod allocation;
pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
