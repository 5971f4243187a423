//! Cross-module test suite for the creature and calendar core.
//!
//! - `scenarios.rs`: end-to-end roster sequences (construct, damage, heal,
//!   ability, restore) spanning both the calendar and creature modules
//! - `invariants.rs`: property tests for the clamp invariants
//! - `helpers.rs`: factory functions for test creatures

mod helpers;
mod invariants;

// Re-export for convenience
pub use helpers::*;
