//! Application layer: the payout pipeline and its orchestration.
//!
//! `PayoutCalculator` is the pure fee/tax/conversion chain. `PayoutEngine`
//! pairs it with a `RateProvider` and is what the entry point drives.

pub mod calculator;
pub mod engine;
