//! Implementations of the `RateProvider` port.

pub mod fixed;
pub mod open_er_api;
