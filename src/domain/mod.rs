//! Domain types for payout estimation: currencies, fee schedules, requests
//! and breakdowns, plus the port through which exchange rates are obtained.

pub mod currency;
pub mod fees;
pub mod payout;
pub mod ports;
