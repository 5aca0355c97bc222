//! Work-Shift Engine for loyalty businesses
//!
//! This crate provides work-shift temporal reasoning for a loyalty/rewards
//! platform: businesses define named time-of-day shifts (which may wrap
//! past midnight), the engine keeps a business's active shifts free of
//! overlaps, and every recorded transaction is attributed to the shift
//! active at the moment it occurred, if any.

#![warn(missing_docs)]

pub mod api;
pub mod error;
pub mod models;
pub mod schedule;
pub mod store;
