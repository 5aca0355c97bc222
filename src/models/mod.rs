//! Core data models for the shift engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attribution;
mod clock_interval;
mod clock_time;
mod work_shift;

pub use attribution::ShiftAttribution;
pub use clock_interval::ClockInterval;
pub use clock_time::{ClockTime, MINUTES_PER_DAY};
pub use work_shift::{DEFAULT_SHIFT_COLOR, ShiftDraft, ShiftPatch, WorkShift};
