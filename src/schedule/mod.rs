//! Work-shift temporal reasoning for the shift engine.
//!
//! This module contains the algorithmic core: interval math over
//! possibly-wrapping clock intervals, no-overlap validation for a
//! business's active shifts, instant-to-shift resolution, the shift
//! lifecycle orchestration, and fail-open transaction attribution.

mod attribution;
mod interval_math;
mod lifecycle;
mod resolver;
mod validator;

pub use attribution::attribute_transaction;
pub use interval_math::{contains, overlaps};
pub use lifecycle::ShiftLifecycle;
pub use resolver::{find_shift_for_transaction, resolve_shift};
pub use validator::{NamedInterval, validate_shift_times};
