//! Work-shift entity and its create/update shapes.
//!
//! This module defines the WorkShift struct for representing a business's
//! named time-of-day shifts, along with the draft and patch types used by
//! the shift lifecycle.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{ClockInterval, ClockTime};

/// Display color assigned to shifts created without an explicit one.
pub const DEFAULT_SHIFT_COLOR: &str = "#2196F3";

/// A business-defined, recurring-daily time-of-day shift.
///
/// Each shift is owned by exactly one business. Its start and end times are
/// clock times ("HH:mm"), not dated instants; a shift whose end is at or
/// before its start wraps past midnight. Only active shifts participate in
/// overlap validation and transaction attribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkShift {
    /// Unique identifier for the shift.
    pub id: Uuid,
    /// The business that owns this shift.
    pub business_id: Uuid,
    /// Human-readable shift name (e.g., "Morning Shift").
    pub name: String,
    /// The start time of the shift, inclusive.
    pub start_time: ClockTime,
    /// The end time of the shift, exclusive.
    pub end_time: ClockTime,
    /// Display color for dashboards and reports.
    pub color: String,
    /// Optional free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Whether the shift participates in validation and attribution.
    pub is_active: bool,
    /// When the shift was created.
    pub created_at: DateTime<Utc>,
    /// When the shift was last modified.
    pub updated_at: DateTime<Utc>,
}

impl WorkShift {
    /// Returns the shift's time-of-day interval.
    pub fn interval(&self) -> ClockInterval {
        ClockInterval::new(self.start_time, self.end_time)
    }
}

/// The fields required to create a new shift.
///
/// New shifts are always created active; `color` falls back to
/// [`DEFAULT_SHIFT_COLOR`] when omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftDraft {
    /// Human-readable shift name.
    pub name: String,
    /// The start time of the shift, inclusive.
    pub start_time: ClockTime,
    /// The end time of the shift, exclusive.
    pub end_time: ClockTime,
    /// Display color; defaults when omitted.
    #[serde(default)]
    pub color: Option<String>,
    /// Optional free-form description.
    #[serde(default)]
    pub description: Option<String>,
}

/// A partial update to an existing shift.
///
/// `None` fields are left unchanged. The active flag is not part of a patch;
/// it is flipped through the dedicated toggle operation so that
/// reactivation always re-validates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShiftPatch {
    /// New shift name, if changing.
    #[serde(default)]
    pub name: Option<String>,
    /// New start time, if changing.
    #[serde(default)]
    pub start_time: Option<ClockTime>,
    /// New end time, if changing.
    #[serde(default)]
    pub end_time: Option<ClockTime>,
    /// New display color, if changing.
    #[serde(default)]
    pub color: Option<String>,
    /// New description, if changing.
    #[serde(default)]
    pub description: Option<String>,
}

impl ShiftPatch {
    /// Returns true if the patch changes the shift's interval.
    pub fn changes_interval(&self) -> bool {
        self.start_time.is_some() || self.end_time.is_some()
    }
}
