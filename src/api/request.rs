//! Request types for the shift engine API.
//!
//! This module defines the JSON request structures for the shift and
//! attribution endpoints. Clock times arrive as raw strings and are parsed
//! into domain types here, so malformed "HH:mm" values surface as
//! [`crate::error::EngineError::InvalidClockTime`] rather than as opaque
//! deserialization failures.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::{ShiftDraft, ShiftPatch};

/// Request body for creating a shift.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateShiftRequest {
    /// Human-readable shift name.
    pub name: String,
    /// The start time as "HH:mm".
    pub start_time: String,
    /// The end time as "HH:mm".
    pub end_time: String,
    /// Display color; defaults when omitted.
    #[serde(default)]
    pub color: Option<String>,
    /// Optional free-form description.
    #[serde(default)]
    pub description: Option<String>,
}

impl CreateShiftRequest {
    /// Parses the clock-time strings and builds a domain draft.
    pub fn into_draft(self) -> EngineResult<ShiftDraft> {
        Ok(ShiftDraft {
            name: self.name,
            start_time: self.start_time.parse()?,
            end_time: self.end_time.parse()?,
            color: self.color,
            description: self.description,
        })
    }
}

/// Request body for partially updating a shift.
///
/// Omitted fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateShiftRequest {
    /// New shift name, if changing.
    #[serde(default)]
    pub name: Option<String>,
    /// New start time as "HH:mm", if changing.
    #[serde(default)]
    pub start_time: Option<String>,
    /// New end time as "HH:mm", if changing.
    #[serde(default)]
    pub end_time: Option<String>,
    /// New display color, if changing.
    #[serde(default)]
    pub color: Option<String>,
    /// New description, if changing.
    #[serde(default)]
    pub description: Option<String>,
}

impl UpdateShiftRequest {
    /// Parses any clock-time strings and builds a domain patch.
    pub fn into_patch(self) -> EngineResult<ShiftPatch> {
        Ok(ShiftPatch {
            name: self.name,
            start_time: self.start_time.as_deref().map(str::parse).transpose()?,
            end_time: self.end_time.as_deref().map(str::parse).transpose()?,
            color: self.color,
            description: self.description,
        })
    }
}

/// Request body for attributing a transaction instant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttributionRequest {
    /// The transaction's wall-clock instant, already normalized to the
    /// business's local time by the caller.
    pub timestamp: NaiveDateTime,
}
