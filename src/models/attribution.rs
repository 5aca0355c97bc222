//! Shift attribution result type.
//!
//! The resolver's answer for a transaction instant, shaped for denormalized
//! storage on the transaction record: shift id and name are copied onto the
//! transaction at creation time, so the annotation survives later edits or
//! deletion of the shift.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::WorkShift;

/// The result of resolving a transaction instant against a business's
/// active shifts.
///
/// Both fields are `None` when no active shift contained the instant. The
/// values are a snapshot of the shift at attribution time, not a reference
/// to its current state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftAttribution {
    /// Id of the matched shift, if any.
    pub work_shift_id: Option<Uuid>,
    /// Name of the matched shift at the time of attribution, if any.
    pub work_shift_name: Option<String>,
}

impl ShiftAttribution {
    /// An attribution with no matching shift.
    pub fn none() -> Self {
        Self {
            work_shift_id: None,
            work_shift_name: None,
        }
    }

    /// Returns true if a shift was matched.
    pub fn is_matched(&self) -> bool {
        self.work_shift_id.is_some()
    }
}

impl From<&WorkShift> for ShiftAttribution {
    fn from(shift: &WorkShift) -> Self {
        Self {
            work_shift_id: Some(shift.id),
            work_shift_name: Some(shift.name.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DEFAULT_SHIFT_COLOR;
    use chrono::Utc;

    #[test]
    fn test_none_attribution_is_unmatched() {
        let attribution = ShiftAttribution::none();
        assert!(!attribution.is_matched());
        assert!(attribution.work_shift_name.is_none());
    }

    #[test]
    fn test_attribution_snapshots_shift_fields() {
        let now = Utc::now();
        let shift = WorkShift {
            id: Uuid::new_v4(),
            business_id: Uuid::new_v4(),
            name: "Night Shift".to_string(),
            start_time: "22:00".parse().unwrap(),
            end_time: "02:00".parse().unwrap(),
            color: DEFAULT_SHIFT_COLOR.to_string(),
            description: None,
            is_active: true,
            created_at: now,
            updated_at: now,
        };

        let attribution = ShiftAttribution::from(&shift);
        assert!(attribution.is_matched());
        assert_eq!(attribution.work_shift_id, Some(shift.id));
        assert_eq!(attribution.work_shift_name.as_deref(), Some("Night Shift"));
    }

    #[test]
    fn test_none_serializes_as_nulls() {
        let json = serde_json::to_value(ShiftAttribution::none()).unwrap();
        assert!(json["work_shift_id"].is_null());
        assert!(json["work_shift_name"].is_null());
    }
}
