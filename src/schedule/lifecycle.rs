//! Shift lifecycle orchestration.
//!
//! Thin orchestration around the persistence collaborator plus validation:
//! every write that could introduce an overlap (create, interval update,
//! reactivation) validates against a snapshot of the business's active
//! shifts loaded immediately before the decision.
//!
//! The snapshot semantics leave a documented race: two concurrent creates
//! for the same business can each validate against a set that does not yet
//! contain the other's shift, letting two overlapping shifts persist. This
//! module provides no locking; a deployment wanting a hard guarantee must
//! serialize the validate-then-persist sequence externally (a per-business
//! advisory lock or a unique-constraint-backed retry).

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{ClockInterval, DEFAULT_SHIFT_COLOR, ShiftDraft, ShiftPatch, WorkShift};
use crate::schedule::validator::{NamedInterval, validate_shift_times};
use crate::store::ShiftStore;

/// Create/update/delete/toggle operations over a shift store.
#[derive(Debug, Clone)]
pub struct ShiftLifecycle<S: ShiftStore> {
    store: S,
}

impl<S: ShiftStore> ShiftLifecycle<S> {
    /// Creates a lifecycle over the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Creates a new active shift for a business.
    ///
    /// The draft's interval is validated against all of the business's
    /// currently active shifts; on conflict the error propagates and
    /// nothing is persisted.
    pub fn create(&self, business_id: Uuid, draft: ShiftDraft) -> EngineResult<WorkShift> {
        let interval = ClockInterval::new(draft.start_time, draft.end_time);
        let others = self.active_intervals(business_id, None)?;
        validate_shift_times(interval, &others)?;

        let now = Utc::now();
        let shift = WorkShift {
            id: Uuid::new_v4(),
            business_id,
            name: draft.name,
            start_time: draft.start_time,
            end_time: draft.end_time,
            color: draft.color.unwrap_or_else(|| DEFAULT_SHIFT_COLOR.to_string()),
            description: draft.description,
            is_active: true,
            created_at: now,
            updated_at: now,
        };
        self.store.insert(shift.clone())?;
        info!(shift_id = %shift.id, business_id = %business_id, name = %shift.name, "Created shift");
        Ok(shift)
    }

    /// Applies a partial update to a shift.
    ///
    /// The merged interval is re-validated only when the patch changes it,
    /// against the business's other active shifts with this shift excluded
    /// by id (the validator itself has no identity concept). On validation
    /// failure the stored shift is left untouched.
    pub fn update(&self, shift_id: Uuid, patch: ShiftPatch) -> EngineResult<WorkShift> {
        let mut shift = self.load(shift_id)?;

        let revalidate = patch.changes_interval();
        if let Some(start_time) = patch.start_time {
            shift.start_time = start_time;
        }
        if let Some(end_time) = patch.end_time {
            shift.end_time = end_time;
        }
        if let Some(name) = patch.name {
            shift.name = name;
        }
        if let Some(color) = patch.color {
            shift.color = color;
        }
        if let Some(description) = patch.description {
            shift.description = Some(description);
        }

        if revalidate {
            let others = self.active_intervals(shift.business_id, Some(shift_id))?;
            validate_shift_times(shift.interval(), &others)?;
        }

        shift.updated_at = Utc::now();
        self.store.update(shift.clone())?;
        info!(shift_id = %shift_id, revalidated = revalidate, "Updated shift");
        Ok(shift)
    }

    /// Deletes a shift.
    ///
    /// Past transactions keep their denormalized shift annotation; deletion
    /// only removes the shift from future validation and resolution.
    pub fn delete(&self, shift_id: Uuid) -> EngineResult<()> {
        self.store.delete(shift_id)?;
        info!(shift_id = %shift_id, "Deleted shift");
        Ok(())
    }

    /// Flips a shift's active flag.
    ///
    /// Deactivating is always safe. Reactivating re-validates the shift's
    /// interval against the other currently-active shifts, because shifts
    /// created while this one was dormant may now conflict; skipping that
    /// check would let a stale shift reappear in violation of the
    /// no-overlap invariant.
    pub fn toggle_active(&self, shift_id: Uuid) -> EngineResult<WorkShift> {
        let mut shift = self.load(shift_id)?;

        if !shift.is_active {
            let others = self.active_intervals(shift.business_id, Some(shift_id))?;
            validate_shift_times(shift.interval(), &others)?;
        }

        shift.is_active = !shift.is_active;
        shift.updated_at = Utc::now();
        self.store.update(shift.clone())?;
        info!(shift_id = %shift_id, is_active = shift.is_active, "Toggled shift");
        Ok(shift)
    }

    fn load(&self, shift_id: Uuid) -> EngineResult<WorkShift> {
        self.store
            .get(shift_id)?
            .ok_or_else(|| EngineError::ShiftNotFound {
                shift_id: shift_id.to_string(),
            })
    }

    /// Snapshot of a business's active shift intervals, optionally
    /// excluding one shift by id (self-exclusion on update/reactivation).
    fn active_intervals(
        &self,
        business_id: Uuid,
        exclude: Option<Uuid>,
    ) -> EngineResult<Vec<NamedInterval>> {
        Ok(self
            .store
            .shifts_for_business(business_id)?
            .iter()
            .filter(|shift| shift.is_active && Some(shift.id) != exclude)
            .map(NamedInterval::from)
            .collect())
    }
}
