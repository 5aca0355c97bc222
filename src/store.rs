//! Shift persistence collaborator.
//!
//! The engine never talks to a database directly: every lifecycle and
//! attribution operation reads its shift set through the [`ShiftStore`]
//! trait immediately before use. Implementations need only keyed lookups
//! and writes; no multi-document transactional guarantee is assumed.
//!
//! [`MemoryStore`] backs the test suite and any embedding without an
//! external database.

use std::collections::HashMap;
use std::sync::RwLock;

use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::WorkShift;

/// Keyed shift persistence, implemented by the surrounding application.
///
/// `shifts_for_business` must return shifts ordered by start time (ties
/// broken by id) so that first-match resolution is deterministic.
pub trait ShiftStore: Send + Sync {
    /// Lists all shifts owned by a business, ordered by start time.
    fn shifts_for_business(&self, business_id: Uuid) -> EngineResult<Vec<WorkShift>>;

    /// Fetches a shift by id.
    fn get(&self, shift_id: Uuid) -> EngineResult<Option<WorkShift>>;

    /// Persists a new shift.
    fn insert(&self, shift: WorkShift) -> EngineResult<()>;

    /// Replaces an existing shift record.
    fn update(&self, shift: WorkShift) -> EngineResult<()>;

    /// Removes a shift record.
    fn delete(&self, shift_id: Uuid) -> EngineResult<()>;
}

impl<S: ShiftStore + ?Sized> ShiftStore for &S {
    fn shifts_for_business(&self, business_id: Uuid) -> EngineResult<Vec<WorkShift>> {
        (**self).shifts_for_business(business_id)
    }

    fn get(&self, shift_id: Uuid) -> EngineResult<Option<WorkShift>> {
        (**self).get(shift_id)
    }

    fn insert(&self, shift: WorkShift) -> EngineResult<()> {
        (**self).insert(shift)
    }

    fn update(&self, shift: WorkShift) -> EngineResult<()> {
        (**self).update(shift)
    }

    fn delete(&self, shift_id: Uuid) -> EngineResult<()> {
        (**self).delete(shift_id)
    }
}

impl<S: ShiftStore + ?Sized> ShiftStore for std::sync::Arc<S> {
    fn shifts_for_business(&self, business_id: Uuid) -> EngineResult<Vec<WorkShift>> {
        (**self).shifts_for_business(business_id)
    }

    fn get(&self, shift_id: Uuid) -> EngineResult<Option<WorkShift>> {
        (**self).get(shift_id)
    }

    fn insert(&self, shift: WorkShift) -> EngineResult<()> {
        (**self).insert(shift)
    }

    fn update(&self, shift: WorkShift) -> EngineResult<()> {
        (**self).update(shift)
    }

    fn delete(&self, shift_id: Uuid) -> EngineResult<()> {
        (**self).delete(shift_id)
    }
}

/// In-memory shift store backed by a read-write locked map.
#[derive(Debug, Default)]
pub struct MemoryStore {
    shifts: RwLock<HashMap<Uuid, WorkShift>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn poisoned() -> EngineError {
        EngineError::StorageError {
            message: "shift store lock poisoned".to_string(),
        }
    }
}

impl ShiftStore for MemoryStore {
    fn shifts_for_business(&self, business_id: Uuid) -> EngineResult<Vec<WorkShift>> {
        let shifts = self.shifts.read().map_err(|_| Self::poisoned())?;
        let mut result: Vec<WorkShift> = shifts
            .values()
            .filter(|shift| shift.business_id == business_id)
            .cloned()
            .collect();
        result.sort_by_key(|shift| (shift.start_time, shift.id));
        Ok(result)
    }

    fn get(&self, shift_id: Uuid) -> EngineResult<Option<WorkShift>> {
        let shifts = self.shifts.read().map_err(|_| Self::poisoned())?;
        Ok(shifts.get(&shift_id).cloned())
    }

    fn insert(&self, shift: WorkShift) -> EngineResult<()> {
        let mut shifts = self.shifts.write().map_err(|_| Self::poisoned())?;
        shifts.insert(shift.id, shift);
        Ok(())
    }

    fn update(&self, shift: WorkShift) -> EngineResult<()> {
        let mut shifts = self.shifts.write().map_err(|_| Self::poisoned())?;
        if !shifts.contains_key(&shift.id) {
            return Err(EngineError::ShiftNotFound {
                shift_id: shift.id.to_string(),
            });
        }
        shifts.insert(shift.id, shift);
        Ok(())
    }

    fn delete(&self, shift_id: Uuid) -> EngineResult<()> {
        let mut shifts = self.shifts.write().map_err(|_| Self::poisoned())?;
        if shifts.remove(&shift_id).is_none() {
            return Err(EngineError::ShiftNotFound {
                shift_id: shift_id.to_string(),
            });
        }
        Ok(())
    }
}
