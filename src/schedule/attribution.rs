//! Fail-open transaction attribution.
//!
//! At transaction-creation time the caller asks which shift was active at
//! the transaction's instant. The answer is an advisory annotation copied
//! onto the transaction, never a gate on creating it: any failure in this
//! path is logged and downgraded to "no shift", so a broken shift lookup
//! can never block the points ledger.

use chrono::NaiveDateTime;
use tracing::warn;
use uuid::Uuid;

use crate::models::ShiftAttribution;
use crate::schedule::resolver::find_shift_for_transaction;
use crate::store::ShiftStore;

/// Attributes a transaction instant to the business's active shift, if any.
///
/// Only the time-of-day component of `timestamp` is used; the caller has
/// already normalized the instant to the business's locality. Store
/// failures are logged with `warn!` and reported as
/// [`ShiftAttribution::none`] instead of propagating.
pub fn attribute_transaction<S: ShiftStore>(
    store: &S,
    business_id: Uuid,
    timestamp: NaiveDateTime,
) -> ShiftAttribution {
    let shifts = match store.shifts_for_business(business_id) {
        Ok(shifts) => shifts,
        Err(error) => {
            warn!(
                business_id = %business_id,
                error = %error,
                "Shift lookup failed during attribution; recording transaction without a shift"
            );
            return ShiftAttribution::none();
        }
    };

    match find_shift_for_transaction(timestamp, &shifts) {
        Some(shift) => ShiftAttribution::from(shift),
        None => ShiftAttribution::none(),
    }
}
