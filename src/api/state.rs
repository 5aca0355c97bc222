//! Application state for the shift engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::store::ShiftStore;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers,
/// primarily the shift persistence collaborator.
#[derive(Clone)]
pub struct AppState {
    /// The shift store backing all lifecycle and attribution operations.
    store: Arc<dyn ShiftStore>,
}

impl AppState {
    /// Creates a new application state over the given store.
    pub fn new(store: impl ShiftStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Returns a handle to the shift store.
    pub fn store(&self) -> Arc<dyn ShiftStore> {
        Arc::clone(&self.store)
    }
}
