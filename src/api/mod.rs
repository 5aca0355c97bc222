//! HTTP API module for the shift engine.
//!
//! This module provides the REST endpoints for managing a business's work
//! shifts and attributing transaction instants to them.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{AttributionRequest, CreateShiftRequest, UpdateShiftRequest};
pub use response::ApiError;
pub use state::AppState;
