//! HTTP request handlers for the shift engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{patch, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::schedule::{ShiftLifecycle, attribute_transaction};
use crate::store::ShiftStore;

use super::request::{AttributionRequest, CreateShiftRequest, UpdateShiftRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/businesses/:business_id/shifts",
            post(create_shift_handler).get(list_shifts_handler),
        )
        .route(
            "/shifts/:shift_id",
            patch(update_shift_handler).delete(delete_shift_handler),
        )
        .route("/shifts/:shift_id/toggle", post(toggle_shift_handler))
        .route(
            "/businesses/:business_id/attribution",
            post(attribution_handler),
        )
        .with_state(state)
}

/// Converts a JSON extraction failure into an error body, distinguishing
/// missing fields from malformed JSON the way clients expect.
fn rejection_to_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(correlation_id = %correlation_id, error = %body_text, "JSON data error");
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "JSON syntax error");
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

/// Handler for POST /businesses/:business_id/shifts.
async fn create_shift_handler(
    State(state): State<AppState>,
    Path(business_id): Path<Uuid>,
    payload: Result<Json<CreateShiftRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, business_id = %business_id, "Processing shift creation");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            let error = rejection_to_error(correlation_id, rejection);
            return (StatusCode::BAD_REQUEST, Json(error)).into_response();
        }
    };

    let draft = match request.into_draft() {
        Ok(draft) => draft,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Invalid shift times");
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let lifecycle = ShiftLifecycle::new(state.store());
    match lifecycle.create(business_id, draft) {
        Ok(shift) => (StatusCode::CREATED, Json(shift)).into_response(),
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Shift creation rejected");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /businesses/:business_id/shifts.
///
/// Lists all of a business's shifts (active and inactive), ordered by
/// start time.
async fn list_shifts_handler(
    State(state): State<AppState>,
    Path(business_id): Path<Uuid>,
) -> impl IntoResponse {
    match state.store().shifts_for_business(business_id) {
        Ok(shifts) => (StatusCode::OK, Json(shifts)).into_response(),
        Err(err) => ApiErrorResponse::from(err).into_response(),
    }
}

/// Handler for PATCH /shifts/:shift_id.
async fn update_shift_handler(
    State(state): State<AppState>,
    Path(shift_id): Path<Uuid>,
    payload: Result<Json<UpdateShiftRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, shift_id = %shift_id, "Processing shift update");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            let error = rejection_to_error(correlation_id, rejection);
            return (StatusCode::BAD_REQUEST, Json(error)).into_response();
        }
    };

    let patch = match request.into_patch() {
        Ok(patch) => patch,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Invalid shift times");
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let lifecycle = ShiftLifecycle::new(state.store());
    match lifecycle.update(shift_id, patch) {
        Ok(shift) => (StatusCode::OK, Json(shift)).into_response(),
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Shift update rejected");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for DELETE /shifts/:shift_id.
async fn delete_shift_handler(
    State(state): State<AppState>,
    Path(shift_id): Path<Uuid>,
) -> impl IntoResponse {
    let lifecycle = ShiftLifecycle::new(state.store());
    match lifecycle.delete(shift_id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => ApiErrorResponse::from(err).into_response(),
    }
}

/// Handler for POST /shifts/:shift_id/toggle.
async fn toggle_shift_handler(
    State(state): State<AppState>,
    Path(shift_id): Path<Uuid>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    let lifecycle = ShiftLifecycle::new(state.store());
    match lifecycle.toggle_active(shift_id) {
        Ok(shift) => (StatusCode::OK, Json(shift)).into_response(),
        Err(err) => {
            warn!(correlation_id = %correlation_id, shift_id = %shift_id, error = %err, "Shift toggle rejected");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /businesses/:business_id/attribution.
///
/// Resolves a transaction instant to the business's active shift. A
/// well-formed request always gets a 200: lookup failures are logged inside
/// the attribution path and reported as an unmatched attribution, so the
/// transaction-creation collaborator is never blocked.
async fn attribution_handler(
    State(state): State<AppState>,
    Path(business_id): Path<Uuid>,
    payload: Result<Json<AttributionRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            let error = rejection_to_error(correlation_id, rejection);
            return (StatusCode::BAD_REQUEST, Json(error)).into_response();
        }
    };

    let attribution = attribute_transaction(&state.store(), business_id, request.timestamp);
    info!(
        correlation_id = %correlation_id,
        business_id = %business_id,
        matched = attribution.is_matched(),
        "Attributed transaction instant"
    );
    (StatusCode::OK, Json(attribution)).into_response()
}
