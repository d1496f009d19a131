use axum::Json;
use axum::extract::State;
use chrono::Utc;
use serde_json::{Value, json};

use crate::error::AppError;
use crate::state::SharedState;
use crate::submission::schema;

/// Receives a sign-up, validates it, and appends one row to the destination
/// sheet. Resubmissions append duplicate rows; there is no dedup key.
pub async fn submit_signup(
    State(state): State<SharedState>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, AppError> {
    let flow = body
        .get("flowType")
        .and_then(Value::as_str)
        .unwrap_or("unknown");

    let submission = match schema::validate(&body) {
        Ok(submission) => submission,
        Err(errors) if schema::any_missing(&errors) => {
            tracing::info!(flow, "Rejected sign-up with missing fields");
            return Err(AppError::BadRequest("All fields are required".to_string()));
        }
        Err(errors) => {
            tracing::info!(flow, ?errors, "Rejected malformed sign-up");
            return Err(AppError::Validation(errors));
        }
    };

    let sheets = state
        .sheets
        .as_ref()
        .ok_or_else(|| AppError::Config("Missing Google API credentials".to_string()))?;

    // The flow is logged but not stored; the sheet layout has no flow column.
    tracing::info!(flow, email = %submission.email, "Appending sign-up to sheet");

    let row = submission.into_row(Utc::now());
    sheets.append_row(&row).await?;

    Ok(Json(json!({ "success": true })))
}
