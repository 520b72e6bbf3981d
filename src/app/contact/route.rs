use axum::{extract::State, Json};
use tracing::instrument;

use super::schema;
use crate::{
    app::{
        error::{AppError, AppResult},
        extractor::JsonOrForm,
        AppState,
    },
    domain::submission::Submission,
};

#[instrument(name = "handling a contact form submission", skip(state, body))]
pub async fn send(
    State(state): State<AppState>,
    JsonOrForm(body): JsonOrForm<schema::SendBody>,
) -> AppResult<Json<schema::SendResponse>> {
    let submission = Submission::try_from(body).map_err(AppError::ValidationError)?;

    state
        .mailer
        .send(&submission)
        .await
        .map_err(|e| {
            tracing::error!(detail = e.to_string(), "failed to relay the submission");
            AppError::DeliveryError(e.to_string())
        })?;

    Ok(Json(schema::SendResponse {
        success: true,
        message: "Email sent successfully!".to_string(),
    }))
}
