use axum::Json;
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppJson;
use crate::models::submission::{SubmissionRequest, SubmitResponse, validate_submission};

#[utoipa::path(
    post,
    path = "/submit",
    tag = "Submissions",
    operation_id = "submitForm",
    summary = "Submit the contact form",
    description = "Acknowledges a name/email pair. Both fields must be present and non-empty; the email format is not checked. Nothing is stored.",
    request_body = SubmissionRequest,
    responses(
        (status = 200, description = "Submission acknowledged", body = SubmitResponse),
        (status = 400, description = "Missing field or undecodable body", body = ErrorBody),
    ),
)]
#[instrument(skip_all)]
pub async fn submit_form(
    AppJson(payload): AppJson<SubmissionRequest>,
) -> Result<Json<SubmitResponse>, AppError> {
    let submission = validate_submission(payload)?;

    tracing::info!(
        name = %submission.name,
        email = %submission.email,
        "Received submission"
    );

    Ok(Json(submission.acknowledgment()))
}
