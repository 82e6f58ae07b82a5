use serde::{Deserialize, Deserializer, Serialize, de::Error as _};
use serde_json::{Map, Value};

use crate::error::AppError;

/// Request body for a form submission.
///
/// A missing key and an explicit `null` both decode to `None`. Only JSON objects
/// are accepted; unknown keys are ignored.
#[derive(Debug, utoipa::ToSchema)]
pub struct SubmissionRequest {
    /// Name of the person submitting the form.
    #[schema(example = "Alice")]
    pub name: Option<String>,
    /// Contact email. Only its presence is checked.
    #[schema(example = "alice@example.com")]
    pub email: Option<String>,
}

#[derive(Deserialize)]
struct SubmissionFields {
    name: Option<String>,
    email: Option<String>,
}

impl<'de> Deserialize<'de> for SubmissionRequest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Going through a map keeps serde from accepting arrays positionally.
        let object = Map::<String, Value>::deserialize(deserializer)?;
        let fields: SubmissionFields =
            serde_json::from_value(Value::Object(object)).map_err(D::Error::custom)?;
        Ok(Self {
            name: fields.name,
            email: fields.email,
        })
    }
}

/// A submission whose name and email are both present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub email: String,
}

impl Submission {
    pub fn acknowledgment(&self) -> SubmitResponse {
        SubmitResponse {
            message: format!("Form submitted successfully for {}!", self.name),
        }
    }
}

/// Successful submission response.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct SubmitResponse {
    #[schema(example = "Form submitted successfully for Alice!")]
    pub message: String,
}

fn present(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.is_empty())
}

/// Presence check: both fields must be non-null and non-empty.
/// Whitespace counts as content and the email shape is not inspected.
pub fn validate_submission(payload: SubmissionRequest) -> Result<Submission, AppError> {
    match (present(payload.name), present(payload.email)) {
        (Some(name), Some(email)) => Ok(Submission { name, email }),
        _ => Err(AppError::MissingField),
    }
}
