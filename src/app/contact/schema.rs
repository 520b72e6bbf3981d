use serde::Deserialize;

use crate::domain::submission::Submission;

/// Raw request payload. Fields are optional so that an absent key and an
/// empty value fail validation the same way, with a 400 rather than a
/// deserialization rejection.
#[derive(Deserialize)]
pub struct SendBody {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

impl TryFrom<SendBody> for Submission {
    type Error = String;

    fn try_from(value: SendBody) -> Result<Self, Self::Error> {
        Submission::new(
            value.name.unwrap_or_default(),
            value.email.unwrap_or_default(),
            value.message.unwrap_or_default(),
        )
    }
}

#[derive(serde::Serialize)]
pub struct SendResponse {
    pub success: bool,
    pub message: String,
}
