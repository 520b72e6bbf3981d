/// A contact-form submission. Lives for the duration of one request: built
/// from the request body, handed to the mailer, dropped.
pub struct Submission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl Submission {
    /// All three fields must be non-empty after trimming. The check is
    /// aggregate: a single missing field and three missing fields produce
    /// the same error.
    pub fn new(name: String, email: String, message: String) -> Result<Self, String> {
        if name.trim().is_empty() || email.trim().is_empty() || message.trim().is_empty() {
            return Err("All fields are required".into());
        }

        Ok(Self {
            name,
            email,
            message,
        })
    }
}
