use crate::error::AppError;

/// Plain-text reply of the panel's POST endpoints. The backend answers
/// `Success`, or a message starting with `Error` and a 200 status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitReply {
    pub accepted: bool,
    pub message: String,
}

impl SubmitReply {
    pub fn parse(body: &str) -> Self {
        let message = body.trim().to_string();
        Self {
            accepted: !message.starts_with("Error"),
            message,
        }
    }

    pub fn into_result(self) -> Result<Self, AppError> {
        if self.accepted {
            Ok(self)
        } else {
            Err(AppError::Rejected {
                message: self.message,
            })
        }
    }
}
