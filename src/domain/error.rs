use thiserror::Error;

/// Shown when the upstream failed without an error message of its own.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch audit trail";

#[derive(Debug, Error)]
pub enum AuditError {
    #[error("validation: {0}")]
    Validation(String),

    #[error("http: {0}")]
    Http(#[from] reqwest::Error),

    #[error("upstream returned {status}: {}", or_unknown(.message))]
    Upstream { status: u16, message: Option<String> },

    #[error("serialization: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("config: {0}")]
    Config(String),
}

fn or_unknown(message: &Option<String>) -> &str {
    message.as_deref().unwrap_or("no error message")
}

impl AuditError {
    /// Message fit for the person looking at the audit trail.
    pub fn user_message(&self) -> String {
        match self {
            Self::Upstream {
                message: Some(message),
                ..
            } => message.clone(),
            _ => FETCH_FAILED_MESSAGE.to_string(),
        }
    }
}
