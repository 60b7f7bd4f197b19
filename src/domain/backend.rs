use {
    super::audit::AuditRecord,
    super::error::AuditError,
    super::id::{DocumentId, UserId},
    serde::{Deserialize, Serialize},
    std::{fmt, future::Future, pin::Pin},
};

/// User payload from `/api/users/...`. Only `name` is used as a label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub id: Option<UserId>,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

/// The subset of `/api/documents/{id}` the audit trail cares about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSummary {
    pub id: DocumentId,
    pub name: String,
}

/// Whose name goes into `user_name`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UserLookup {
    /// Resolve the `user_id` on each record.
    #[default]
    RecordAuthor,
    /// Resolve the calling user for every record, whoever the author is.
    Viewer,
}

impl UserLookup {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RecordAuthor => "author",
            Self::Viewer => "viewer",
        }
    }
}

impl fmt::Display for UserLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for UserLookup {
    type Error = AuditError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "author" => Ok(Self::RecordAuthor),
            "viewer" => Ok(Self::Viewer),
            other => Err(AuditError::Validation(format!(
                "unknown user lookup mode: {other}"
            ))),
        }
    }
}

pub type BackendFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, AuditError>> + Send + 'a>>;

/// The document API as seen by the audit trail.
pub trait AuditBackend: Send + Sync {
    fn audit_trail(&self) -> BackendFuture<'_, Vec<AuditRecord>>;

    fn current_user(&self) -> BackendFuture<'_, UserProfile>;

    fn user(&self, id: &UserId) -> BackendFuture<'_, UserProfile>;

    fn document(&self, id: &DocumentId) -> BackendFuture<'_, DocumentSummary>;
}
