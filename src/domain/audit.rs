use {
    super::id::{DocumentId, RecordId, UserId},
    serde::{Deserialize, Deserializer, Serialize},
    std::fmt,
};

/// Label used when a record's document can no longer be resolved.
pub const DELETED_DOCUMENT: &str = "Deleted Document";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    Create,
    Update,
    Delete,
    Download,
    Encrypt,
    Decrypt,
    Share,
    #[serde(other)]
    Other,
}

impl AuditAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Download => "download",
            Self::Encrypt => "encrypt",
            Self::Decrypt => "decrypt",
            Self::Share => "share",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// Unknown actions are still valid audit events, so this never fails.
impl From<&str> for AuditAction {
    fn from(s: &str) -> Self {
        match s {
            "create" => Self::Create,
            "update" => Self::Update,
            "delete" => Self::Delete,
            "download" => Self::Download,
            "encrypt" => Self::Encrypt,
            "decrypt" => Self::Decrypt,
            "share" => Self::Share,
            _ => Self::Other,
        }
    }
}

/// One audit event as returned by `GET /api/audit/trail`.
///
/// `user_name` and `document_name` are display labels filled in by
/// enrichment. They are never sent back upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditRecord {
    pub id: RecordId,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub document_id: Option<DocumentId>,
    pub user_id: UserId,
    pub action: AuditAction,
    pub timestamp: String,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_name: Option<String>,
}

// A blank document id references nothing, same as null.
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<DocumentId>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|id| DocumentId::new(id).ok()))
}

impl AuditRecord {
    pub fn new(
        id: RecordId,
        user_id: UserId,
        action: AuditAction,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            id,
            document_id: None,
            user_id,
            action,
            timestamp: timestamp.into(),
            details: None,
            user_name: None,
            document_name: None,
        }
    }

    pub fn with_document(mut self, document_id: DocumentId) -> Self {
        self.document_id = Some(document_id);
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn is_enriched(&self) -> bool {
        self.user_name.is_some() || self.document_name.is_some()
    }
}
