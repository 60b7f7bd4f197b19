use {
    super::audit::{AuditAction, AuditRecord},
    chrono::{DateTime, NaiveDateTime},
    serde::Serialize,
};

pub const NO_DOCUMENT: &str = "N/A";
pub const NO_DETAILS: &str = "No additional details";

const DISPLAY_FORMAT: &str = "%b %-d, %Y %-I:%M %p";

/// Icon shown next to each action in the activity log.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActionIcon {
    Upload,
    Edit,
    Trash,
    Download,
    Lock,
    Unlock,
    Share,
    File,
}

impl From<AuditAction> for ActionIcon {
    fn from(action: AuditAction) -> Self {
        match action {
            AuditAction::Create => Self::Upload,
            AuditAction::Update => Self::Edit,
            AuditAction::Delete => Self::Trash,
            AuditAction::Download => Self::Download,
            AuditAction::Encrypt => Self::Lock,
            AuditAction::Decrypt => Self::Unlock,
            AuditAction::Share => Self::Share,
            AuditAction::Other => Self::File,
        }
    }
}

/// Format an upstream timestamp as `Sep 10, 2023 10:00 AM`.
///
/// Accepts RFC 3339 and offset-less ISO-8601. Anything else is returned as-is.
pub fn format_timestamp(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format(DISPLAY_FORMAT).to_string();
    }
    match NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        Ok(dt) => dt.format(DISPLAY_FORMAT).to_string(),
        Err(_) => raw.to_string(),
    }
}

/// One row of the activity log, every cell already resolved to text.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AuditRow {
    pub id: String,
    pub action: String,
    pub icon: ActionIcon,
    pub document: String,
    pub user: String,
    pub timestamp: String,
    pub details: String,
}

impl From<&AuditRecord> for AuditRow {
    fn from(record: &AuditRecord) -> Self {
        Self {
            id: record.id.to_string(),
            action: record.action.as_str().to_string(),
            icon: record.action.into(),
            document: record
                .document_name
                .clone()
                .filter(|d| !d.is_empty())
                .unwrap_or_else(|| NO_DOCUMENT.to_string()),
            user: record
                .user_name
                .clone()
                .filter(|u| !u.is_empty())
                .unwrap_or_else(|| record.user_id.to_string()),
            timestamp: format_timestamp(&record.timestamp),
            details: record
                .details
                .clone()
                .filter(|d| !d.is_empty())
                .unwrap_or_else(|| NO_DETAILS.to_string()),
        }
    }
}

/// Outcome of loading the audit trail for one render.
///
/// `error` is set only when the trail itself could not be fetched, in which
/// case `records` is empty.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct AuditTrailView {
    pub error: Option<String>,
    pub records: Vec<AuditRecord>,
}

impl AuditTrailView {
    pub fn loaded(records: Vec<AuditRecord>) -> Self {
        Self {
            error: None,
            records,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            records: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn rows(&self) -> Vec<AuditRow> {
        self.records.iter().map(AuditRow::from).collect()
    }

    pub fn render(&self) -> RenderedTrail {
        RenderedTrail {
            error: self.error.clone(),
            rows: self.rows(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RenderedTrail {
    pub error: Option<String>,
    pub rows: Vec<AuditRow>,
}
