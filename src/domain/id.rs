use derive_more::Display;
use serde::{Deserialize, Serialize};

use super::error::AuditError;

fn validate(kind: &str, id: String) -> Result<String, AuditError> {
    if id.trim().is_empty() {
        return Err(AuditError::Validation(format!("{kind} must not be empty")));
    }
    Ok(id)
}

/// Audit record identifier. Never reused upstream.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Result<Self, AuditError> {
        validate("RecordId", id.into()).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Identifier of the user who performed an audited action.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Result<Self, AuditError> {
        validate("UserId", id.into()).map(Self)
    }

    /// Upstream payloads bypass `new`, so an empty id can still arrive.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Document identifier. May refer to a document that has since been deleted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    pub fn new(id: impl Into<String>) -> Result<Self, AuditError> {
        validate("DocumentId", id.into()).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
