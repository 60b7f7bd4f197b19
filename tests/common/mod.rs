#![allow(dead_code)]

use docvault_audit::domain::audit::{AuditAction, AuditRecord};
use docvault_audit::domain::backend::{AuditBackend, BackendFuture, DocumentSummary, UserProfile};
use docvault_audit::domain::error::AuditError;
use docvault_audit::domain::id::{DocumentId, RecordId, UserId};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// In-memory stand-in for the document API.
///
/// Unknown users and documents answer 404. Every lookup can be delayed to
/// observe concurrency under a paused clock.
#[derive(Default)]
pub struct FakeBackend {
    pub trail: Option<Vec<AuditRecord>>,
    pub trail_error: Option<String>,
    pub viewer: Option<UserProfile>,
    pub users: HashMap<String, UserProfile>,
    pub documents: HashMap<String, DocumentSummary>,
    pub latency: Option<Duration>,
    pub trail_calls: AtomicUsize,
    pub viewer_calls: AtomicUsize,
    pub user_calls: AtomicUsize,
    pub document_calls: AtomicUsize,
}

impl FakeBackend {
    pub fn new(trail: Vec<AuditRecord>) -> Self {
        Self {
            trail: Some(trail),
            ..Self::default()
        }
    }

    /// The trail endpoint fails with a 500 and the given `{"error": ...}` body.
    pub fn failing(message: Option<&str>) -> Self {
        Self {
            trail: None,
            trail_error: message.map(str::to_string),
            ..Self::default()
        }
    }

    pub fn with_viewer(mut self, id: &str, name: &str) -> Self {
        self.viewer = Some(profile(id, name));
        self
    }

    pub fn with_user(mut self, id: &str, name: &str) -> Self {
        self.users.insert(id.to_string(), profile(id, name));
        self
    }

    pub fn with_document(mut self, id: &str, name: &str) -> Self {
        self.documents.insert(
            id.to_string(),
            DocumentSummary {
                id: DocumentId::new(id).unwrap(),
                name: name.to_string(),
            },
        );
        self
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    pub fn lookups(&self) -> usize {
        self.viewer_calls.load(Ordering::SeqCst)
            + self.user_calls.load(Ordering::SeqCst)
            + self.document_calls.load(Ordering::SeqCst)
    }

    async fn delay(&self) {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
    }
}

fn not_found() -> AuditError {
    AuditError::Upstream {
        status: 404,
        message: Some("Not Found".into()),
    }
}

impl AuditBackend for FakeBackend {
    fn audit_trail(&self) -> BackendFuture<'_, Vec<AuditRecord>> {
        self.trail_calls.fetch_add(1, Ordering::SeqCst);
        Box::pin(async move {
            self.delay().await;
            match &self.trail {
                Some(trail) => Ok(trail.clone()),
                None => Err(AuditError::Upstream {
                    status: 500,
                    message: self.trail_error.clone(),
                }),
            }
        })
    }

    fn current_user(&self) -> BackendFuture<'_, UserProfile> {
        self.viewer_calls.fetch_add(1, Ordering::SeqCst);
        Box::pin(async move {
            self.delay().await;
            self.viewer.clone().ok_or_else(|| AuditError::Upstream {
                status: 401,
                message: Some("Unauthorized".into()),
            })
        })
    }

    fn user(&self, id: &UserId) -> BackendFuture<'_, UserProfile> {
        self.user_calls.fetch_add(1, Ordering::SeqCst);
        let id = id.clone();
        Box::pin(async move {
            self.delay().await;
            self.users.get(id.as_str()).cloned().ok_or_else(not_found)
        })
    }

    fn document(&self, id: &DocumentId) -> BackendFuture<'_, DocumentSummary> {
        self.document_calls.fetch_add(1, Ordering::SeqCst);
        let id = id.clone();
        Box::pin(async move {
            self.delay().await;
            self.documents.get(id.as_str()).cloned().ok_or_else(not_found)
        })
    }
}

pub fn profile(id: &str, name: &str) -> UserProfile {
    UserProfile {
        id: Some(UserId::new(id).unwrap()),
        name: name.to_string(),
        email: None,
        role: None,
    }
}

/// Build a record with sensible defaults.
pub fn make_record(id: &str, user_id: &str, document_id: Option<&str>) -> AuditRecord {
    let record = AuditRecord::new(
        RecordId::new(id).unwrap(),
        UserId::new(user_id).unwrap(),
        AuditAction::Create,
        "2023-09-10T10:00:00Z",
    );
    match document_id {
        Some(doc) => record.with_document(DocumentId::new(doc).unwrap()),
        None => record,
    }
}

pub fn ids(records: &[AuditRecord]) -> Vec<&str> {
    records.iter().map(|r| r.id.as_str()).collect()
}
