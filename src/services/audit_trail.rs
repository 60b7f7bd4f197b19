use {
    crate::domain::{
        audit::AuditRecord,
        backend::{AuditBackend, UserLookup},
        error::AuditError,
        view::AuditTrailView,
    },
    crate::services::enrichment::enrich_records,
};

/// Fetch the raw trail, then enrich it.
///
/// Only a failure of the initial fetch is returned; per-record lookups
/// degrade inside [`enrich_records`].
pub async fn load_audit_trail(
    backend: &dyn AuditBackend,
    lookup: UserLookup,
) -> Result<Vec<AuditRecord>, AuditError> {
    let raw = backend.audit_trail().await?;
    tracing::debug!(count = raw.len(), "fetched raw audit records");

    let records = enrich_records(backend, raw, lookup).await;
    let missing_users = records.iter().filter(|r| r.user_name.is_none()).count();
    if missing_users > 0 {
        tracing::debug!(missing_users, "some user names could not be resolved");
    }
    Ok(records)
}

/// Same as [`load_audit_trail`] but folds a fetch failure into the view.
pub async fn load_view(backend: &dyn AuditBackend, lookup: UserLookup) -> AuditTrailView {
    match load_audit_trail(backend, lookup).await {
        Ok(records) => AuditTrailView::loaded(records),
        Err(e) => {
            tracing::error!(error = %e, "failed to fetch audit trail");
            AuditTrailView::failed(e.user_message())
        }
    }
}
