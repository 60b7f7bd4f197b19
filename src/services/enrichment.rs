use {
    crate::domain::{
        audit::{AuditRecord, DELETED_DOCUMENT},
        backend::{AuditBackend, UserLookup},
        id::{DocumentId, RecordId, UserId},
    },
    futures::future::join_all,
};

/// Attach `user_name` and `document_name` to every record.
///
/// Records are enriched concurrently and the call returns once all of them
/// have settled. Output has the same length and order as the input. Lookup
/// failures never escape: a missing document becomes [`DELETED_DOCUMENT`],
/// a missing user leaves `user_name` unset.
pub async fn enrich_records(
    backend: &dyn AuditBackend,
    records: Vec<AuditRecord>,
    lookup: UserLookup,
) -> Vec<AuditRecord> {
    if records.is_empty() {
        return records;
    }

    join_all(
        records
            .into_iter()
            .map(|record| enrich_record(backend, record, lookup)),
    )
    .await
}

/// Enrich a single record. The user and document lookups run side by side
/// and fail independently. A blank `user_id` gets no user lookup.
pub async fn enrich_record(
    backend: &dyn AuditBackend,
    mut record: AuditRecord,
    lookup: UserLookup,
) -> AuditRecord {
    let user = async {
        if record.user_id.is_blank() {
            return None;
        }
        resolve_user_name(backend, &record.id, &record.user_id, lookup).await
    };
    let document = async {
        match &record.document_id {
            Some(id) => Some(resolve_document_name(backend, &record.id, id).await),
            None => None,
        }
    };

    let (user_name, document_name) = futures::join!(user, document);

    record.user_name = user_name;
    record.document_name = document_name;
    record
}

async fn resolve_user_name(
    backend: &dyn AuditBackend,
    record_id: &RecordId,
    user_id: &UserId,
    lookup: UserLookup,
) -> Option<String> {
    let result = match lookup {
        UserLookup::RecordAuthor => backend.user(user_id).await,
        UserLookup::Viewer => backend.current_user().await,
    };

    match result {
        Ok(profile) => Some(profile.name),
        Err(e) => {
            tracing::debug!(
                record_id = %record_id,
                user_id = %user_id,
                mode = %lookup,
                error = %e,
                "user lookup failed, leaving name unset"
            );
            None
        }
    }
}

async fn resolve_document_name(
    backend: &dyn AuditBackend,
    record_id: &RecordId,
    document_id: &DocumentId,
) -> String {
    match backend.document(document_id).await {
        Ok(document) => document.name,
        Err(e) => {
            tracing::warn!(
                record_id = %record_id,
                document_id = %document_id,
                error = %e,
                "document lookup failed, assuming deleted"
            );
            DELETED_DOCUMENT.to_string()
        }
    }
}
