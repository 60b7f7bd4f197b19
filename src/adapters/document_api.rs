use {
    crate::domain::{
        audit::AuditRecord,
        backend::{AuditBackend, BackendFuture, DocumentSummary, UserProfile},
        error::AuditError,
        id::{DocumentId, UserId},
    },
    reqwest::{Client, Url},
    serde::{Deserialize, de::DeserializeOwned},
};

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// `AuditBackend` over the document API's HTTP interface.
///
/// Every request carries the viewer's bearer token.
#[derive(Clone)]
pub struct DocumentApiClient {
    client: Client,
    base_url: Url,
    token: String,
}

impl DocumentApiClient {
    pub fn new(base_url: &str, token: impl Into<String>) -> Result<Self, AuditError> {
        Self::with_client(Client::new(), base_url, token)
    }

    pub fn with_client(
        client: Client,
        base_url: &str,
        token: impl Into<String>,
    ) -> Result<Self, AuditError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| AuditError::Config(format!("invalid document API url: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(AuditError::Config(format!(
                "document API url cannot be a base: {base_url}"
            )));
        }
        Ok(Self {
            client,
            base_url,
            token: token.into(),
        })
    }

    /// `{base}/api/{segments...}`, each segment percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, AuditError> {
        let mut url = self.base_url.clone();
        {
            let mut path = url.path_segments_mut().map_err(|_| {
                AuditError::Config(format!("document API url cannot be a base: {}", self.base_url))
            })?;
            path.pop_if_empty().push("api").extend(segments);
        }
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, AuditError> {
        let url = self.endpoint(segments)?;
        tracing::trace!(%url, "GET");

        let response = self
            .client
            .get(url)
            .bearer_auth(&self.token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .map(|b| b.error);
            return Err(AuditError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

impl AuditBackend for DocumentApiClient {
    fn audit_trail(&self) -> BackendFuture<'_, Vec<AuditRecord>> {
        Box::pin(async move { self.get_json(&["audit", "trail"]).await })
    }

    fn current_user(&self) -> BackendFuture<'_, UserProfile> {
        Box::pin(async move { self.get_json(&["users", "me"]).await })
    }

    fn user(&self, id: &UserId) -> BackendFuture<'_, UserProfile> {
        let id = id.clone();
        Box::pin(async move { self.get_json(&["users", id.as_str()]).await })
    }

    fn document(&self, id: &DocumentId) -> BackendFuture<'_, DocumentSummary> {
        let id = id.clone();
        Box::pin(async move { self.get_json(&["documents", id.as_str()]).await })
    }
}
