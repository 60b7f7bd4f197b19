use {
    crate::domain::{backend::UserLookup, error::AuditError},
    std::{env, net::SocketAddr, time::Duration},
};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    pub document_api_url: String,
    pub document_api_token: String,
    pub bind_addr: SocketAddr,
    pub user_lookup: UserLookup,
    pub request_timeout: Duration,
}

impl Config {
    /// Read settings from the process environment. Call `dotenvy::dotenv()`
    /// first if a `.env` file should be honoured.
    pub fn from_env() -> Result<Self, AuditError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, AuditError> {
        let required = |key: &str| {
            get(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| AuditError::Config(format!("{key} must be set")))
        };

        let document_api_url = required("DOCUMENT_API_URL")?;
        let document_api_token = required("DOCUMENT_API_TOKEN")?;

        let bind_addr = get("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| AuditError::Config(format!("invalid BIND_ADDR: {e}")))?;

        let user_lookup = match get("AUDIT_USER_LOOKUP") {
            Some(mode) => UserLookup::try_from(mode.trim())
                .map_err(|e| AuditError::Config(format!("invalid AUDIT_USER_LOOKUP: {e}")))?,
            None => UserLookup::default(),
        };

        let timeout_secs = match get("REQUEST_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|&secs| secs > 0)
                .ok_or_else(|| {
                    AuditError::Config(format!(
                        "REQUEST_TIMEOUT_SECS must be a positive integer, got: {raw}"
                    ))
                })?,
            None => DEFAULT_REQUEST_TIMEOUT_SECS,
        };

        Ok(Self {
            document_api_url,
            document_api_token,
            bind_addr,
            user_lookup,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }
}
