pub mod adapters;
pub mod config;
pub mod domain;
pub mod services;

use {crate::domain::backend::{AuditBackend, UserLookup}, std::sync::Arc};

#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<dyn AuditBackend>,
    pub user_lookup: UserLookup,
}
