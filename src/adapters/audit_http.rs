use {
    crate::{
        AppState,
        adapters::api_errors::ApiError,
        domain::{audit::AuditRecord, view::RenderedTrail},
        services::audit_trail::{load_audit_trail, load_view},
    },
    axum::{Json, Router, extract::State, routing::get},
    std::time::Duration,
    tower_http::timeout::TimeoutLayer,
};

pub fn router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .route("/", get(|| async { "ok" }))
        .route("/audit/trail", get(audit_trail_handler))
        .route("/audit/trail/view", get(audit_trail_view_handler))
        .layer(TimeoutLayer::new(request_timeout))
        .with_state(state)
}

#[tracing::instrument(name = "audit_trail", skip_all, fields(lookup = tracing::field::Empty))]
pub async fn audit_trail_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<AuditRecord>>, ApiError> {
    tracing::Span::current().record("lookup", tracing::field::display(state.user_lookup));
    let records = load_audit_trail(&*state.backend, state.user_lookup).await?;
    tracing::info!(count = records.len(), "audit trail served");
    Ok(Json(records))
}

#[tracing::instrument(
    name = "audit_trail_view",
    skip_all,
    fields(lookup = tracing::field::Empty)
)]
pub async fn audit_trail_view_handler(State(state): State<AppState>) -> Json<RenderedTrail> {
    tracing::Span::current().record("lookup", tracing::field::display(state.user_lookup));
    let view = load_view(&*state.backend, state.user_lookup).await;
    if view.error.is_none() {
        tracing::info!(count = view.records.len(), "audit trail view rendered");
    }
    Json(view.render())
}
