pub mod api_errors;
pub mod audit_http;
pub mod document_api;
