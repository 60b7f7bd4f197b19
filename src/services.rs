pub mod audit_trail;
pub mod enrichment;
