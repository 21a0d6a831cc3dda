//! # Packlist Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The payload flattener (nested webhook JSON → flat records)
//! - The grouper/validator (purchase-order groups, completion stats)
//! - The reconciliation service and its port interfaces (traits)
//! - The ERP submission builder (flat records → nested submission)
//! - The tabular export row model
//!
//! ## Architecture Principles
//! - Only depends on `packlist-domain`
//! - No HTTP or filesystem code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod export;
pub mod flatten;
pub mod grouping;
pub mod reconcile;
pub mod submit;

// Re-export specific items to avoid ambiguity
pub use export::{to_export_rows, ExportRow};
pub use flatten::{flatten_payload, FlattenOutcome};
pub use grouping::{compute_stats, group_records, is_valid_pwnid, parse_pwnid_input};
pub use reconcile::ports::{EditStateStore, ErpClient};
pub use reconcile::{ReconciliationService, SessionOptions};
pub use submit::build_submission;
