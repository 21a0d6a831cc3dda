//! PWNID reconciliation
//!
//! The [`ReconciliationService`] owns the user's in-progress PWNID edits,
//! keeps them synchronized with durable storage (debounced) and with the
//! flat record set, and gates submission to the ERP.

mod debounce;
pub mod ports;
mod service;

pub use debounce::Debouncer;
pub use service::{ReconciliationService, SessionOptions};
