//! Port interfaces for reconciliation
//!
//! These traits define the boundaries between core business logic
//! and infrastructure implementations.

use async_trait::async_trait;
use packlist_domain::{ErpAcknowledgement, ErpSubmissionEntry, PersistedEditState, Result};

/// Durable key-value persistence for the per-session edit state.
#[async_trait]
pub trait EditStateStore: Send + Sync {
    /// Load the state saved under the session key, if any.
    ///
    /// Implementations treat unreadable or corrupt state as absent so the
    /// caller can fall back to fresh seeding.
    async fn load(&self, session_key: &str) -> Result<Option<PersistedEditState>>;

    /// Persist the full edit state under the session key.
    async fn save(&self, session_key: &str, state: &PersistedEditState) -> Result<()>;

    /// Remove any state saved under the session key.
    async fn remove(&self, session_key: &str) -> Result<()>;
}

/// Client for the ERP packing list endpoint.
#[async_trait]
pub trait ErpClient: Send + Sync {
    /// Submit the re-nested packing lists and return the parsed
    /// acknowledgement.
    async fn submit(&self, entries: &[ErpSubmissionEntry]) -> Result<ErpAcknowledgement>;
}
