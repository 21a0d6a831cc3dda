//! Reconciliation service - core business logic

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use packlist_domain::constants::{AUTOSAVE_DEBOUNCE_MS, DEFAULT_SESSION_ID, SESSION_KEY_PREFIX};
use packlist_domain::{
    BuyerPoGroup, CompletionStats, EditStateMap, FlatPackingRecord, PersistedEditState,
    Result, SubmissionOutcome,
};
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

use super::debounce::Debouncer;
use super::ports::{EditStateStore, ErpClient};
use crate::grouping::{compute_stats, group_records};
use crate::submit::build_submission;

/// Session identity and autosave tuning for a [`ReconciliationService`].
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Identifier scoping the durable session key. `None` uses the shared
    /// "current" session.
    pub session_id: Option<String>,
    /// Quiet period before edits are durably persisted.
    pub autosave_debounce: Duration,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self { session_id: None, autosave_debounce: Duration::from_millis(AUTOSAVE_DEBOUNCE_MS) }
    }
}

/// Mutable reconciliation state, owned exclusively by the service.
struct ReconcileState {
    records: Vec<FlatPackingRecord>,
    pwnid_state: EditStateMap,
    dirty: bool,
    last_saved: Option<DateTime<Utc>>,
    /// Bumped on every mutation; a persist only clears `dirty` when no
    /// mutation happened while its write was in flight.
    generation: u64,
}

impl ReconcileState {
    /// Rewrite every record's PWNID from the edit state. Records whose key
    /// has no entry keep their own value. This is what maintains the
    /// all-rows-of-a-PO-agree invariant.
    fn remerge(&mut self) {
        for record in &mut self.records {
            if let Some(edited) = self.pwnid_state.get(&record.buyer_po) {
                record.pwnid = *edited;
            }
        }
    }
}

/// Single source of truth for user-entered PWNID values.
///
/// Hydrates from durable storage when a previous session state exists,
/// otherwise seeds from the supplied records. All mutations flow through
/// [`update_pwnid`](Self::update_pwnid) and are persisted on a trailing-edge
/// debounce.
pub struct ReconciliationService {
    store: Arc<dyn EditStateStore>,
    erp: Arc<dyn ErpClient>,
    session_id: String,
    session_key: String,
    state: Arc<Mutex<ReconcileState>>,
    autosave: Debouncer,
}

impl ReconciliationService {
    /// Build the service and hydrate its edit state.
    ///
    /// Durable state under the session key is authoritative whenever present;
    /// the supplied records only seed the state when storage has nothing (or
    /// cannot be read, which is logged and treated as nothing).
    pub async fn hydrate(
        records: Vec<FlatPackingRecord>,
        store: Arc<dyn EditStateStore>,
        erp: Arc<dyn ErpClient>,
        options: SessionOptions,
    ) -> Self {
        let session_id =
            options.session_id.unwrap_or_else(|| DEFAULT_SESSION_ID.to_string());
        let session_key = format!("{SESSION_KEY_PREFIX}:{session_id}");

        let persisted = match store.load(&session_key).await {
            Ok(state) => state,
            Err(err) => {
                warn!(%session_key, error = %err, "failed to read persisted edit state, seeding fresh");
                None
            }
        };

        let (pwnid_state, last_saved) = match persisted {
            Some(saved) => {
                debug!(%session_key, entries = saved.pwnid_state.len(), "hydrated edit state from storage");
                (saved.pwnid_state, Some(saved.last_saved))
            }
            None => (seed_from_records(&records), None),
        };

        let mut state =
            ReconcileState { records, pwnid_state, dirty: false, last_saved, generation: 0 };
        state.remerge();

        Self {
            store,
            erp,
            session_id,
            session_key,
            state: Arc::new(Mutex::new(state)),
            autosave: Debouncer::new(options.autosave_debounce),
        }
    }

    /// Durable key this session persists under.
    #[must_use]
    pub fn session_key(&self) -> &str {
        &self.session_key
    }

    /// Overwrite the PWNID for a buyer PO and re-merge into the records.
    ///
    /// No validation happens here; the UI validates via
    /// [`parse_pwnid_input`](crate::grouping::parse_pwnid_input) and the
    /// grouper classifies whatever is stored. Arms the autosave debounce.
    pub async fn update_pwnid(&self, buyer_po: &str, value: Option<i64>) {
        {
            let mut state = self.state.lock().await;
            state.pwnid_state.insert(buyer_po.to_string(), value);
            state.dirty = true;
            state.generation += 1;
            state.remerge();
        }
        self.arm_autosave();
    }

    /// Apply many PWNID values at once (spreadsheet re-import path).
    ///
    /// One re-merge and one debounce arm for the whole batch.
    pub async fn apply_bulk(&self, values: &EditStateMap) {
        if values.is_empty() {
            return;
        }
        {
            let mut state = self.state.lock().await;
            for (buyer_po, value) in values {
                state.pwnid_state.insert(buyer_po.clone(), *value);
            }
            state.dirty = true;
            state.generation += 1;
            state.remerge();
        }
        self.arm_autosave();
    }

    /// Current purchase-order groups, incomplete first.
    pub async fn groups(&self) -> Vec<BuyerPoGroup> {
        let state = self.state.lock().await;
        group_records(&state.records, &state.pwnid_state)
    }

    /// Current completion statistics.
    pub async fn stats(&self) -> CompletionStats {
        compute_stats(&self.groups().await)
    }

    /// Snapshot of the flat records with edits merged in.
    pub async fn records(&self) -> Vec<FlatPackingRecord> {
        self.state.lock().await.records.clone()
    }

    /// Snapshot of the raw edit state.
    pub async fn edit_state(&self) -> EditStateMap {
        self.state.lock().await.pwnid_state.clone()
    }

    /// Whether edits exist that have not reached durable storage.
    pub async fn has_unsaved_changes(&self) -> bool {
        self.state.lock().await.dirty
    }

    /// Timestamp of the most recent durable write, if any.
    pub async fn last_saved(&self) -> Option<DateTime<Utc>> {
        self.state.lock().await.last_saved
    }

    /// Persist immediately, cancelling any pending debounced save.
    ///
    /// Call on teardown so the final keystrokes are not lost to a timer that
    /// never fires.
    pub async fn flush(&self) -> Result<()> {
        self.autosave.cancel();
        persist(&self.store, &self.state, &self.session_key, &self.session_id).await
    }

    /// Re-nest the reconciled records and submit them to the ERP.
    ///
    /// Refuses (without any network call) while incomplete groups remain.
    /// Transport and HTTP failures come back as rejected outcomes, never as
    /// errors.
    pub async fn send_to_erp(&self) -> SubmissionOutcome {
        let entries = {
            let state = self.state.lock().await;
            let groups = group_records(&state.records, &state.pwnid_state);
            let stats = compute_stats(&groups);
            if stats.incomplete > 0 {
                return SubmissionOutcome::Rejected {
                    error: format!(
                        "cannot submit: {} of {} purchase orders are missing a valid PWNID",
                        stats.incomplete, stats.total
                    ),
                };
            }
            build_submission(&state.records, &state.pwnid_state)
        };

        info!(entries = entries.len(), "submitting packing lists to ERP");
        match self.erp.submit(&entries).await {
            Ok(response) => {
                for warning in &response.warnings {
                    warn!(%warning, "ERP accepted submission with warning");
                }
                SubmissionOutcome::Accepted { response }
            }
            Err(err) => {
                error!(error = %err, "ERP submission failed");
                SubmissionOutcome::Rejected { error: err.to_string() }
            }
        }
    }

    fn arm_autosave(&self) {
        let store = Arc::clone(&self.store);
        let state = Arc::clone(&self.state);
        let session_key = self.session_key.clone();
        let session_id = self.session_id.clone();
        self.autosave.call(async move {
            if let Err(err) = persist(&store, &state, &session_key, &session_id).await {
                warn!(%session_key, error = %err, "debounced autosave failed, state remains unsaved");
            }
        });
    }
}

/// Seed the edit state from the first-seen PWNID per distinct buyer PO.
fn seed_from_records(records: &[FlatPackingRecord]) -> EditStateMap {
    let mut seeded = EditStateMap::new();
    for record in records {
        seeded.entry(record.buyer_po.clone()).or_insert(record.pwnid);
    }
    seeded
}

/// Write the full edit state to durable storage.
///
/// `dirty` only clears when no mutation landed while the write was in
/// flight, so a failed or raced save keeps surfacing as unsaved.
async fn persist(
    store: &Arc<dyn EditStateStore>,
    state: &Arc<Mutex<ReconcileState>>,
    session_key: &str,
    session_id: &str,
) -> Result<()> {
    let (snapshot, generation) = {
        let state = state.lock().await;
        (state.pwnid_state.clone(), state.generation)
    };

    let saved_at = Utc::now();
    let persisted = PersistedEditState {
        pwnid_state: snapshot,
        last_saved: saved_at,
        session_id: session_id.to_string(),
    };

    store.save(session_key, &persisted).await?;

    let mut state = state.lock().await;
    if state.generation == generation {
        state.dirty = false;
    }
    state.last_saved = Some(saved_at);
    debug!(%session_key, "edit state persisted");
    Ok(())
}
