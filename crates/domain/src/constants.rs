//! Domain constants shared across the pipeline

/// Quiet period after the last PWNID edit before the edit state is
/// durably persisted (trailing-edge debounce).
pub const AUTOSAVE_DEBOUNCE_MS: u64 = 2_000;

/// Namespace prefix for durable session keys.
pub const SESSION_KEY_PREFIX: &str = "packing-list-reconciliation";

/// Session identifier used when the caller supplies none.
pub const DEFAULT_SESSION_ID: &str = "current";

/// Default request timeout for ERP submissions, in seconds.
pub const DEFAULT_ERP_TIMEOUT_SECS: u64 = 30;
