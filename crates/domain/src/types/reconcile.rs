//! User edit state and its durable form

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// In-progress PWNID edits, keyed by buyer PO.
///
/// An entry of `None` means the user explicitly cleared the value; a missing
/// key means the user never touched that purchase order.
pub type EditStateMap = HashMap<String, Option<i64>>;

/// The edit state as written to durable per-session storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedEditState {
    pub pwnid_state: EditStateMap,
    pub last_saved: DateTime<Utc>,
    pub session_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persisted_state_uses_camel_case_keys() {
        let mut map = EditStateMap::new();
        map.insert("PO-1".into(), Some(42));
        map.insert("PO-2".into(), None);

        let state = PersistedEditState {
            pwnid_state: map,
            last_saved: Utc::now(),
            session_id: "current".into(),
        };

        let json = serde_json::to_string(&state).unwrap();
        assert!(json.contains("pwnidState"));
        assert!(json.contains("lastSaved"));
        assert!(json.contains("sessionId"));

        let back: PersistedEditState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
        assert_eq!(back.pwnid_state.get("PO-1"), Some(&Some(42)));
        assert_eq!(back.pwnid_state.get("PO-2"), Some(&None));
    }
}
