//! Derived purchase-order groups and completion statistics

use serde::{Deserialize, Serialize};

/// Completion state of a purchase-order group.
///
/// `Incomplete` sorts before `Complete` so unfinished work surfaces first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompletionStatus {
    Incomplete,
    Complete,
}

/// One entry per distinct buyer PO, derived from the flat record set and the
/// current edit state. Never persisted; recomputed on every change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuyerPoGroup {
    /// Buyer purchase order number (the group key).
    pub buyer_po: String,
    /// Effective PWNID for the group, edit state taking precedence.
    pub pwnid: Option<i64>,
    pub status: CompletionStatus,
    /// Number of flat records sharing this key (not distinct packs).
    pub record_count: usize,
}

/// Snapshot of overall PWNID completion progress.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompletionStats {
    pub total: usize,
    pub complete: usize,
    pub incomplete: usize,
    /// `complete / total * 100`, defined as exactly 0 when there are no
    /// groups.
    pub percentage: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incomplete_orders_before_complete() {
        assert!(CompletionStatus::Incomplete < CompletionStatus::Complete);
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&CompletionStatus::Complete).unwrap();
        assert_eq!(json, "\"complete\"");
        let back: CompletionStatus = serde_json::from_str("\"incomplete\"").unwrap();
        assert_eq!(back, CompletionStatus::Incomplete);
    }

    #[test]
    fn group_serialization() {
        let group = BuyerPoGroup {
            buyer_po: "PO-7".into(),
            pwnid: None,
            status: CompletionStatus::Incomplete,
            record_count: 3,
        };
        let json = serde_json::to_string(&group).unwrap();
        assert!(json.contains("\"buyer_po\":\"PO-7\""));
        assert!(json.contains("\"incomplete\""));
    }
}
