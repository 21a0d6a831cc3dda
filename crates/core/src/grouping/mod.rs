//! Grouping and PWNID validation
//!
//! Derives per-purchase-order groups and completion statistics from the flat
//! record set plus the current edit state. Everything here is pure; invalid
//! input is classified, never raised.

use std::collections::HashMap;

use packlist_domain::{
    BuyerPoGroup, CompletionStats, CompletionStatus, EditStateMap, FlatPackingRecord,
};

/// A PWNID is valid when it is present and a strictly positive integer.
/// Zero, negatives, and absent values all count as incomplete.
#[must_use]
pub fn is_valid_pwnid(pwnid: Option<i64>) -> bool {
    matches!(pwnid, Some(n) if n > 0)
}

/// Derive one [`BuyerPoGroup`] per distinct buyer PO.
///
/// The effective PWNID comes from the edit state when it holds an entry for
/// the key (including an explicit `None` for a cleared value); otherwise the
/// record's own value applies. Groups sort incomplete-first, then ascending
/// by buyer PO; the order is contractual, callers render it as-is.
#[must_use]
pub fn group_records(records: &[FlatPackingRecord], edits: &EditStateMap) -> Vec<BuyerPoGroup> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut effective: HashMap<&str, Option<i64>> = HashMap::new();

    for record in records {
        *counts.entry(record.buyer_po.as_str()).or_insert(0) += 1;
        effective.entry(record.buyer_po.as_str()).or_insert_with(|| {
            match edits.get(&record.buyer_po) {
                Some(edited) => *edited,
                None => record.pwnid,
            }
        });
    }

    let mut groups: Vec<BuyerPoGroup> = counts
        .into_iter()
        .map(|(buyer_po, record_count)| {
            let pwnid = effective.get(buyer_po).copied().flatten();
            let status = if is_valid_pwnid(pwnid) {
                CompletionStatus::Complete
            } else {
                CompletionStatus::Incomplete
            };
            BuyerPoGroup { buyer_po: buyer_po.to_string(), pwnid, status, record_count }
        })
        .collect();

    groups.sort_by(|a, b| a.status.cmp(&b.status).then_with(|| a.buyer_po.cmp(&b.buyer_po)));
    groups
}

/// Aggregate completion statistics over a group list.
///
/// `percentage` is exactly `0.0` for an empty list rather than NaN.
#[must_use]
pub fn compute_stats(groups: &[BuyerPoGroup]) -> CompletionStats {
    let total = groups.len();
    let complete = groups.iter().filter(|g| g.status == CompletionStatus::Complete).count();
    let incomplete = total - complete;
    #[allow(clippy::cast_precision_loss)]
    let percentage =
        if total == 0 { 0.0 } else { complete as f64 / total as f64 * 100.0 };

    CompletionStats { total, complete, incomplete, percentage }
}

/// Parse raw user input into a PWNID.
///
/// Trims whitespace; an empty field clears the value. Anything that is not a
/// finite, strictly positive integer is a soft validation failure returning
/// `None` — surfacing the message is the caller's job.
#[must_use]
pub fn parse_pwnid_input(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let value: f64 = trimmed.parse().ok()?;
    if !value.is_finite() || value.fract() != 0.0 || value <= 0.0 {
        return None;
    }
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    let parsed = if value > i64::MAX as f64 { None } else { Some(value as i64) };
    parsed
}
