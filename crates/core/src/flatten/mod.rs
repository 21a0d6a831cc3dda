//! Payload flattening
//!
//! Converts the nested buyer → packs → sizeDetail webhook payload into one
//! [`FlatPackingRecord`] per (pack × sizeDetail) pair.
//!
//! Each raw item is classified up front into one of a closed set of shapes:
//! the current "direct" shape, the legacy shape wrapped under
//! `message.content`, or unrecognized. Unrecognized items contribute zero
//! records and are skipped without error; upstream data is known to be
//! heterogeneous.

mod payload;

use packlist_domain::FlatPackingRecord;
use serde_json::Value;
use tracing::debug;

use payload::RawPackingItem;

/// Classified shape of one raw payload item.
#[derive(Debug)]
enum ItemShape {
    /// `{buyerPONumber, PWNID, packs: [...]}`
    Direct(RawPackingItem),
    /// Legacy `{message: {content: {...}}}` wrapper.
    Wrapped(RawPackingItem),
    Unrecognized,
}

/// Result of flattening one webhook response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlattenOutcome {
    /// Flat records in input traversal order (item → pack → sizeDetail).
    pub records: Vec<FlatPackingRecord>,
    /// Number of raw items that matched no known shape.
    pub skipped: usize,
}

/// Flatten a webhook payload into per-SKU-per-carton records.
///
/// Pure over its input: no reordering, no deduplication, no side effects
/// beyond debug logging of skipped items. Missing scalar fields default to
/// empty strings or zero; `PWNID` passes through as `None` when absent or
/// not an integer, never as zero.
#[must_use]
pub fn flatten_payload(items: &[Value]) -> FlattenOutcome {
    let mut outcome = FlattenOutcome::default();

    for (index, value) in items.iter().enumerate() {
        match classify_item(value) {
            ItemShape::Direct(item) | ItemShape::Wrapped(item) => {
                flatten_item(&item, &mut outcome.records);
            }
            ItemShape::Unrecognized => {
                debug!(index, "skipping payload item with unrecognized shape");
                outcome.skipped += 1;
            }
        }
    }

    outcome
}

/// Classify a raw item, preferring the legacy wrapper when both could match.
fn classify_item(value: &Value) -> ItemShape {
    if let Some(content) = value.get("message").and_then(|m| m.get("content")) {
        if let Ok(item) = serde_json::from_value::<RawPackingItem>(content.clone()) {
            return ItemShape::Wrapped(item);
        }
    }

    match serde_json::from_value::<RawPackingItem>(value.clone()) {
        Ok(item) => ItemShape::Direct(item),
        Err(_) => ItemShape::Unrecognized,
    }
}

fn flatten_item(item: &RawPackingItem, records: &mut Vec<FlatPackingRecord>) {
    // Non-integer PWNIDs (e.g. 2.5) are treated the same as absent.
    let pwnid = item.pwnid.as_ref().and_then(serde_json::Number::as_i64);

    for pack in &item.packs {
        for detail in &pack.size_detail {
            records.push(FlatPackingRecord {
                buyer_name: item.buyer_name.clone(),
                factory_name: item.factory_name.clone(),
                user_name: item.user_name.clone(),
                buyer_erp_code: item.buyer_erp_code.clone(),
                factory_erp_code: item.factory_erp_code.clone(),
                buyer_po: item.buyer_po_number.clone(),
                po_number_edi: item.po_number_edi.clone(),
                pwnid,
                destination_code: pack.destination_code.clone(),
                style: pack.style.clone(),
                dc: pack.dc.clone(),
                address: pack.address.clone(),
                city: pack.city.clone(),
                state: pack.state.clone(),
                postal_code: pack.postal_code.clone(),
                country: pack.country.clone(),
                cartons_qty: pack.cartons_qty,
                carton_length: pack.carton_length,
                carton_width: pack.carton_width,
                carton_height: pack.carton_height,
                carton_net_wg: pack.carton_net_wg,
                carton_gross_wg: pack.carton_gross_wg,
                nro_packing: pack.nro_packing,
                color_name: detail.color_name.clone(),
                size: detail.size.clone(),
                shipped_qty: detail.shipped_qty,
            });
        }
    }
}
