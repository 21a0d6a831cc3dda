//! ERP submission builder
//!
//! Inverts the flattener: regroups flat records into the nested
//! buyer → packs → sizeDetail shape the ERP endpoint expects.

use std::collections::HashMap;

use packlist_domain::{
    EditStateMap, ErpPack, ErpSizeDetail, ErpSubmissionEntry, FlatPackingRecord,
};

/// Re-nest flat records into one submission entry per buyer PO.
///
/// Within an entry, packs are rebuilt by the (destination code, style,
/// packing number) composite key; carton scalars come from the first record
/// of each pack (they are invariant within one), and every record
/// contributes a sizeDetail line. The edit state supplies the authoritative
/// PWNID, falling back to the record's own value only when the key has no
/// entry. Entries and packs come out in first-seen record order; the ERP
/// consumer is order-insensitive.
#[must_use]
pub fn build_submission(
    records: &[FlatPackingRecord],
    edits: &EditStateMap,
) -> Vec<ErpSubmissionEntry> {
    let mut entries: Vec<ErpSubmissionEntry> = Vec::new();
    let mut entry_index: HashMap<String, usize> = HashMap::new();
    // (entry index, pack key) → pack index within the entry
    let mut pack_index: HashMap<(usize, (String, String, i64)), usize> = HashMap::new();

    for record in records {
        let entry_pos = match entry_index.get(&record.buyer_po) {
            Some(pos) => *pos,
            None => {
                let pwnid = match edits.get(&record.buyer_po) {
                    Some(edited) => *edited,
                    None => record.pwnid,
                };
                entries.push(ErpSubmissionEntry {
                    buyer_name: record.buyer_name.clone(),
                    factory_name: record.factory_name.clone(),
                    user_name: record.user_name.clone(),
                    buyer_erp_code: record.buyer_erp_code.clone(),
                    factory_erp_code: record.factory_erp_code.clone(),
                    buyer_po_number: record.buyer_po.clone(),
                    po_number_edi: record.po_number_edi.clone(),
                    pwnid,
                    packs: Vec::new(),
                });
                let pos = entries.len() - 1;
                entry_index.insert(record.buyer_po.clone(), pos);
                pos
            }
        };

        let key = (entry_pos, record.pack_key());
        let pack_pos = match pack_index.get(&key) {
            Some(pos) => *pos,
            None => {
                entries[entry_pos].packs.push(new_pack(record));
                let pos = entries[entry_pos].packs.len() - 1;
                pack_index.insert(key, pos);
                pos
            }
        };

        entries[entry_pos].packs[pack_pos].size_detail.push(ErpSizeDetail {
            color_name: record.color_name.clone(),
            size: record.size.clone(),
            shipped_qty: record.shipped_qty,
        });
    }

    entries
}

fn new_pack(record: &FlatPackingRecord) -> ErpPack {
    ErpPack {
        // The legacy consumer reads the destination code under both names.
        address_destination: record.destination_code.clone(),
        destination_code: record.destination_code.clone(),
        style: record.style.clone(),
        dc: record.dc.clone(),
        address: record.address.clone(),
        city: record.city.clone(),
        postal_code: record.postal_code.clone(),
        state: record.state.clone(),
        country: record.country.clone(),
        cartons_qty: record.cartons_qty,
        carton_length: record.carton_length,
        carton_width: record.carton_width,
        carton_height: record.carton_height,
        carton_net_wg: record.carton_net_wg,
        carton_gross_wg: record.carton_gross_wg,
        nro_packing: record.nro_packing,
        size_detail: Vec::new(),
    }
}
