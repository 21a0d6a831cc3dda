//! Flattened packing list records

use serde::{Deserialize, Serialize};

/// One row per (buyer PO, destination pack, size/color) triple.
///
/// Produced by flattening the nested buyer → packs → sizeDetail webhook
/// payload. All records sharing a `buyer_po` carry the same `pwnid` once the
/// reconciliation re-merge has run; the flattener itself only copies whatever
/// the payload supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlatPackingRecord {
    // Buyer identity (shared by every row of the same purchase order)
    pub buyer_name: String,
    pub factory_name: String,
    pub user_name: String,
    pub buyer_erp_code: String,
    pub factory_erp_code: String,

    /// Buyer purchase order number, the grouping key for reconciliation.
    pub buyer_po: String,
    pub po_number_edi: String,

    /// Factory-assigned identifier under reconciliation. `None` until the
    /// user (or the payload) supplies one; zero is never a valid value.
    pub pwnid: Option<i64>,

    // Destination / pack fields
    pub destination_code: String,
    pub style: String,
    pub dc: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,

    // Carton physical attributes (invariant within a pack)
    pub cartons_qty: i64,
    pub carton_length: f64,
    pub carton_width: f64,
    pub carton_height: f64,
    pub carton_net_wg: f64,
    pub carton_gross_wg: f64,

    /// Pack sequence number within the purchase order.
    pub nro_packing: i64,

    // Size-level attributes
    pub color_name: String,
    pub size: String,
    pub shipped_qty: i64,
}

impl FlatPackingRecord {
    /// Composite key identifying the physical pack this row belongs to.
    ///
    /// Rows sharing this key are re-nested into a single pack on submission.
    #[must_use]
    pub fn pack_key(&self) -> (String, String, i64) {
        (self.destination_code.clone(), self.style.clone(), self.nro_packing)
    }
}
