//! Tabular export row model
//!
//! The spreadsheet column set is fixed and ordered; the serde renames double
//! as the header row when rows are written through a serializing writer.

use packlist_domain::FlatPackingRecord;
use serde::{Deserialize, Serialize};

/// One spreadsheet row, columns in contractual order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportRow {
    #[serde(rename = "Buyer PO")]
    pub buyer_po: String,
    #[serde(rename = "PO Number EDI")]
    pub po_number_edi: String,
    #[serde(rename = "DC")]
    pub dc: String,
    #[serde(rename = "City")]
    pub city: String,
    #[serde(rename = "State")]
    pub state: String,
    #[serde(rename = "Postal Code")]
    pub postal_code: String,
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "Style")]
    pub style: String,
    #[serde(rename = "Color Name")]
    pub color_name: String,
    #[serde(rename = "Size")]
    pub size: String,
    #[serde(rename = "Shipped Qty")]
    pub shipped_qty: i64,
    #[serde(rename = "Cartons Qty")]
    pub cartons_qty: i64,
    #[serde(rename = "Carton Length")]
    pub carton_length: f64,
    #[serde(rename = "Carton Width")]
    pub carton_width: f64,
    #[serde(rename = "Carton Height")]
    pub carton_height: f64,
    #[serde(rename = "Carton Net Wg")]
    pub carton_net_wg: f64,
    #[serde(rename = "Carton Gross Wg")]
    pub carton_gross_wg: f64,
}

impl From<&FlatPackingRecord> for ExportRow {
    fn from(record: &FlatPackingRecord) -> Self {
        Self {
            buyer_po: record.buyer_po.clone(),
            po_number_edi: record.po_number_edi.clone(),
            dc: record.dc.clone(),
            city: record.city.clone(),
            state: record.state.clone(),
            postal_code: record.postal_code.clone(),
            country: record.country.clone(),
            style: record.style.clone(),
            color_name: record.color_name.clone(),
            size: record.size.clone(),
            shipped_qty: record.shipped_qty,
            cartons_qty: record.cartons_qty,
            carton_length: record.carton_length,
            carton_width: record.carton_width,
            carton_height: record.carton_height,
            carton_net_wg: record.carton_net_wg,
            carton_gross_wg: record.carton_gross_wg,
        }
    }
}

/// Map flat records to export rows, preserving order.
#[must_use]
pub fn to_export_rows(records: &[FlatPackingRecord]) -> Vec<ExportRow> {
    records.iter().map(ExportRow::from).collect()
}
