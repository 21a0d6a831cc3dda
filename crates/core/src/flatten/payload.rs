//! Raw webhook payload shapes
//!
//! Field names mirror the upstream webhook contract; everything scalar is
//! defaulted so sparse payloads still deserialize. `packs` is deliberately
//! not defaulted: an item without it does not count as a packing list.

use serde::Deserialize;
use serde_json::Number;

#[derive(Debug, Clone, Deserialize)]
pub struct RawPackingItem {
    #[serde(rename = "buyerPONumber", default)]
    pub buyer_po_number: String,
    #[serde(rename = "PWNID", default)]
    pub pwnid: Option<Number>,
    pub packs: Vec<RawPack>,
    #[serde(rename = "buyerName", default)]
    pub buyer_name: String,
    #[serde(rename = "factoryName", default)]
    pub factory_name: String,
    #[serde(rename = "userName", default)]
    pub user_name: String,
    #[serde(rename = "buyerERPCode", default)]
    pub buyer_erp_code: String,
    #[serde(rename = "factoryERPCode", default)]
    pub factory_erp_code: String,
    #[serde(rename = "PONumberEDI", default)]
    pub po_number_edi: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawPack {
    /// Legacy payloads spell this field `AddressDestination`.
    #[serde(rename = "destinationCode", alias = "AddressDestination", default)]
    pub destination_code: String,
    #[serde(default)]
    pub style: String,
    #[serde(rename = "DC", default)]
    pub dc: String,
    #[serde(rename = "Address", default)]
    pub address: String,
    #[serde(rename = "City", default)]
    pub city: String,
    #[serde(rename = "PostalCode", default)]
    pub postal_code: String,
    #[serde(rename = "State", default)]
    pub state: String,
    #[serde(rename = "Country", default)]
    pub country: String,
    #[serde(rename = "CartonsQty", default)]
    pub cartons_qty: i64,
    #[serde(rename = "CartonLength", default)]
    pub carton_length: f64,
    #[serde(rename = "CartonWidth", default)]
    pub carton_width: f64,
    #[serde(rename = "CartonHeight", default)]
    pub carton_height: f64,
    #[serde(rename = "CartonNetWg", default)]
    pub carton_net_wg: f64,
    #[serde(rename = "CartonGrossWg", default)]
    pub carton_gross_wg: f64,
    #[serde(rename = "nroPacking", default)]
    pub nro_packing: i64,
    /// A pack without a size breakdown emits no flat rows.
    #[serde(rename = "sizeDetail", default)]
    pub size_detail: Vec<RawSizeDetail>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawSizeDetail {
    #[serde(rename = "ColorName", default)]
    pub color_name: String,
    #[serde(rename = "Size", default)]
    pub size: String,
    #[serde(rename = "ShippedQty", default)]
    pub shipped_qty: i64,
}
