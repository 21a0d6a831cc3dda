//! Outbound ERP submission wire types and acknowledgements
//!
//! Field names follow the ERP endpoint's JSON contract exactly, so every
//! struct here carries explicit serde renames rather than a blanket
//! `rename_all`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A color/size/quantity triple within a pack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErpSizeDetail {
    #[serde(rename = "ColorName")]
    pub color_name: String,
    #[serde(rename = "Size")]
    pub size: String,
    #[serde(rename = "ShippedQty")]
    pub shipped_qty: i64,
}

/// One reconstructed pack (destination + style + packing number).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErpPack {
    #[serde(rename = "AddressDestination")]
    pub address_destination: String,
    #[serde(rename = "destinationCode")]
    pub destination_code: String,
    pub style: String,
    #[serde(rename = "DC")]
    pub dc: String,
    #[serde(rename = "Address")]
    pub address: String,
    #[serde(rename = "City")]
    pub city: String,
    #[serde(rename = "PostalCode")]
    pub postal_code: String,
    #[serde(rename = "State")]
    pub state: String,
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "CartonsQty")]
    pub cartons_qty: i64,
    #[serde(rename = "CartonLength")]
    pub carton_length: f64,
    #[serde(rename = "CartonWidth")]
    pub carton_width: f64,
    #[serde(rename = "CartonHeight")]
    pub carton_height: f64,
    #[serde(rename = "CartonNetWg")]
    pub carton_net_wg: f64,
    #[serde(rename = "CartonGrossWg")]
    pub carton_gross_wg: f64,
    #[serde(rename = "nroPacking")]
    pub nro_packing: i64,
    #[serde(rename = "sizeDetail")]
    pub size_detail: Vec<ErpSizeDetail>,
}

/// One submission entry per buyer purchase order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErpSubmissionEntry {
    #[serde(rename = "buyerName")]
    pub buyer_name: String,
    #[serde(rename = "factoryName")]
    pub factory_name: String,
    #[serde(rename = "userName")]
    pub user_name: String,
    #[serde(rename = "buyerERPCode")]
    pub buyer_erp_code: String,
    #[serde(rename = "factoryERPCode")]
    pub factory_erp_code: String,
    #[serde(rename = "buyerPONumber")]
    pub buyer_po_number: String,
    #[serde(rename = "PONumberEDI")]
    pub po_number_edi: String,
    #[serde(rename = "PWNID")]
    pub pwnid: Option<i64>,
    pub packs: Vec<ErpPack>,
}

/// Parsed ERP acknowledgement body.
///
/// The ERP response is treated as opaque apart from a handful of well-known
/// fields; anything else lands in `extra` untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErpAcknowledgement {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
    #[serde(rename = "packingListId", default, skip_serializing_if = "Option::is_none")]
    pub packing_list_id: Option<Value>,
    #[serde(rename = "packingListNumber", default, skip_serializing_if = "Option::is_none")]
    pub packing_list_number: Option<Value>,
    #[serde(rename = "buyerPO", default, skip_serializing_if = "Option::is_none")]
    pub buyer_po: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Outcome of one submission attempt. Failures are values, never panics or
/// propagated errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum SubmissionOutcome {
    Accepted { response: ErpAcknowledgement },
    Rejected { error: String },
}

impl SubmissionOutcome {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    /// The rejection reason, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Accepted { .. } => None,
            Self::Rejected { error } => Some(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_serializes_with_wire_names() {
        let entry = ErpSubmissionEntry {
            buyer_name: "Acme".into(),
            factory_name: "Textiles".into(),
            user_name: "ops".into(),
            buyer_erp_code: "AC".into(),
            factory_erp_code: "TX".into(),
            buyer_po_number: "PO-1".into(),
            po_number_edi: "EDI-1".into(),
            pwnid: Some(889),
            packs: vec![],
        };

        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"buyerPONumber\":\"PO-1\""));
        assert!(json.contains("\"PWNID\":889"));
        assert!(json.contains("\"PONumberEDI\":\"EDI-1\""));
    }

    #[test]
    fn acknowledgement_keeps_unknown_fields() {
        let body = r#"{
            "packingListId": 5512,
            "packingListNumber": "PL-2024-081",
            "buyerPO": "PO-1",
            "warnings": ["quantity mismatch on pack 2"],
            "processedAt": "2024-08-01T10:00:00Z"
        }"#;

        let ack: ErpAcknowledgement = serde_json::from_str(body).unwrap();
        assert_eq!(ack.warnings.len(), 1);
        assert_eq!(ack.buyer_po.as_deref(), Some("PO-1"));
        assert!(ack.extra.contains_key("processedAt"));
    }

    #[test]
    fn outcome_accessors() {
        let ok = SubmissionOutcome::Accepted { response: ErpAcknowledgement::default() };
        assert!(ok.is_success());
        assert_eq!(ok.error(), None);

        let bad = SubmissionOutcome::Rejected { error: "3 purchase orders incomplete".into() };
        assert!(!bad.is_success());
        assert!(bad.error().unwrap().contains('3'));
    }
}
