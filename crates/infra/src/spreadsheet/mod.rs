//! CSV spreadsheet adapter
//!
//! The spreadsheet boundary is purely tabular: flat records go out as rows
//! with a fixed column set, and a sheet holding a Buyer PO column plus a
//! PWNID column comes back in as a bulk edit map. Values in the PWNID column
//! run through the same validation as manual input, so junk cells read as
//! "no value" rather than failing the whole import.

use std::io::{Read, Write};

use packlist_core::grouping::parse_pwnid_input;
use packlist_core::ExportRow;
use packlist_domain::{EditStateMap, Result};
use serde::Deserialize;
use tracing::debug;

use crate::errors::InfraError;

/// Write export rows as CSV, headers first.
///
/// # Errors
/// Returns `PacklistError::InvalidInput` if a row cannot be serialized or
/// the writer fails.
pub fn write_export_csv<W: Write>(rows: &[ExportRow], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(row).map_err(InfraError::from)?;
    }
    csv_writer.flush().map_err(InfraError::from)?;
    Ok(())
}

#[derive(Debug, Deserialize)]
struct PwnidImportRow {
    #[serde(rename = "Buyer PO")]
    buyer_po: String,
    #[serde(rename = "PWNID", default)]
    pwnid: String,
}

/// Read a bulk-PWNID sheet into an edit map.
///
/// Rows with an empty or invalid PWNID cell map to `None` (the value is
/// cleared, matching what typing the same text would do); rows with an empty
/// Buyer PO cell are ignored.
///
/// # Errors
/// Returns `PacklistError::InvalidInput` when the sheet is structurally
/// unreadable (missing headers, malformed CSV).
pub fn read_pwnid_csv<R: Read>(reader: R) -> Result<EditStateMap> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut values = EditStateMap::new();

    for row in csv_reader.deserialize::<PwnidImportRow>() {
        let row = row.map_err(InfraError::from)?;
        let buyer_po = row.buyer_po.trim();
        if buyer_po.is_empty() {
            continue;
        }
        values.insert(buyer_po.to_string(), parse_pwnid_input(&row.pwnid));
    }

    debug!(entries = values.len(), "parsed bulk PWNID sheet");
    Ok(values)
}
