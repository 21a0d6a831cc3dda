//! Domain data types
//!
//! Organized by pipeline stage:
//! - `packing`: flattened per-SKU-per-carton records
//! - `groups`: derived purchase-order groups and completion statistics
//! - `reconcile`: user edit state and its persisted form
//! - `erp`: outbound submission wire types and acknowledgements

pub mod erp;
pub mod groups;
pub mod packing;
pub mod reconcile;

pub use erp::*;
pub use groups::*;
pub use packing::*;
pub use reconcile::*;
