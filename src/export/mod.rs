//! Report export
//!
//! CSV exports for tenants, payments, and the unpaid-balance report, plus a
//! PDF rendering of the unpaid report. Every exporter takes an explicit list
//! of typed records and writes an explicit, fixed field order; no runtime
//! type inspection is involved.

pub mod csv;
pub mod pdf;

pub use csv::{export_payments_csv, export_tenants_csv, export_unpaid_csv};
pub use pdf::export_unpaid_pdf;
