//! Record store — durable form submissions with derived summary indexes
//!
//! Each submission becomes its own immutable JSON file plus one appended
//! line in the kind's summary index. The index is a derived view for fast
//! listing, not a second source of truth.

pub mod handler;
pub mod store;
pub mod types;

pub use handler::{records_router, RecordsState};
pub use store::RecordStore;
pub use types::{FieldMap, FieldValue, RecordKind, SubmittedRecord, SummaryEntry};
