//! Batch redaction over CSV files
//!
//! - [`reader`] - CSV source with configurable identifier and record columns
//! - [`writer`] - CSV sink (`record_id,redacted_data_json,is_pii`)
//! - [`coordinator`] - chunked, order-preserving parallel processing
//! - [`summary`] - run summary

pub mod coordinator;
pub mod reader;
pub mod summary;
pub mod writer;

pub use coordinator::BatchCoordinator;
pub use reader::{read_source, SourceRow};
pub use summary::BatchSummary;
pub use writer::{pii_flag, write_output, OUTPUT_HEADER};
