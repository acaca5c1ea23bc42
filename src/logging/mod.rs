//! Logging and observability
//!
//! Structured logging on top of `tracing`, with optional JSON file output.
//! Masked values and field names may be logged; original values never are.
//!
//! # Example
//!
//! ```no_run
//! use pii_redactor::logging::init_logging;
//! use pii_redactor::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, parse_log_level, LoggingGuard};

/// Log the start of a batch run
///
/// # Example
///
/// ```no_run
/// use pii_redactor::log_batch_start;
///
/// log_batch_start!("input.csv", "run-1");
/// ```
#[macro_export]
macro_rules! log_batch_start {
    ($input:expr, $run_id:expr) => {
        tracing::info!(
            input = %$input,
            run_id = %$run_id,
            "Starting redaction batch"
        );
    };
}

/// Log the completion of a batch run
///
/// # Example
///
/// ```no_run
/// use pii_redactor::log_batch_complete;
/// use std::time::Duration;
///
/// log_batch_complete!(120, 17, Duration::from_secs(2));
/// ```
#[macro_export]
macro_rules! log_batch_complete {
    ($total:expr, $with_pii:expr, $duration:expr) => {
        tracing::info!(
            total_records = $total,
            records_with_pii = $with_pii,
            duration_ms = $duration.as_millis() as u64,
            "Redaction batch completed"
        );
    };
}

/// Log progress through the chunks of a batch
///
/// # Example
///
/// ```no_run
/// use pii_redactor::log_chunk_processing;
///
/// log_chunk_processing!(512, 1000);
/// ```
#[macro_export]
macro_rules! log_chunk_processing {
    ($current:expr, $total:expr) => {
        tracing::debug!(
            current = $current,
            total = $total,
            progress_pct = ($current as f64 / $total as f64 * 100.0),
            "Processing chunk"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use pii_redactor::log_error_with_context;
/// use pii_redactor::domain::RedactorError;
///
/// let error = RedactorError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
