//! Firestore metrics collection.
//!
//! Provides standardized metrics for monitoring Firestore operations:
//! - Request counters by operation and status
//! - Latency histograms
//! - Retry counters
//! - Documents returned by list calls

use metrics::{counter, histogram};

// =============================================================================
// Metric Names
// =============================================================================

/// Metric name constants for consistency.
pub mod names {
    /// Total Firestore requests by operation and status.
    pub const REQUESTS_TOTAL: &str = "jobhub_firestore_requests_total";

    /// Total retry attempts by operation.
    pub const RETRIES_TOTAL: &str = "jobhub_firestore_retries_total";

    /// Request latency in seconds by operation.
    pub const LATENCY_SECONDS: &str = "jobhub_firestore_latency_seconds";

    /// Documents returned by list calls, by collection.
    pub const LIST_DOCUMENTS_RETURNED_TOTAL: &str = "jobhub_firestore_list_documents_returned_total";

    /// Documents skipped because they could not be decoded, by collection.
    pub const DOCUMENTS_SKIPPED_TOTAL: &str = "jobhub_firestore_documents_skipped_total";
}

// =============================================================================
// Recording Functions
// =============================================================================

/// Record metrics for a completed Firestore request.
pub fn record_request(operation: &str, status: u16, latency_ms: f64) {
    counter!(
        names::REQUESTS_TOTAL,
        "operation" => operation.to_string(),
        "status" => status.to_string()
    )
    .increment(1);

    histogram!(
        names::LATENCY_SECONDS,
        "operation" => operation.to_string()
    )
    .record(latency_ms / 1000.0);
}

/// Record a retry attempt.
pub fn record_retry(operation: &str) {
    counter!(
        names::RETRIES_TOTAL,
        "operation" => operation.to_string()
    )
    .increment(1);
}

/// Record documents returned from one list page.
pub fn record_listed(collection: &str, count: u64) {
    counter!(
        names::LIST_DOCUMENTS_RETURNED_TOTAL,
        "collection" => collection.to_string()
    )
    .increment(count);
}

/// Record a document that was skipped during decoding.
pub fn record_skipped(collection: &str) {
    counter!(
        names::DOCUMENTS_SKIPPED_TOTAL,
        "collection" => collection.to_string()
    )
    .increment(1);
}
