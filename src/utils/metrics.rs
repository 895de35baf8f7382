//! Observability and Metrics
//!
//! Counters for codec activity: payloads packed and parsed, files extracted,
//! integrity mismatches, and failures.
//!
//! Uses atomic counters for thread-safe metrics collection.

use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Metrics collector for codec operations
#[derive(Debug)]
pub struct Metrics {
    /// Payloads built by the encoder
    pub payloads_created: AtomicU64,
    /// Files packed into payloads
    pub files_packed: AtomicU64,
    /// Raw bytes packed into payloads
    pub bytes_packed: AtomicU64,
    /// Payloads successfully parsed
    pub payloads_parsed: AtomicU64,
    /// Legacy single-file payloads normalized to the current format
    pub legacy_payloads_upgraded: AtomicU64,
    /// Parse attempts that failed
    pub parse_failures: AtomicU64,
    /// Files decoded by extraction
    pub files_extracted: AtomicU64,
    /// Raw bytes decoded by extraction
    pub bytes_extracted: AtomicU64,
    /// Extracted files whose checksum did not match
    pub checksum_mismatches: AtomicU64,
    /// Entries whose data was not valid Base64
    pub encoding_failures: AtomicU64,
    /// Start time for uptime calculation
    start_time: Instant,
}

impl Metrics {
    /// Create a new metrics collector
    pub fn new() -> Self {
        Self {
            payloads_created: AtomicU64::new(0),
            files_packed: AtomicU64::new(0),
            bytes_packed: AtomicU64::new(0),
            payloads_parsed: AtomicU64::new(0),
            legacy_payloads_upgraded: AtomicU64::new(0),
            parse_failures: AtomicU64::new(0),
            files_extracted: AtomicU64::new(0),
            bytes_extracted: AtomicU64::new(0),
            checksum_mismatches: AtomicU64::new(0),
            encoding_failures: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    /// Record a payload built from `file_count` files totalling `byte_count` bytes
    pub fn payload_created(&self, file_count: u64, byte_count: u64) {
        self.payloads_created.fetch_add(1, Ordering::Relaxed);
        self.files_packed.fetch_add(file_count, Ordering::Relaxed);
        self.bytes_packed.fetch_add(byte_count, Ordering::Relaxed);
    }

    /// Record a successful parse
    pub fn payload_parsed(&self, upgraded_from_legacy: bool) {
        self.payloads_parsed.fetch_add(1, Ordering::Relaxed);
        if upgraded_from_legacy {
            self.legacy_payloads_upgraded.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Record a failed parse
    pub fn parse_failure(&self) {
        self.parse_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Record an extracted file
    pub fn file_extracted(&self, byte_count: u64, hash_matches: bool) {
        self.files_extracted.fetch_add(1, Ordering::Relaxed);
        self.bytes_extracted.fetch_add(byte_count, Ordering::Relaxed);
        if !hash_matches {
            self.checksum_mismatches.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Record an entry that failed Base64 decoding
    pub fn encoding_failure(&self) {
        self.encoding_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Get current metrics snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            payloads_created: self.payloads_created.load(Ordering::Relaxed),
            files_packed: self.files_packed.load(Ordering::Relaxed),
            bytes_packed: self.bytes_packed.load(Ordering::Relaxed),
            payloads_parsed: self.payloads_parsed.load(Ordering::Relaxed),
            legacy_payloads_upgraded: self.legacy_payloads_upgraded.load(Ordering::Relaxed),
            parse_failures: self.parse_failures.load(Ordering::Relaxed),
            files_extracted: self.files_extracted.load(Ordering::Relaxed),
            bytes_extracted: self.bytes_extracted.load(Ordering::Relaxed),
            checksum_mismatches: self.checksum_mismatches.load(Ordering::Relaxed),
            encoding_failures: self.encoding_failures.load(Ordering::Relaxed),
            uptime_seconds: self.start_time.elapsed().as_secs(),
        }
    }

    /// Log current metrics
    pub fn log_metrics(&self) {
        let snapshot = self.snapshot();
        info!(
            payloads_created = snapshot.payloads_created,
            files_packed = snapshot.files_packed,
            bytes_packed = snapshot.bytes_packed,
            payloads_parsed = snapshot.payloads_parsed,
            legacy_payloads_upgraded = snapshot.legacy_payloads_upgraded,
            parse_failures = snapshot.parse_failures,
            files_extracted = snapshot.files_extracted,
            bytes_extracted = snapshot.bytes_extracted,
            checksum_mismatches = snapshot.checksum_mismatches,
            encoding_failures = snapshot.encoding_failures,
            uptime_seconds = snapshot.uptime_seconds,
            "Codec metrics snapshot"
        );
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Snapshot of metrics at a point in time
#[derive(Debug, Clone)]
pub struct MetricsSnapshot {
    pub payloads_created: u64,
    pub files_packed: u64,
    pub bytes_packed: u64,
    pub payloads_parsed: u64,
    pub legacy_payloads_upgraded: u64,
    pub parse_failures: u64,
    pub files_extracted: u64,
    pub bytes_extracted: u64,
    pub checksum_mismatches: u64,
    pub encoding_failures: u64,
    pub uptime_seconds: u64,
}

/// Process-wide collector shared by every codec built with `PayloadCodec::new`
static METRICS: Lazy<Arc<Metrics>> = Lazy::new(|| Arc::new(Metrics::new()));

/// Get the global metrics instance
pub fn global_metrics() -> &'static Metrics {
    &METRICS
}

/// Shared handle to the global metrics instance
pub fn global_metrics_handle() -> Arc<Metrics> {
    Arc::clone(&METRICS)
}

/// Initialize metrics collection (call once at startup)
pub fn init_metrics() {
    let _ = global_metrics();
    info!("Metrics collection initialized");
}

/// Timer for measuring operation duration
pub struct Timer {
    start: Instant,
    operation: &'static str,
}

impl Timer {
    /// Start timing an operation
    pub fn start(operation: &'static str) -> Self {
        Self {
            start: Instant::now(),
            operation,
        }
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        let duration = self.start.elapsed();
        debug!(
            operation = self.operation,
            duration_us = duration.as_micros() as u64,
            "Operation completed"
        );
    }
}
