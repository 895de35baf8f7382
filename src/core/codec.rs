//! Configurable codec facade.
//!
//! [`PayloadCodec`] wraps the free functions of this module tree with the
//! limits from [`CodecConfig`], an injected [`Clock`], and [`Metrics`].
//! It holds no per-call state and can be shared across threads.

use crate::config::{CodecConfig, LimitsConfig};
use crate::core::extract::{extract_file, extract_transfer_files_each};
use crate::core::pack::{create_transfer_payload, payload_to_json};
use crate::core::parse::parse_transfer_payload_with_origin;
use crate::core::payload::{ExtractedFile, SourceFile, TransferPayload};
use crate::error::{PayloadError, Result};
use crate::utils::metrics::{global_metrics_handle, Metrics, Timer};
use crate::utils::time::{Clock, SystemClock};
use std::sync::Arc;
use tracing::{instrument, warn};

/// Packs, parses, and extracts transfer payloads under configured limits
#[derive(Clone)]
pub struct PayloadCodec {
    config: CodecConfig,
    clock: Arc<dyn Clock>,
    metrics: Arc<Metrics>,
}

impl std::fmt::Debug for PayloadCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PayloadCodec")
            .field("config", &self.config)
            .field("metrics", &self.metrics)
            .finish_non_exhaustive()
    }
}

impl Default for PayloadCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl PayloadCodec {
    /// Codec with default limits, the wall clock, and the global metrics
    pub fn new() -> Self {
        Self {
            config: CodecConfig::default(),
            clock: Arc::new(SystemClock),
            metrics: global_metrics_handle(),
        }
    }

    /// Codec with the given configuration
    ///
    /// # Errors
    /// Returns `PayloadError::ConfigError` if the configuration does not validate
    pub fn with_config(config: CodecConfig) -> Result<Self> {
        config.validate_strict()?;
        Ok(Self {
            config,
            ..Self::new()
        })
    }

    /// Replace the time source used for `createdAtUtc`
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Record into the given collector instead of the global one
    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    fn limits(&self) -> &LimitsConfig {
        &self.config.limits
    }

    fn check_file_count(&self, count: usize) -> Result<()> {
        let limit = self.limits().max_file_count;
        if count > limit {
            return Err(PayloadError::TooManyFiles { count, limit });
        }
        Ok(())
    }

    /// Build a payload from `files`.
    ///
    /// # Errors
    /// - `PayloadError::TooManyFiles` / `PayloadError::OversizedPayload` past the limits
    /// - `PayloadError::InvalidFileName` for an empty name
    #[instrument(skip_all, fields(file_count = files.len()))]
    pub fn create(&self, files: &[SourceFile]) -> Result<TransferPayload> {
        let _timer = Timer::start("create_transfer_payload");
        self.check_file_count(files.len())?;

        let total: u64 = files.iter().map(|f| f.bytes.len() as u64).sum();
        let limit = self.limits().max_total_bytes;
        if total > limit {
            return Err(PayloadError::OversizedPayload { size: total, limit });
        }

        let payload = create_transfer_payload(files, self.clock.as_ref())?;
        self.metrics
            .payload_created(payload.metadata.file_count, payload.metadata.total_bytes);
        Ok(payload)
    }

    /// Serialize to compact JSON
    pub fn to_json(&self, payload: &TransferPayload) -> Result<String> {
        payload_to_json(payload)
    }

    /// Build a payload and serialize it in one step
    pub fn pack(&self, files: &[SourceFile]) -> Result<String> {
        let payload = self.create(files)?;
        self.to_json(&payload)
    }

    /// Parse text in any supported format.
    ///
    /// # Errors
    /// - `PayloadError::OversizedPayload` if the trimmed text exceeds `max_payload_bytes`
    /// - `PayloadError::MalformedPayload` / `PayloadError::UnrecognizedPayload` as for
    ///   [`crate::parse_transfer_payload`]
    /// - `PayloadError::TooManyFiles` past `max_file_count`
    #[instrument(skip_all, fields(text_len = text.len()))]
    pub fn parse(&self, text: &str) -> Result<TransferPayload> {
        let _timer = Timer::start("parse_transfer_payload");
        let result = self.parse_inner(text);
        if let Err(e) = &result {
            self.metrics.parse_failure();
            warn!(error = %e, "Failed to parse transfer payload");
        }
        result
    }

    fn parse_inner(&self, text: &str) -> Result<TransferPayload> {
        let trimmed = text.trim();
        let limit = self.limits().max_payload_bytes;
        if trimmed.len() as u64 > limit {
            return Err(PayloadError::OversizedPayload {
                size: trimmed.len() as u64,
                limit,
            });
        }

        let (payload, origin) = parse_transfer_payload_with_origin(trimmed)?;
        self.check_file_count(payload.files.len())?;
        self.metrics.payload_parsed(origin.is_legacy());
        Ok(payload)
    }

    /// Extract all files, failing on the first undecodable entry
    #[instrument(skip_all, fields(file_count = payload.files.len()))]
    pub fn extract(&self, payload: &TransferPayload) -> Result<Vec<ExtractedFile>> {
        let _timer = Timer::start("extract_transfer_files");
        let mut files = Vec::with_capacity(payload.files.len());
        for entry in &payload.files {
            match extract_file(entry) {
                Ok(file) => {
                    self.record_extracted(&file);
                    files.push(file);
                }
                Err(e) => {
                    self.metrics.encoding_failure();
                    return Err(e);
                }
            }
        }
        Ok(files)
    }

    /// Extract all files, one result per entry
    pub fn extract_each(&self, payload: &TransferPayload) -> Vec<Result<ExtractedFile>> {
        let results = extract_transfer_files_each(payload);
        for result in &results {
            match result {
                Ok(file) => self.record_extracted(file),
                Err(_) => self.metrics.encoding_failure(),
            }
        }
        results
    }

    /// Parse and extract in one step
    pub fn unpack(&self, text: &str) -> Result<Vec<ExtractedFile>> {
        let payload = self.parse(text)?;
        self.extract(&payload)
    }

    fn record_extracted(&self, file: &ExtractedFile) {
        self.metrics
            .file_extracted(file.bytes.len() as u64, file.hash_matches);
    }
}
