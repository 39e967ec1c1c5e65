//! End-to-end extraction: raw bytes to [`ReportOutcome`].

use crate::classify::classify;
use crate::envelope::decode_envelope;
use crate::error::DecodeError;
use crate::report::{aggregate, ReportOutcome};

/// Decode, classify and aggregate one feed snapshot.
///
/// Pure and synchronous; safe to call concurrently on different inputs.
///
/// # Errors
///
/// Returns [`DecodeError`] if the envelope itself cannot be decoded. Content
/// failures in current conditions are reported in
/// [`ReportOutcome::condition_error`] instead.
pub fn parse_feed(raw: &[u8]) -> Result<ReportOutcome, DecodeError> {
    let envelope = decode_envelope(raw)?;
    let classified = classify(envelope.entries);

    let mut outcome = aggregate(&classified);
    outcome.report.feed_title = envelope.title;
    outcome.report.feed_updated_raw = envelope.updated_raw;

    tracing::info!(
        current = outcome.report.current_condition.is_some(),
        forecasts = outcome.report.forecasts.len(),
        warnings = outcome.report.warnings.len(),
        dropped = classified.dropped.len(),
        condition_error = outcome.condition_error.as_ref().map(|e| e.stage.tag()),
        "parsed weather feed"
    );

    Ok(outcome)
}
