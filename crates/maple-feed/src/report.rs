//! Assembly of a [`WeatherReport`] from classified entries.

use maple_core::WeatherReport;

use crate::bulletin::{extract_forecast, extract_warning};
use crate::classify::ClassifiedEntries;
use crate::condition;
use crate::error::ExtractionError;

/// A report plus the reason current conditions are missing, if they were
/// present in the feed but could not be parsed.
///
/// `report.current_condition == None` with `condition_error == None` means the
/// feed carried no current-conditions entry at all.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportOutcome {
    pub report: WeatherReport,
    pub condition_error: Option<ExtractionError>,
}

impl ReportOutcome {
    /// `true` when no section failed extraction.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.condition_error.is_none()
    }
}

/// Run every extractor over its partition.
///
/// A current-conditions failure is isolated to that section: forecasts and
/// warnings are still produced and the error is returned alongside them.
#[must_use]
pub fn aggregate(classified: &ClassifiedEntries) -> ReportOutcome {
    let (current_condition, condition_error) = match classified.current() {
        None => (None, None),
        Some(entry) => match condition::extract(entry) {
            Ok(condition) => (Some(condition), None),
            Err(e) => {
                tracing::warn!(
                    stage = e.stage.tag(),
                    error = %e,
                    title = %entry.title,
                    "current conditions could not be extracted"
                );
                (None, Some(e))
            }
        },
    };

    let report = WeatherReport {
        current_condition,
        forecasts: classified.forecasts.iter().map(extract_forecast).collect(),
        warnings: classified.warnings.iter().map(extract_warning).collect(),
        ..WeatherReport::default()
    };

    ReportOutcome {
        report,
        condition_error,
    }
}
