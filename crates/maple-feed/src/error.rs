use thiserror::Error;

/// The feed envelope could not be decoded. Nothing from the document is
/// trusted when this is returned.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("feed is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("XML error at byte {position}: {source}")]
    Xml {
        position: u64,
        #[source]
        source: quick_xml::Error,
    },

    #[error("malformed attribute on <{element}>: {reason}")]
    Attribute { element: String, reason: String },

    #[error("document ended inside <{element}>")]
    UnclosedElement { element: String },

    #[error("expected <feed> root element, found <{found}>")]
    UnexpectedRoot { found: String },

    #[error("document has no root element")]
    Empty,
}

/// Which step of current-conditions extraction failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtractionStage {
    ConditionTemperature,
    TemperatureNumeric,
    ObservedAt,
    ObservedAtTimestamp,
    ObservedAtTimezone,
    Pressure,
    PressureNumeric,
    Humidity,
    HumidityNumeric,
    Wind,
    WindNumeric,
}

impl ExtractionStage {
    /// Stable tag for assertions and alerting, e.g. `"humidity/numeric-parse"`.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            ExtractionStage::ConditionTemperature => "condition/temperature",
            ExtractionStage::TemperatureNumeric => "temperature/numeric-parse",
            ExtractionStage::ObservedAt => "observed-at",
            ExtractionStage::ObservedAtTimestamp => "observed-at/timestamp-parse",
            ExtractionStage::ObservedAtTimezone => "observed-at/timezone",
            ExtractionStage::Pressure => "pressure",
            ExtractionStage::PressureNumeric => "pressure/numeric-parse",
            ExtractionStage::Humidity => "humidity",
            ExtractionStage::HumidityNumeric => "humidity/numeric-parse",
            ExtractionStage::Wind => "wind",
            ExtractionStage::WindNumeric => "wind/numeric-parse",
        }
    }

    /// The record field this stage belongs to.
    #[must_use]
    pub fn field(self) -> &'static str {
        match self {
            ExtractionStage::ConditionTemperature | ExtractionStage::TemperatureNumeric => {
                "temperature"
            }
            ExtractionStage::ObservedAt
            | ExtractionStage::ObservedAtTimestamp
            | ExtractionStage::ObservedAtTimezone => "observed-at",
            ExtractionStage::Pressure | ExtractionStage::PressureNumeric => "pressure",
            ExtractionStage::Humidity | ExtractionStage::HumidityNumeric => "humidity",
            ExtractionStage::Wind | ExtractionStage::WindNumeric => "wind",
        }
    }
}

impl std::fmt::Display for ExtractionStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Current conditions were present but could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("current conditions extraction failed at {stage}: {detail}")]
pub struct ExtractionError {
    pub stage: ExtractionStage,
    pub detail: String,
}

impl ExtractionError {
    pub(crate) fn new(stage: ExtractionStage, detail: impl Into<String>) -> Self {
        Self {
            stage,
            detail: detail.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_tags_are_prefixed_by_field() {
        let stages = [
            ExtractionStage::TemperatureNumeric,
            ExtractionStage::ObservedAt,
            ExtractionStage::ObservedAtTimestamp,
            ExtractionStage::ObservedAtTimezone,
            ExtractionStage::Pressure,
            ExtractionStage::PressureNumeric,
            ExtractionStage::Humidity,
            ExtractionStage::HumidityNumeric,
            ExtractionStage::Wind,
            ExtractionStage::WindNumeric,
        ];
        for stage in stages {
            assert!(
                stage.tag().starts_with(stage.field()),
                "tag {} should start with field {}",
                stage.tag(),
                stage.field()
            );
        }
    }

    #[test]
    fn title_stage_keeps_combined_tag() {
        assert_eq!(
            ExtractionStage::ConditionTemperature.tag(),
            "condition/temperature"
        );
    }

    #[test]
    fn extraction_error_display_names_stage() {
        let err = ExtractionError::new(ExtractionStage::HumidityNumeric, "\"N/A\" is not a number");
        let msg = err.to_string();
        assert!(msg.contains("humidity/numeric-parse"), "got: {msg}");
        assert!(msg.contains("N/A"), "got: {msg}");
    }
}
