//! Extraction of a [`CurrentCondition`] from the "Current Conditions" entry.
//!
//! The title carries condition and temperature; everything else is recovered
//! from the HTML summary via [`crate::summary`]. Each step can fail on its own
//! and the first failure aborts the whole record.

use chrono::{DateTime, FixedOffset};
use maple_core::{CurrentCondition, GenericEntry};
use regex::Regex;

use crate::error::{ExtractionError, ExtractionStage};
use crate::observed::parse_observed_at;
use crate::summary::{humidity_segment, strip_html, wind_segment, SummarySegments};

const PRESSURE_ANCHOR: &str = "Pressure / Tendency:";
const OBSERVED_ANCHOR: &str = "Airport";

/// Build a [`CurrentCondition`] from a current-conditions entry.
///
/// Steps, in order: title (condition + temperature), observation time,
/// pressure, humidity, wind.
///
/// # Errors
///
/// Returns [`ExtractionError`] tagged with the first stage that failed. No
/// partial record is ever returned.
pub fn extract(entry: &GenericEntry) -> Result<CurrentCondition, ExtractionError> {
    let (condition_description, temperature_celsius) = parse_title(&entry.title)?;

    let segments = SummarySegments::split(&entry.summary_text);
    let (station, observed_at) = parse_observation(&segments)?;
    let pressure_kpa = parse_pressure(&segments)?;
    let humidity_percent = parse_humidity(&segments)?;
    let wind_speed_kmh = parse_wind(&segments)?;

    tracing::debug!(
        condition = %condition_description,
        temperature_celsius,
        %observed_at,
        pressure_kpa,
        humidity_percent,
        wind_speed_kmh,
        "extracted current conditions"
    );

    Ok(CurrentCondition {
        condition_description,
        temperature_celsius,
        observed_at,
        station,
        pressure_kpa,
        humidity_percent,
        wind_speed_kmh,
        link: entry.link_href.clone(),
    })
}

/// `"Current Conditions: <description>, <number>°"` → `(description, number)`.
fn parse_title(title: &str) -> Result<(String, f64), ExtractionError> {
    let re = Regex::new(
        r"^\s*Current Conditions:\s*(?P<condition>.*?),\s*(?P<temperature>[^,\s°]+)\s*°",
    )
    .expect("valid title regex");

    let caps = re.captures(title).ok_or_else(|| {
        ExtractionError::new(
            ExtractionStage::ConditionTemperature,
            format!("title {title:?} is not 'Current Conditions: <condition>, <temp>°'"),
        )
    })?;

    let temperature = parse_number(&caps["temperature"], ExtractionStage::TemperatureNumeric)?;
    Ok((caps["condition"].trim().to_string(), temperature))
}

/// Station name and observation time from the "Airport" anchor line.
fn parse_observation(
    segments: &SummarySegments<'_>,
) -> Result<(String, DateTime<FixedOffset>), ExtractionError> {
    let re = Regex::new(r"^(?:Observed at:\s*)?(?P<station>.*\bAirport)\s+(?P<timestamp>.+)$")
        .expect("valid observation regex");

    let segment = segments.anchored(OBSERVED_ANCHOR).ok_or_else(|| {
        ExtractionError::new(
            ExtractionStage::ObservedAt,
            format!("no segment mentions {OBSERVED_ANCHOR:?}"),
        )
    })?;
    let text = strip_html(segment);
    let caps = re.captures(&text).ok_or_else(|| {
        ExtractionError::new(
            ExtractionStage::ObservedAt,
            format!("no time follows {OBSERVED_ANCHOR:?} in {text:?}"),
        )
    })?;

    let observed_at = parse_observed_at(&caps["timestamp"])?;
    Ok((caps["station"].trim().to_string(), observed_at))
}

/// Pressure in kPa from the "Pressure / Tendency:" anchor line.
fn parse_pressure(segments: &SummarySegments<'_>) -> Result<f64, ExtractionError> {
    let re = Regex::new(r"Pressure / Tendency:\s*(?P<value>\S+)\s*kPa")
        .expect("valid pressure regex");

    let segment = segments.anchored(PRESSURE_ANCHOR).ok_or_else(|| {
        ExtractionError::new(
            ExtractionStage::Pressure,
            format!("no segment labelled {PRESSURE_ANCHOR:?}"),
        )
    })?;
    let text = strip_html(segment);
    let caps = re.captures(&text).ok_or_else(|| {
        ExtractionError::new(ExtractionStage::Pressure, format!("no kPa value in {text:?}"))
    })?;

    parse_number(&caps["value"], ExtractionStage::PressureNumeric)
}

/// Humidity percentage from the ordinal humidity line.
fn parse_humidity(segments: &SummarySegments<'_>) -> Result<f64, ExtractionError> {
    let re = Regex::new(r"(?P<value>\S+)\s*%$").expect("valid humidity regex");

    let text = humidity_segment(segments)
        .map_err(|detail| ExtractionError::new(ExtractionStage::Humidity, detail))?;
    let value = text
        .rsplit_once(':')
        .map_or(text.as_str(), |(_, value)| value);
    let caps = re.captures(value).ok_or_else(|| {
        ExtractionError::new(ExtractionStage::Humidity, format!("no percentage in {text:?}"))
    })?;

    parse_number(&caps["value"], ExtractionStage::HumidityNumeric)
}

/// Wind speed in km/h from the ordinal wind line: the first numeric token
/// before the unit, skipping the label and any compass direction.
fn parse_wind(segments: &SummarySegments<'_>) -> Result<f64, ExtractionError> {
    let text = wind_segment(segments)
        .map_err(|detail| ExtractionError::new(ExtractionStage::Wind, detail))?;

    let before_unit = text.split("km/h").next().unwrap_or_default();
    let value = before_unit
        .rsplit_once(':')
        .map_or(before_unit, |(_, value)| value);

    let token = value
        .split_whitespace()
        .find(|token| token.starts_with(|c: char| c.is_ascii_digit()))
        .ok_or_else(|| {
            ExtractionError::new(ExtractionStage::Wind, format!("no speed before km/h in {text:?}"))
        })?;

    parse_number(token, ExtractionStage::WindNumeric)
}

/// Base-10 float parse; non-finite values count as failures.
fn parse_number(raw: &str, stage: ExtractionStage) -> Result<f64, ExtractionError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| ExtractionError::new(stage, format!("{raw:?} is not a number")))
}

#[cfg(test)]
#[path = "condition_test.rs"]
mod tests;
