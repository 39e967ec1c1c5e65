//! Observation time parsing for the "Airport" anchor line.
//!
//! The publisher writes local time as `h:mm AM/PM ZZZ Weekday D Month YYYY`,
//! e.g. `1:00 PM EDT Monday 19 October 2026`.

use chrono::{DateTime, FixedOffset, NaiveDateTime};
use regex::Regex;

use crate::error::{ExtractionError, ExtractionStage};

/// Zone abbreviations emitted by the publisher, as seconds east of UTC.
const ZONE_OFFSETS: &[(&str, i32)] = &[
    ("NST", -(3 * 3600 + 1800)),
    ("NDT", -(2 * 3600 + 1800)),
    ("AST", -4 * 3600),
    ("ADT", -3 * 3600),
    ("EST", -5 * 3600),
    ("EDT", -4 * 3600),
    ("CST", -6 * 3600),
    ("CDT", -5 * 3600),
    ("MST", -7 * 3600),
    ("MDT", -6 * 3600),
    ("PST", -8 * 3600),
    ("PDT", -7 * 3600),
    ("UTC", 0),
    ("GMT", 0),
];

/// Fixed UTC offset for a zone abbreviation, case-insensitive.
#[must_use]
pub fn zone_offset(abbreviation: &str) -> Option<FixedOffset> {
    ZONE_OFFSETS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(abbreviation))
        .and_then(|(_, seconds)| FixedOffset::east_opt(*seconds))
}

/// Parse `h:mm AM/PM ZZZ Weekday D Month YYYY` into a zoned timestamp.
///
/// The weekday must agree with the date.
///
/// # Errors
///
/// Returns [`ExtractionStage::ObservedAtTimestamp`] when the text does not
/// have that shape or names an impossible date, and
/// [`ExtractionStage::ObservedAtTimezone`] for an unknown zone abbreviation.
pub fn parse_observed_at(text: &str) -> Result<DateTime<FixedOffset>, ExtractionError> {
    let re = Regex::new(
        r"^(?P<clock>\d{1,2}:\d{2}\s*[AaPp][Mm])\s+(?P<zone>[A-Za-z]{2,5})\s+(?P<date>[A-Za-z]+\s+\d{1,2}\s+[A-Za-z]+\s+\d{4})$",
    )
    .expect("valid observation time regex");

    let text = text.trim();
    let caps = re.captures(text).ok_or_else(|| {
        ExtractionError::new(
            ExtractionStage::ObservedAtTimestamp,
            format!("{text:?} is not 'h:mm AM/PM ZZZ Weekday D Month YYYY'"),
        )
    })?;

    let zone = &caps["zone"];
    let offset = zone_offset(zone).ok_or_else(|| {
        ExtractionError::new(
            ExtractionStage::ObservedAtTimezone,
            format!("unknown zone abbreviation {zone:?}"),
        )
    })?;

    let local = format!("{} {}", &caps["clock"], &caps["date"]);
    let naive = NaiveDateTime::parse_from_str(&local, "%I:%M %p %A %d %B %Y").map_err(|e| {
        ExtractionError::new(ExtractionStage::ObservedAtTimestamp, format!("{local:?}: {e}"))
    })?;

    naive.and_local_timezone(offset).single().ok_or_else(|| {
        ExtractionError::new(
            ExtractionStage::ObservedAtTimestamp,
            format!("{local:?} is not representable at offset {offset}"),
        )
    })
}
