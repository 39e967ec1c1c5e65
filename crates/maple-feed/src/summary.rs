//! Line segmentation of the current-conditions summary body.
//!
//! The publisher renders observations as one HTML line per field, each line
//! led by a bold label and terminated by `<br/>`:
//!
//! ```text
//! 0  <b>Observed at:</b> Ottawa Macdonald-Cartier Int'l Airport 1:00 PM EDT Monday 19 October 2026
//! 1  <b>Condition:</b> Mostly Cloudy
//! 2  <b>Temperature:</b> 8.4&deg;C
//! 3  <b>Pressure / Tendency:</b> 101.8 kPa rising
//! 4  <b>Visibility:</b> 24 km
//! 5  <b>Humidity:</b> 62 %
//! 6  <b>Dewpoint:</b> 1.5&deg;C
//! 7  <b>Wind:</b> WNW 14 km/h
//! 8  <b>Air Quality Health Index:</b> 3
//! ```
//!
//! Observation time and pressure are found by anchor text. Humidity and wind
//! are found by line index only, so an extra line upstream of them (the
//! publisher inserts "Wind Chill" or "Humidex" lines seasonally) shifts them.
//! The ordinal accessors therefore verify the unit suffix and refuse the
//! segment otherwise; nothing here tries to re-locate a shifted field.

use regex::Regex;

/// Ordinal of the humidity line. No stable anchor is relied upon for it.
pub(crate) const HUMIDITY_SEGMENT: usize = 5;

/// Ordinal of the wind line. No stable anchor is relied upon for it.
pub(crate) const WIND_SEGMENT: usize = 7;

/// The summary body split on line breaks, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SummarySegments<'a> {
    segments: Vec<&'a str>,
}

impl<'a> SummarySegments<'a> {
    pub(crate) fn split(body: &'a str) -> Self {
        let line_break = Regex::new(r"(?i)<br\s*/?>").expect("valid line-break regex");
        let segments = line_break.split(body).map(str::trim).collect();
        Self { segments }
    }

    /// First segment containing `anchor`, compared against tag-stripped text.
    pub(crate) fn anchored(&self, anchor: &str) -> Option<&'a str> {
        self.segments
            .iter()
            .copied()
            .find(|segment| strip_html(segment).contains(anchor))
    }

    pub(crate) fn ordinal(&self, index: usize) -> Option<&'a str> {
        self.segments.get(index).copied()
    }

    pub(crate) fn len(&self) -> usize {
        self.segments.len()
    }
}

/// Humidity line, accepted only if its text ends in `%`.
pub(crate) fn humidity_segment(segments: &SummarySegments<'_>) -> Result<String, String> {
    let raw = segments
        .ordinal(HUMIDITY_SEGMENT)
        .ok_or_else(|| missing_segment(HUMIDITY_SEGMENT, segments.len()))?;
    let text = strip_html(raw);
    if text.ends_with('%') {
        Ok(text)
    } else {
        Err(format!("segment {HUMIDITY_SEGMENT} does not end in '%': {text:?}"))
    }
}

/// Wind line, accepted only if its text carries a `km/h` unit.
pub(crate) fn wind_segment(segments: &SummarySegments<'_>) -> Result<String, String> {
    let raw = segments
        .ordinal(WIND_SEGMENT)
        .ok_or_else(|| missing_segment(WIND_SEGMENT, segments.len()))?;
    let text = strip_html(raw);
    if text.contains("km/h") {
        Ok(text)
    } else {
        Err(format!("segment {WIND_SEGMENT} has no 'km/h' unit: {text:?}"))
    }
}

fn missing_segment(index: usize, len: usize) -> String {
    format!("summary has {len} segments, no segment {index}")
}

/// Strip HTML tags, decode the entities the publisher emits, and normalize
/// whitespace.
pub(crate) fn strip_html(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    let out = out.replace("&nbsp;", " ").replace("&deg;", "°");
    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = "<b>Observed at:</b> Ottawa Macdonald-Cartier Int'l Airport 1:00 PM EDT Monday 19 October 2026 <br/>\n\
        <b>Condition:</b> Mostly Cloudy <br/>\n\
        <b>Temperature:</b> 8.4&deg;C <br/>\n\
        <b>Pressure / Tendency:</b> 101.8 kPa rising<br/>\n\
        <b>Visibility:</b> 24&nbsp;km<br/>\n\
        <b>Humidity:</b> 62 %<br/>\n\
        <b>Dewpoint:</b> 1.5&deg;C <br/>\n\
        <b>Wind:</b> WNW 14 km/h<br/>\n\
        <b>Air Quality Health Index:</b> 3 <br/>";

    #[test]
    fn split_yields_one_segment_per_line() {
        let segments = SummarySegments::split(BODY);
        // Trailing <br/> leaves an empty final segment.
        assert_eq!(segments.len(), 10);
        assert_eq!(segments.ordinal(1), Some("<b>Condition:</b> Mostly Cloudy"));
        assert_eq!(segments.ordinal(9), Some(""));
    }

    #[test]
    fn split_accepts_break_spellings() {
        let segments = SummarySegments::split("a<br>b<BR />c<br/>d");
        assert_eq!(segments.len(), 4);
        assert_eq!(segments.ordinal(2), Some("c"));
    }

    #[test]
    fn anchored_matches_label_through_markup() {
        let segments = SummarySegments::split(BODY);
        assert_eq!(
            segments.anchored("Pressure / Tendency:"),
            Some("<b>Pressure / Tendency:</b> 101.8 kPa rising")
        );
        assert!(segments.anchored("Humidex:").is_none());
    }

    #[test]
    fn humidity_and_wind_read_by_ordinal() {
        let segments = SummarySegments::split(BODY);
        assert_eq!(humidity_segment(&segments).unwrap(), "Humidity: 62 %");
        assert_eq!(wind_segment(&segments).unwrap(), "Wind: WNW 14 km/h");
    }

    #[test]
    fn shifted_humidity_line_is_refused() {
        let shifted = BODY.replace(
            "<b>Visibility:</b> 24&nbsp;km<br/>",
            "<b>Visibility:</b> 24&nbsp;km<br/>\n<b>Wind Chill:</b> 6 <br/>",
        );
        let segments = SummarySegments::split(&shifted);
        let err = humidity_segment(&segments).unwrap_err();
        assert!(err.contains("Wind Chill"), "got: {err}");
        assert!(wind_segment(&segments).is_err());
    }

    #[test]
    fn short_summary_reports_missing_segment() {
        let segments = SummarySegments::split("<b>Condition:</b> Fog<br/>");
        let err = humidity_segment(&segments).unwrap_err();
        assert!(err.contains("no segment 5"), "got: {err}");
    }

    #[test]
    fn strip_html_removes_tags_and_entities() {
        assert_eq!(strip_html("<b>Temperature:</b> 8.4&deg;C "), "Temperature: 8.4°C");
        assert_eq!(strip_html("24&nbsp;km"), "24 km");
        assert_eq!(strip_html("  a \n\t b "), "a b");
    }
}
