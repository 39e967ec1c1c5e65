//! Report rendering for the terminal.

use std::fmt::Write as _;

use maple_feed::ReportOutcome;

/// Pretty JSON: the report, plus `condition_error` when extraction failed.
pub(crate) fn json(outcome: &ReportOutcome) -> anyhow::Result<String> {
    let mut value = serde_json::to_value(&outcome.report)?;
    if let (Some(err), Some(object)) = (&outcome.condition_error, value.as_object_mut()) {
        object.insert(
            "condition_error".to_string(),
            serde_json::json!({
                "stage": err.stage.tag(),
                "detail": err.detail,
            }),
        );
    }
    Ok(serde_json::to_string_pretty(&value)?)
}

/// Plain-text summary: current conditions, then forecasts, then warnings.
/// The configured site location, if any, goes under the feed title.
pub(crate) fn text(outcome: &ReportOutcome, location: Option<(f64, f64)>) -> String {
    let report = &outcome.report;
    let mut out = String::new();

    if !report.feed_title.is_empty() {
        let _ = writeln!(out, "{}", report.feed_title);
        let _ = writeln!(out, "{}", "=".repeat(report.feed_title.chars().count()));
    }
    if let Some((latitude, longitude)) = location {
        let _ = writeln!(out, "Site {latitude:.4}, {longitude:.4}");
    }

    match (&report.current_condition, &outcome.condition_error) {
        (Some(c), _) => {
            let observed = c.observed_at.to_rfc2822();
            let _ = writeln!(out, "Current conditions at {} ({observed})", c.station);
            let _ = writeln!(
                out,
                "  {}, {:.1}°C",
                c.condition_description, c.temperature_celsius
            );
            let _ = writeln!(out, "  Pressure  {:.1} kPa", c.pressure_kpa);
            let _ = writeln!(out, "  Humidity  {:.0} %", c.humidity_percent);
            let _ = writeln!(out, "  Wind      {:.0} km/h", c.wind_speed_kmh);
        }
        (None, Some(err)) => {
            let _ = writeln!(
                out,
                "Current conditions unavailable [{}]: {}",
                err.stage, err.detail
            );
        }
        (None, None) => {
            let _ = writeln!(out, "No current conditions in feed");
        }
    }

    if !report.forecasts.is_empty() {
        let _ = writeln!(out, "\nForecast");
        for forecast in &report.forecasts {
            let _ = writeln!(out, "  {}", forecast.short_label);
            let _ = writeln!(out, "    {}", forecast.long_text.trim());
        }
    }

    if !report.warnings.is_empty() {
        let _ = writeln!(out, "\nWarnings and watches");
        for warning in &report.warnings {
            let _ = writeln!(out, "  {} ({})", warning.short_label, warning.link);
        }
    }

    out.trim_end().to_string()
}
