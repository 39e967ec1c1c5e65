//! Typed records produced by one extraction pass over a weather feed.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// One `<entry>` of the feed envelope, fields copied as published.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericEntry {
    pub title: String,
    /// Timestamp text exactly as published, e.g. `"2026-10-19T17:00:00Z"`.
    pub updated_raw: String,
    pub link_href: String,
    /// Raw summary body. For current conditions this is an HTML fragment.
    pub summary_text: String,
    pub category_term: String,
}

impl GenericEntry {
    /// Returns the modelled category for this entry, or `None` if the feed
    /// carries a term the pipeline does not handle.
    #[must_use]
    pub fn category(&self) -> Option<EntryCategory> {
        EntryCategory::from_term(&self.category_term)
    }
}

/// The category vocabulary the pipeline dispatches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryCategory {
    CurrentConditions,
    WeatherForecasts,
    WarningsAndWatches,
}

impl EntryCategory {
    pub const ALL: [EntryCategory; 3] = [
        EntryCategory::CurrentConditions,
        EntryCategory::WeatherForecasts,
        EntryCategory::WarningsAndWatches,
    ];

    /// Exact, case-sensitive match against the feed's `category/@term`.
    #[must_use]
    pub fn from_term(term: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.term() == term)
    }

    #[must_use]
    pub fn term(self) -> &'static str {
        match self {
            EntryCategory::CurrentConditions => "Current Conditions",
            EntryCategory::WeatherForecasts => "Weather Forecasts",
            EntryCategory::WarningsAndWatches => "Warnings and Watches",
        }
    }
}

impl std::fmt::Display for EntryCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.term())
    }
}

/// Observed conditions recovered from the "Current Conditions" entry.
///
/// Either every numeric field parsed or no record exists; there is no
/// partially-populated value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentCondition {
    pub condition_description: String,
    pub temperature_celsius: f64,
    pub observed_at: DateTime<FixedOffset>,
    /// Reporting station, e.g. `"Ottawa Macdonald-Cartier Int'l Airport"`.
    pub station: String,
    pub pressure_kpa: f64,
    pub humidity_percent: f64,
    pub wind_speed_kmh: f64,
    pub link: String,
}

/// A forecast period, copied verbatim from its entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Forecast {
    pub short_label: String,
    pub long_text: String,
    pub link: String,
    pub updated_raw: String,
}

/// An active warning or watch, copied verbatim from its entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warning {
    pub short_label: String,
    pub long_text: String,
    pub link: String,
    pub updated_raw: String,
}

/// The aggregated result of one feed snapshot. Forecasts and warnings keep
/// feed order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub feed_title: String,
    pub feed_updated_raw: String,
    pub current_condition: Option<CurrentCondition>,
    pub forecasts: Vec<Forecast>,
    pub warnings: Vec<Warning>,
}

impl WeatherReport {
    /// Returns `true` if the report carries no records at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.current_condition.is_none() && self.forecasts.is_empty() && self.warnings.is_empty()
    }
}
