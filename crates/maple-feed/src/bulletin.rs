//! Forecast and warning entries, copied field for field.

use maple_core::{Forecast, GenericEntry, Warning};

/// Map a "Weather Forecasts" entry to a [`Forecast`]. Never fails.
#[must_use]
pub fn extract_forecast(entry: &GenericEntry) -> Forecast {
    warn_if_unlabelled(entry);
    Forecast {
        short_label: entry.title.clone(),
        long_text: entry.summary_text.clone(),
        link: entry.link_href.clone(),
        updated_raw: entry.updated_raw.clone(),
    }
}

/// Map a "Warnings and Watches" entry to a [`Warning`]. Never fails.
#[must_use]
pub fn extract_warning(entry: &GenericEntry) -> Warning {
    warn_if_unlabelled(entry);
    Warning {
        short_label: entry.title.clone(),
        long_text: entry.summary_text.clone(),
        link: entry.link_href.clone(),
        updated_raw: entry.updated_raw.clone(),
    }
}

fn warn_if_unlabelled(entry: &GenericEntry) {
    if entry.title.trim().is_empty() {
        tracing::warn!(
            category = %entry.category_term,
            link = %entry.link_href,
            "entry has an empty title"
        );
    }
}
