//! Routing of decoded entries by their `category/@term`.

use maple_core::{EntryCategory, GenericEntry};

/// Entries partitioned by category, each list in feed order.
///
/// Every decoded entry lands in exactly one list. Unknown terms go to
/// `dropped`; they are not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedEntries {
    pub current_conditions: Vec<GenericEntry>,
    pub forecasts: Vec<GenericEntry>,
    pub warnings: Vec<GenericEntry>,
    pub dropped: Vec<GenericEntry>,
}

impl ClassifiedEntries {
    /// The canonical current-conditions entry: the last one in feed order.
    #[must_use]
    pub fn current(&self) -> Option<&GenericEntry> {
        self.current_conditions.last()
    }

    /// Total number of entries across all partitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.current_conditions.len()
            + self.forecasts.len()
            + self.warnings.len()
            + self.dropped.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Partition entries by exact category-term match.
#[must_use]
pub fn classify(entries: Vec<GenericEntry>) -> ClassifiedEntries {
    let mut classified = ClassifiedEntries::default();

    for entry in entries {
        match entry.category() {
            Some(EntryCategory::CurrentConditions) => classified.current_conditions.push(entry),
            Some(EntryCategory::WeatherForecasts) => classified.forecasts.push(entry),
            Some(EntryCategory::WarningsAndWatches) => classified.warnings.push(entry),
            None => {
                tracing::debug!(
                    term = %entry.category_term,
                    title = %entry.title,
                    "dropping entry with unmodelled category"
                );
                classified.dropped.push(entry);
            }
        }
    }

    if classified.current_conditions.len() > 1 {
        tracing::debug!(
            count = classified.current_conditions.len(),
            "multiple current-conditions entries; using the last"
        );
    }

    classified
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: &str, term: &str) -> GenericEntry {
        GenericEntry {
            title: title.to_string(),
            updated_raw: String::new(),
            link_href: String::new(),
            summary_text: String::new(),
            category_term: term.to_string(),
        }
    }

    fn titles(list: &[GenericEntry]) -> Vec<String> {
        list.iter().map(|e| e.title.clone()).collect()
    }

    #[test]
    fn partitions_by_exact_term() {
        let classified = classify(vec![
            entry("w1", "Warnings and Watches"),
            entry("f1", "Weather Forecasts"),
            entry("c1", "Current Conditions"),
            entry("x1", "weather forecasts"),
            entry("f2", "Weather Forecasts"),
            entry("x2", ""),
        ]);

        assert_eq!(titles(&classified.forecasts), ["f1", "f2"]);
        assert_eq!(titles(&classified.warnings), ["w1"]);
        assert_eq!(titles(&classified.current_conditions), ["c1"]);
        assert_eq!(titles(&classified.dropped), ["x1", "x2"]);
        assert_eq!(classified.len(), 6);
    }

    #[test]
    fn last_current_conditions_entry_is_canonical() {
        let classified = classify(vec![
            entry("older", "Current Conditions"),
            entry("f1", "Weather Forecasts"),
            entry("newer", "Current Conditions"),
        ]);
        assert_eq!(classified.current_conditions.len(), 2);
        assert_eq!(classified.current().map(|e| e.title.as_str()), Some("newer"));
    }

    #[test]
    fn empty_input_classifies_to_nothing() {
        let classified = classify(Vec::new());
        assert!(classified.is_empty());
        assert!(classified.current().is_none());
    }
}
