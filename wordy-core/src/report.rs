//! Ranked grouping report

use std::fmt;

/// A word grouping and the number of times it occurred
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Grouping {
    /// Space-joined words
    #[cfg_attr(feature = "serde", serde(rename = "grouping"))]
    pub text: String,
    /// Number of occurrences
    pub count: u64,
}

impl fmt::Display for Grouping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.count, self.text)
    }
}

/// Groupings sorted by count, most frequent first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    entries: Vec<Grouping>,
}

impl Report {
    /// Rank entries by descending count; the sort is stable.
    pub fn from_entries(mut entries: Vec<Grouping>) -> Self {
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        Self { entries }
    }

    /// All entries in rank order
    pub fn entries(&self) -> &[Grouping] {
        &self.entries
    }

    /// The first `k` entries, or all of them if there are fewer
    pub fn top(&self, k: usize) -> &[Grouping] {
        &self.entries[..k.min(self.entries.len())]
    }

    /// Iterate over entries in rank order
    pub fn iter(&self) -> std::slice::Iter<'_, Grouping> {
        self.entries.iter()
    }

    /// Number of distinct groupings
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the report has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Report {
    type Item = &'a Grouping;
    type IntoIter = std::slice::Iter<'a, Grouping>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grouping(text: &str, count: u64) -> Grouping {
        Grouping {
            text: text.to_string(),
            count,
        }
    }

    #[test]
    fn test_sorted_descending_and_stable() {
        let report = Report::from_entries(vec![
            grouping("a b", 1),
            grouping("b c", 3),
            grouping("c d", 1),
            grouping("d e", 3),
        ]);

        let order: Vec<&str> = report.iter().map(|g| g.text.as_str()).collect();
        assert_eq!(order, vec!["b c", "d e", "a b", "c d"]);
    }

    #[test]
    fn test_top_truncates() {
        let report = Report::from_entries(vec![
            grouping("x", 2),
            grouping("y", 5),
            grouping("z", 1),
        ]);

        assert_eq!(report.top(2), &[grouping("y", 5), grouping("x", 2)]);
        assert_eq!(report.top(10).len(), 3);
        assert!(report.top(0).is_empty());
    }

    #[test]
    fn test_display_format() {
        assert_eq!(grouping("i love tacos", 4).to_string(), "4 - i love tacos");
    }

    #[test]
    fn test_empty_report() {
        let report = Report::default();
        assert!(report.is_empty());
        assert_eq!(report.len(), 0);
        assert!(report.top(100).is_empty());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialize_field_names() {
        let json = serde_json::to_string(&grouping("so yum", 2)).unwrap();
        assert_eq!(json, r#"{"grouping":"so yum","count":2}"#);
    }
}
