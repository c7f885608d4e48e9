use serde::ser::{Serialize, SerializeMap, Serializer};

use filters::StatEntry;

/// Label → value map of run-level transfer statistics.
///
/// Labels keep the order in which they were first seen. Recording a label a
/// second time overwrites its value in place.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TransferStats {
    entries: Vec<(String, String)>,
}

impl TransferStats {
    /// Creates an empty map.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Stores `value` under `label`, returning the value it replaced.
    pub fn insert(&mut self, label: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let label = label.into();
        let value = value.into();
        if let Some((_, existing)) = self.entries.iter_mut().find(|(key, _)| *key == label) {
            return Some(std::mem::replace(existing, value));
        }
        self.entries.push((label, value));
        None
    }

    /// Stores an extracted entry, returning the value it replaced.
    pub fn record(&mut self, entry: StatEntry) -> Option<String> {
        let (label, value) = entry.into_parts();
        self.insert(label, value)
    }

    /// Value recorded for `label`.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == label)
            .map(|(_, value)| value.as_str())
    }

    /// `(label, value)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(label, value)| (label.as_str(), value.as_str()))
    }

    /// Number of distinct labels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for TransferStats {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, value) in &self.entries {
            map.serialize_entry(label, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_value_overwrites_in_place() {
        let mut stats = TransferStats::new();
        assert_eq!(stats.insert("Number of files", "10"), None);
        stats.insert("Total bytes sent", "99");
        assert_eq!(stats.insert("Number of files", "12"), Some("10".to_owned()));

        assert_eq!(stats.len(), 2);
        assert_eq!(stats.get("Number of files"), Some("12"));
        assert_eq!(
            stats.iter().collect::<Vec<_>>(),
            [("Number of files", "12"), ("Total bytes sent", "99")]
        );
    }

    #[test]
    fn record_uses_entry_parts() {
        let mut stats = TransferStats::default();
        stats.record(StatEntry::new("Literal data", "512"));
        assert_eq!(stats.get("Literal data"), Some("512"));
        assert_eq!(stats.get("Matched data"), None);
    }

    #[test]
    fn serialises_as_ordered_object() {
        let mut stats = TransferStats::new();
        stats.insert("Total bytes sent", "1");
        stats.insert("Number of files", "2");
        let json = serde_json::to_string(&stats).unwrap();
        assert_eq!(json, r#"{"Total bytes sent":"1","Number of files":"2"}"#);
    }
}
