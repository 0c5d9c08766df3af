// src/listings/record.rs
use serde::ser::{Serialize, SerializeMap, Serializer};

/// One available property row, keyed by the sheet's header names.
///
/// Keys keep the header order. When a header name repeats, the key stays at
/// its first position and the value from the later column wins.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListingRecord {
    fields: Vec<(String, String)>,
}

impl ListingRecord {
    /// Pair every header with the cell at the same position.
    /// Cells missing from a short row become empty strings.
    pub fn from_row(headers: &[String], row: &[String]) -> Self {
        let mut fields: Vec<(String, String)> = Vec::with_capacity(headers.len());

        for (index, header) in headers.iter().enumerate() {
            let value = row.get(index).cloned().unwrap_or_default();

            match fields.iter_mut().find(|(key, _)| key == header) {
                Some(slot) => slot.1 = value,
                None => fields.push((header.clone(), value)),
            }
        }

        Self { fields }
    }

    #[cfg(test)]
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let headers_and_cells: (Vec<String>, Vec<String>) = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .unzip();
        Self::from_row(&headers_and_cells.0, &headers_and_cells.1)
    }

    /// Raw cell value for a column, `None` when the sheet has no such header.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Like `get`, but treats blank cells as absent.
    pub fn non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.trim().is_empty())
    }

    #[cfg(test)]
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }
}

impl Serialize for ListingRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
