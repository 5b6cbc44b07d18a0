use std::io::Write;

use super::*;

impl SourceRecord {
    pub fn file(url: String, sha512: String, dest_filename: String) -> Self {
        SourceRecord {
            kind: "file".to_string(),
            url,
            sha512,
            dest_filename,
        }
    }
}

impl SourceList {
    pub fn empty() -> Self {
        SourceList(Vec::new())
    }

    pub fn push(&mut self, record: SourceRecord) {
        self.0.push(record);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SourceRecord> {
        self.0.iter()
    }

    /// Serialize with human-readable indentation, keys in declaration order.
    pub fn write_to<W: Write>(&self, writer: W) -> Result<(), String> {
        serde_json::to_writer_pretty(writer, &self.0)
            .map_err(|e| format!("cannot serialize source list: {e}"))
    }
}

impl IntoIterator for SourceList {
    type Item = SourceRecord;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
