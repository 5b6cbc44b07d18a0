use serde::{Deserialize, Serialize};

mod r#impl;

/// One fetchable file in the offline cache manifest.
/// Field order here fixes the key order in the emitted JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRecord {
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
    pub sha512: String,
    #[serde(rename = "dest-filename")]
    pub dest_filename: String,
}

/// Ordered collection of records, emitted as a bare JSON array.
#[derive(Debug, Serialize, Deserialize)]
pub struct SourceList(Vec<SourceRecord>);
