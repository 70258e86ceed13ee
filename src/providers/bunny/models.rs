// 3rd party crates
use serde::{Deserialize, Serialize};

/// Response payload of the zone search endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ZoneListResponse {
    #[serde(default)]
    pub items: Vec<ZoneItem>,
}

/// A single DNS zone as returned by the provider.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ZoneItem {
    pub id: i64,
    #[serde(default)]
    pub records: Vec<RecordItem>,
}

/// A DNS record inside a zone payload.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RecordItem {
    pub id: i64,
    #[serde(rename = "Type", default)]
    pub record_type: i32,
    #[serde(default)]
    pub name: String,
}

/// Body of a record update request. `Id` is the record's numeric-string
/// identifier, `Type` the fixed A-record code.
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateRecord {
    pub id: String,
    #[serde(rename = "Type")]
    pub record_type: i32,
    pub value: String,
}
