//! The wire record returned to the client.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One page of shaped results.
///
/// The serialized field names are the client protocol and must not change.
/// `totalDisplayRecords` equals `totalRecords` here: no filtering stage
/// exists in this core, so both counts describe the collection exactly as
/// the assembler received it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridResponse {
    #[serde(rename = "totalRecords")]
    pub total_records: u64,

    #[serde(rename = "totalDisplayRecords")]
    pub total_display_records: u64,

    /// The client's opaque token, returned unchanged
    #[serde(rename = "echoToken")]
    pub echo_token: Value,

    /// Projected rows in result order, every leaf already rendered
    pub rows: Vec<Value>,
}
