//! Occurrence payloads from the language service.
//!
//! For the identifier under the caret, the service reports every place it is read and every
//! place it is written, as offset/length regions, plus the state id the result was computed
//! against.

use serde_json::Value;

/// A flat text region addressed as character offset plus length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextRegion {
    /// Start of the region (inclusive character offset).
    pub offset: usize,
    /// Region length in characters.
    pub length: usize,
}

impl TextRegion {
    /// Create a new region.
    pub fn new(offset: usize, length: usize) -> Self {
        Self { offset, length }
    }

    /// End of the region (exclusive character offset).
    pub fn end_offset(&self) -> usize {
        self.offset + self.length
    }

    /// Parse one region from its wire value (`offset`, `length`).
    pub fn from_value(value: &Value) -> Option<Self> {
        let offset = value.get("offset")?.as_u64()? as usize;
        let length = value.get("length")?.as_u64()? as usize;
        Some(Self { offset, length })
    }
}

/// The occurrence sets for one identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccurrenceResult {
    /// Regions where the identifier is read.
    pub read_regions: Vec<TextRegion>,
    /// Regions where the identifier is written.
    pub write_regions: Vec<TextRegion>,
    /// The server state the result was computed against, for staleness checks by the host.
    pub state_id: Option<String>,
}

impl OccurrenceResult {
    /// Create a result from its region sets, with no state id attached.
    pub fn new(read_regions: Vec<TextRegion>, write_regions: Vec<TextRegion>) -> Self {
        Self {
            read_regions,
            write_regions,
            state_id: None,
        }
    }

    /// Parse a result from its wire value (`readRegions`, `writeRegions`, `stateId`).
    ///
    /// JSON `null` yields `None`, the "caret is not on an identifier" outcome. A missing or
    /// malformed region array yields an empty set; malformed region elements are skipped.
    pub fn from_value(value: &Value) -> Option<Self> {
        if value.is_null() {
            return None;
        }

        let read_regions = regions_from_value(value.get("readRegions"));
        let write_regions = regions_from_value(value.get("writeRegions"));
        let state_id = value
            .get("stateId")
            .and_then(Value::as_str)
            .map(|s| s.to_string());

        Some(Self {
            read_regions,
            write_regions,
            state_id,
        })
    }
}

fn regions_from_value(value: Option<&Value>) -> Vec<TextRegion> {
    value
        .and_then(Value::as_array)
        .map(|regions| regions.iter().filter_map(TextRegion::from_value).collect())
        .unwrap_or_default()
}
