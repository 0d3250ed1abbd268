//! Share file schema and threshold selection.
//!
//! The input document carries the sharing parameters plus one entry per
//! share, keyed by the share's index:
//!
//! ```json
//! {
//!   "keys": { "n": 4, "k": 3 },
//!   "1": { "base": "10", "value": "4" },
//!   "2": { "base": "2", "value": "111" },
//!   ...
//! }
//! ```
//!
//! Entries deserialize into typed records through an explicit serde schema;
//! the `base` field is tolerated both as a JSON number and as a numeric
//! string, since share files in the wild carry both.

use std::collections::BTreeMap;

use num_bigint::BigInt;
use serde::Deserialize;

use crate::decode::decode;
use crate::error::InputFormatError;
use crate::interpolate::Point;

/// Declared sharing parameters: `n` shares exist, any `k` reconstruct.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Threshold {
    /// Total number of distributed shares (informational)
    pub n: u32,
    /// Number of shares consumed for reconstruction
    pub k: u32,
}

/// A JSON field that may be written as a number or as a numeric string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(u32),
    Text(String),
}

/// One share entry as it appears in the document.
#[derive(Debug, Clone, Deserialize)]
struct RawShare {
    base: NumberOrString,
    value: String,
}

/// A share lifted out of the document: x-coordinate plus the still-encoded
/// y-value and its base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareRecord {
    pub index: u64,
    pub base: u32,
    pub numeral: String,
}

impl ShareRecord {
    /// Decode the numeral and pair it with the index as an interpolation point.
    pub fn to_point(&self) -> Result<Point, InputFormatError> {
        let y = decode(&self.numeral, self.base).map_err(|source| {
            InputFormatError::UndecodableShare {
                index: self.index,
                source,
            }
        })?;
        Ok(Point::new(BigInt::from(self.index), y))
    }
}

/// The parsed share document.
#[derive(Debug, Deserialize)]
pub struct ShareFile {
    pub keys: Threshold,
    #[serde(flatten)]
    entries: BTreeMap<String, RawShare>,
}

impl ShareFile {
    /// Parse a share document from its JSON text.
    pub fn parse(text: &str) -> Result<Self, InputFormatError> {
        Ok(serde_json::from_str(text)?)
    }

    /// All share records, sorted ascending by numeric index.
    ///
    /// The map keys are decimal index strings, so they have to be re-sorted
    /// numerically ("10" comes after "2", not before).
    pub fn records(&self) -> Result<Vec<ShareRecord>, InputFormatError> {
        let mut records = Vec::with_capacity(self.entries.len());
        for (key, raw) in &self.entries {
            let index: u64 = key
                .parse()
                .ok()
                .filter(|&index| index > 0)
                .ok_or_else(|| InputFormatError::InvalidIndex(key.clone()))?;
            let base = match &raw.base {
                NumberOrString::Number(base) => *base,
                NumberOrString::Text(text) => {
                    text.parse().map_err(|_| InputFormatError::InvalidBase {
                        index,
                        base: text.clone(),
                    })?
                }
            };
            records.push(ShareRecord {
                index,
                base,
                numeral: raw.value.clone(),
            });
        }
        records.sort_by_key(|record| record.index);
        Ok(records)
    }

    /// Decode the first `k` shares (ascending index) into interpolation
    /// points. Any `k` consistent shares reconstruct the same secret; taking
    /// the lowest indices makes the selection deterministic.
    pub fn threshold_points(&self) -> Result<Vec<Point>, InputFormatError> {
        let k = self.keys.k as usize;
        if k == 0 {
            return Err(InputFormatError::ZeroThreshold);
        }
        let records = self.records()?;
        if records.len() < k {
            return Err(InputFormatError::NotEnoughShares {
                needed: k,
                available: records.len(),
            });
        }
        records[..k].iter().map(ShareRecord::to_point).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DecodeError;
    use crate::interpolate::interpolate_at_zero;

    #[test]
    fn parses_and_reconstructs_mixed_base_document() {
        // 4, 7, 12 at x = 1, 2, 3 -- the quadratic f(x) = 3 + x^2
        let text = r#"{
            "keys": { "n": 3, "k": 3 },
            "1": { "base": "10", "value": "4" },
            "2": { "base": "2", "value": "111" },
            "3": { "base": "10", "value": "12" }
        }"#;
        let file = ShareFile::parse(text).unwrap();
        let points = file.threshold_points().unwrap();
        assert_eq!(points.len(), 3);
        assert_eq!(interpolate_at_zero(&points).unwrap(), BigInt::from(3));
    }

    #[test]
    fn base_accepts_number_and_string() {
        let text = r#"{
            "keys": { "n": 2, "k": 2 },
            "1": { "base": 10, "value": "5" },
            "2": { "base": "10", "value": "7" }
        }"#;
        let records = ShareFile::parse(text).unwrap().records().unwrap();
        assert_eq!(records[0].base, 10);
        assert_eq!(records[1].base, 10);
    }

    #[test]
    fn indices_sort_numerically_not_lexicographically() {
        let text = r#"{
            "keys": { "n": 3, "k": 2 },
            "10": { "base": "10", "value": "100" },
            "2": { "base": "10", "value": "20" },
            "1": { "base": "10", "value": "10" }
        }"#;
        let file = ShareFile::parse(text).unwrap();
        let records = file.records().unwrap();
        assert_eq!(
            records.iter().map(|r| r.index).collect::<Vec<_>>(),
            vec![1, 2, 10]
        );
        // threshold selection takes indices 1 and 2, never "10" first
        let points = file.threshold_points().unwrap();
        assert_eq!(points[0].x, BigInt::from(1));
        assert_eq!(points[1].x, BigInt::from(2));
    }

    #[test]
    fn takes_first_k_of_surplus_shares() {
        // f(x) = 1 + 3x shared 4 ways with threshold 3
        let text = r#"{
            "keys": { "n": 4, "k": 3 },
            "1": { "base": "10", "value": "4" },
            "2": { "base": "10", "value": "7" },
            "3": { "base": "10", "value": "10" },
            "4": { "base": "10", "value": "13" }
        }"#;
        let points = ShareFile::parse(text).unwrap().threshold_points().unwrap();
        assert_eq!(points.len(), 3);
        assert_eq!(interpolate_at_zero(&points).unwrap(), BigInt::from(1));
    }

    #[test]
    fn rejects_document_without_keys() {
        let text = r#"{ "1": { "base": "10", "value": "4" } }"#;
        assert!(matches!(
            ShareFile::parse(text),
            Err(InputFormatError::Malformed(_))
        ));
    }

    #[test]
    fn rejects_bad_index() {
        let text = r#"{
            "keys": { "n": 1, "k": 1 },
            "share-one": { "base": "10", "value": "4" }
        }"#;
        let file = ShareFile::parse(text).unwrap();
        assert!(matches!(
            file.records(),
            Err(InputFormatError::InvalidIndex(_))
        ));

        let text = r#"{
            "keys": { "n": 1, "k": 1 },
            "0": { "base": "10", "value": "4" }
        }"#;
        let file = ShareFile::parse(text).unwrap();
        assert!(matches!(
            file.records(),
            Err(InputFormatError::InvalidIndex(_))
        ));
    }

    #[test]
    fn rejects_bad_base_text() {
        let text = r#"{
            "keys": { "n": 1, "k": 1 },
            "1": { "base": "ten", "value": "4" }
        }"#;
        let file = ShareFile::parse(text).unwrap();
        assert!(matches!(
            file.records(),
            Err(InputFormatError::InvalidBase { index: 1, .. })
        ));
    }

    #[test]
    fn rejects_undecodable_share_value() {
        let text = r#"{
            "keys": { "n": 1, "k": 1 },
            "1": { "base": "2", "value": "102" }
        }"#;
        let file = ShareFile::parse(text).unwrap();
        assert!(matches!(
            file.threshold_points(),
            Err(InputFormatError::UndecodableShare {
                index: 1,
                source: DecodeError::InvalidDigit { digit: '2', base: 2 },
            })
        ));
    }

    #[test]
    fn rejects_threshold_larger_than_share_count() {
        let text = r#"{
            "keys": { "n": 5, "k": 3 },
            "1": { "base": "10", "value": "4" },
            "2": { "base": "10", "value": "7" }
        }"#;
        let file = ShareFile::parse(text).unwrap();
        assert!(matches!(
            file.threshold_points(),
            Err(InputFormatError::NotEnoughShares {
                needed: 3,
                available: 2,
            })
        ));
    }

    #[test]
    fn rejects_zero_threshold() {
        let text = r#"{
            "keys": { "n": 1, "k": 0 },
            "1": { "base": "10", "value": "4" }
        }"#;
        let file = ShareFile::parse(text).unwrap();
        assert!(matches!(
            file.threshold_points(),
            Err(InputFormatError::ZeroThreshold)
        ));
    }
}
