//! Hex color-range specs forwarded to the color matcher.

use std::str::FromStr;

use serde::Serialize;

use crate::error::{SeekError, SeekResult};

/// An inclusive RGB range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorRange {
    pub min: [u8; 3],
    pub max: [u8; 3],
}

impl ColorRange {
    pub fn new(min: [u8; 3], max: [u8; 3]) -> Self {
        Self { min, max }
    }

    /// A range matching exactly one color.
    pub fn exact(rgb: [u8; 3]) -> Self {
        Self { min: rgb, max: rgb }
    }
}

/// An ordered set of color ranges, written `"RRGGBB-RRGGBB|RRGGBB|..."`.
///
/// The search core only ever asks whether the set is empty; interpreting
/// the ranges against pixels is the matcher backend's job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ColorRanges(pub Vec<ColorRange>);

impl ColorRanges {
    /// Parse a `|`-separated range spec. Each entry is either a single hex
    /// color (`"FF0000"`, matched exactly) or a `lo-hi` pair
    /// (`"101010-2F2F2F"`). Whitespace around entries is ignored.
    pub fn parse(spec: &str) -> SeekResult<Self> {
        let mut ranges = Vec::new();
        for entry in spec.split('|') {
            let entry = entry.trim();
            if entry.is_empty() {
                continue;
            }
            ranges.push(parse_entry(spec, entry)?);
        }
        Ok(Self(ranges))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromStr for ColorRanges {
    type Err = SeekError;

    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        Self::parse(spec)
    }
}

impl From<Vec<ColorRange>> for ColorRanges {
    fn from(ranges: Vec<ColorRange>) -> Self {
        Self(ranges)
    }
}

fn parse_entry(spec: &str, entry: &str) -> SeekResult<ColorRange> {
    match entry.split_once('-') {
        Some((lo, hi)) => {
            let min = parse_hex(spec, lo.trim())?;
            let max = parse_hex(spec, hi.trim())?;
            Ok(ColorRange::new(min, max))
        }
        None => Ok(ColorRange::exact(parse_hex(spec, entry)?)),
    }
}

fn parse_hex(spec: &str, part: &str) -> SeekResult<[u8; 3]> {
    let malformed = |reason: String| SeekError::ColorSpec {
        spec: spec.to_string(),
        reason,
    };

    if part.len() != 6 || !part.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(malformed(format!("'{part}' is not a 6-digit hex color")));
    }
    let value = u32::from_str_radix(part, 16)
        .map_err(|e| malformed(format!("'{part}': {e}")))?;
    Ok([(value >> 16) as u8, (value >> 8) as u8, value as u8])
}
