//! Match results and their translation into window space.

use serde::Serialize;

/// A single match in frame-local coordinates, as produced by a matcher
/// backend for one captured region.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RawMatch {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    /// Which pattern, text or color matched.
    pub label: String,
    /// Similarity score reported by the backend, 0.0 to 1.0.
    pub score: f32,
}

/// A match translated into window client coordinates.
///
/// Absence is `Option<Target>::None`; a search that finds nothing is not an
/// error at any layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Target {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub label: String,
    pub score: f32,
}

impl Target {
    /// Translate a frame-local match by the origin of the region it was
    /// found in. Everything but the position carries over unchanged.
    pub fn from_raw(raw: RawMatch, origin: (u32, u32)) -> Self {
        Self {
            x: origin.0 + raw.x,
            y: origin.1 + raw.y,
            width: raw.width,
            height: raw.height,
            label: raw.label,
            score: raw.score,
        }
    }

    /// Center point, the usual click target downstream.
    pub fn center(&self) -> (u32, u32) {
        (self.x + self.width / 2, self.y + self.height / 2)
    }
}
