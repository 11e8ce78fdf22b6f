//! Per-call matcher parameters.
//!
//! Plain option structs with the documented defaults; the values recorded
//! by the call tracer are exactly the resolved fields of these structs.

use serde::Serialize;

use crate::color::ColorRanges;

/// How the matcher should treat color before comparing pixels. Forwarded
/// to the backend uninterpreted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub enum MatchColor {
    /// Backend decides (default).
    #[default]
    Auto,
    /// Binarize the frame with the given polarity bit.
    Binarize(u8),
    /// Only pixels inside these ranges participate in matching.
    Ranges(ColorRanges),
}

/// Text flow direction for font matching and recognition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum TextDir {
    #[default]
    Horizontal,
    Vertical,
}

/// Parameters for dotset searches.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DotsetOptions {
    pub match_color: MatchColor,
    /// Similarity threshold, 0.0 to 1.0.
    pub similarity: f32,
    /// Pattern scale factor applied by the matcher.
    pub scale: f32,
    /// All-matches searches only: drop overlapping candidates before
    /// returning.
    pub ignore_overlaps: bool,
}

impl Default for DotsetOptions {
    fn default() -> Self {
        Self {
            match_color: MatchColor::Auto,
            similarity: 0.9,
            scale: 1.0,
            ignore_overlaps: false,
        }
    }
}

/// Parameters for font matching and text recognition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextOptions {
    pub match_color: MatchColor,
    /// Similarity threshold, 0.0 to 1.0.
    pub similarity: f32,
    pub dir: TextDir,
    /// Allow matches to continue across line breaks.
    pub wrap: bool,
    /// Glyph scale factor applied by the matcher.
    pub char_scale: f32,
    /// Restrict recognition to these characters; `None` uses the whole
    /// font library.
    pub charset: Option<String>,
    /// All-matches searches only: drop overlapping candidates before
    /// returning.
    pub ignore_overlaps: bool,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            match_color: MatchColor::Auto,
            similarity: 0.9,
            dir: TextDir::Horizontal,
            wrap: true,
            char_scale: 1.0,
            charset: None,
            ignore_overlaps: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dotset_defaults() {
        let opts = DotsetOptions::default();

        assert_eq!(opts.match_color, MatchColor::Auto);
        assert_eq!(opts.similarity, 0.9);
        assert_eq!(opts.scale, 1.0);
        assert!(!opts.ignore_overlaps);
    }

    #[test]
    fn test_text_defaults() {
        let opts = TextOptions::default();

        assert_eq!(opts.dir, TextDir::Horizontal);
        assert!(opts.wrap);
        assert_eq!(opts.char_scale, 1.0);
        assert!(opts.charset.is_none());
    }
}
