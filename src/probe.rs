//! Search-kind dispatch: one probe per backend kind, one scan skeleton.

use image::RgbaImage;

use crate::backend::VisionBackend;
use crate::color::ColorRanges;
use crate::options::{DotsetOptions, TextOptions};
use crate::target::RawMatch;

/// The capability handed to the scan loop. A probe selects which external
/// matcher call to make for a captured frame; it performs no numeric work
/// and forwards its parameters unchanged.
pub(crate) trait Probe {
    fn first(&self, frame: &RgbaImage) -> Option<RawMatch>;
    fn all(&self, frame: &RgbaImage) -> Vec<RawMatch>;
}

pub(crate) struct ColorProbe<'a, V: VisionBackend> {
    pub vision: &'a V,
    pub ranges: &'a ColorRanges,
}

impl<'a, V: VisionBackend> Probe for ColorProbe<'a, V> {
    fn first(&self, frame: &RgbaImage) -> Option<RawMatch> {
        self.vision.find_color(frame, self.ranges)
    }

    fn all(&self, frame: &RgbaImage) -> Vec<RawMatch> {
        self.vision.find_colors(frame, self.ranges)
    }
}

pub(crate) struct DotsetProbe<'a, V: VisionBackend> {
    pub vision: &'a V,
    pub lib: &'a V::DotsetLib,
    pub names: &'a [&'a str],
    pub opts: &'a DotsetOptions,
}

impl<'a, V: VisionBackend> Probe for DotsetProbe<'a, V> {
    fn first(&self, frame: &RgbaImage) -> Option<RawMatch> {
        self.vision.find_dotset(frame, self.lib, self.names, self.opts)
    }

    fn all(&self, frame: &RgbaImage) -> Vec<RawMatch> {
        self.vision.find_dotsets(frame, self.lib, self.names, self.opts)
    }
}

pub(crate) struct TextProbe<'a, V: VisionBackend> {
    pub vision: &'a V,
    pub lib: &'a V::FontLib,
    pub texts: &'a [&'a str],
    pub opts: &'a TextOptions,
}

impl<'a, V: VisionBackend> Probe for TextProbe<'a, V> {
    fn first(&self, frame: &RgbaImage) -> Option<RawMatch> {
        self.vision.find_text(frame, self.lib, self.texts, self.opts)
    }

    fn all(&self, frame: &RgbaImage) -> Vec<RawMatch> {
        self.vision.find_texts(frame, self.lib, self.texts, self.opts)
    }
}
