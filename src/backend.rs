//! Contracts for the external capture and matching collaborators.
//!
//! The search core owns none of the pixel math and none of the window
//! lifecycle. Capture, pattern libraries and the matchers themselves plug
//! in through the traits below.

use image::RgbaImage;
use serde::Serialize;

use crate::color::ColorRanges;
use crate::options::{DotsetOptions, TextOptions};
use crate::region::Region;
use crate::target::RawMatch;

/// Opaque handle of an externally owned window.
///
/// Validity is never assumed to persist across calls; a stale handle shows
/// up as a capture failure, not as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct WindowHandle(pub u64);

/// Captures one region of a window into a pixel buffer.
pub trait FrameSource {
    /// `None` covers every capture failure: destroyed window, zero-size
    /// region, transient refusal by the platform. The scan treats it as
    /// "skip this region, continue", never as fatal.
    fn capture(&self, window: WindowHandle, region: Region) -> Option<RgbaImage>;
}

/// The one question the search core asks of a pattern library.
///
/// Libraries are loaded and parsed externally; here they are opaque values
/// with an entry count.
pub trait PatternLib {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Matching backend contract, one method pair per search kind.
///
/// Implementations own the comparison math. The search core forwards every
/// parameter unchanged and only repositions the results it gets back, so
/// all coordinates here are frame-local.
pub trait VisionBackend {
    type FontLib: PatternLib;
    type DotsetLib: PatternLib;

    fn find_color(&self, frame: &RgbaImage, ranges: &ColorRanges) -> Option<RawMatch>;
    fn find_colors(&self, frame: &RgbaImage, ranges: &ColorRanges) -> Vec<RawMatch>;

    fn find_dotset(
        &self,
        frame: &RgbaImage,
        lib: &Self::DotsetLib,
        names: &[&str],
        opts: &DotsetOptions,
    ) -> Option<RawMatch>;

    fn find_dotsets(
        &self,
        frame: &RgbaImage,
        lib: &Self::DotsetLib,
        names: &[&str],
        opts: &DotsetOptions,
    ) -> Vec<RawMatch>;

    fn find_text(
        &self,
        frame: &RgbaImage,
        lib: &Self::FontLib,
        texts: &[&str],
        opts: &TextOptions,
    ) -> Option<RawMatch>;

    fn find_texts(
        &self,
        frame: &RgbaImage,
        lib: &Self::FontLib,
        texts: &[&str],
        opts: &TextOptions,
    ) -> Vec<RawMatch>;

    /// Full-frame recognition: the backend groups recognized glyphs into
    /// words or lines and returns the assembled strings in reading order.
    fn recognize(&self, frame: &RgbaImage, lib: &Self::FontLib, opts: &TextOptions)
    -> Vec<String>;
}

/// Tri-state library update for [`SearchWindow::set_libs`].
///
/// Distinguishes "leave the configured library alone" from "explicitly
/// remove it".
///
/// [`SearchWindow::set_libs`]: crate::window::SearchWindow::set_libs
#[derive(Debug, Clone, Default)]
pub enum LibUpdate<T> {
    /// Keep whatever is currently configured (default).
    #[default]
    Keep,
    /// Remove the configured library; searches against it short-circuit
    /// empty until a new one is set.
    Clear,
    /// Replace the configured library.
    Set(T),
}
