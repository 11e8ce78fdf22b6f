//! A window wired to a capture source and a matching backend.

use std::path::Path;

use image::RgbaImage;
use serde_json::json;

use crate::backend::{FrameSource, LibUpdate, PatternLib, VisionBackend, WindowHandle};
use crate::color::ColorRanges;
use crate::error::{SeekError, SeekResult};
use crate::options::{DotsetOptions, TextOptions};
use crate::probe::{ColorProbe, DotsetProbe, TextProbe};
use crate::region::{AreaSpec, Rect, Region};
use crate::scan::{scan_all, scan_first, scan_lines};
use crate::target::Target;
use crate::trace::{self, CallLog};

/// A target window bound to its capture source and matching backend.
///
/// The only state that survives across calls is the pair of configured
/// pattern libraries, replaced atomically by [`set_libs`]. Searches take
/// `&self` and read that state without mutating it; replacing a library
/// concurrently with an in-flight search is the caller's responsibility
/// (single writer, no built-in locking).
///
/// Every search runs the same synchronous protocol: resolve the area
/// argument into an ordered region list, check the backend gate once, then
/// capture and match region by region. A region whose capture fails is
/// skipped, never retried, never fatal. All returned coordinates are in the
/// window's client space.
///
/// [`set_libs`]: SearchWindow::set_libs
pub struct SearchWindow<S, V>
where
    S: FrameSource,
    V: VisionBackend,
{
    handle: WindowHandle,
    source: S,
    vision: V,
    font_lib: Option<V::FontLib>,
    dotset_lib: Option<V::DotsetLib>,
}

impl<S, V> SearchWindow<S, V>
where
    S: FrameSource,
    V: VisionBackend,
{
    /// Bind a window handle to its collaborators. No libraries are
    /// configured initially, so dotset and font searches start gated.
    pub fn new(handle: WindowHandle, source: S, vision: V) -> Self {
        Self {
            handle,
            source,
            vision,
            font_lib: None,
            dotset_lib: None,
        }
    }

    pub fn handle(&self) -> WindowHandle {
        self.handle
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn vision(&self) -> &V {
        &self.vision
    }

    /// Whether font matching and recognition are currently usable.
    pub fn font_ready(&self) -> bool {
        self.font_lib.as_ref().is_some_and(|lib| !lib.is_empty())
    }

    /// Whether dotset matching is currently usable.
    pub fn dotset_ready(&self) -> bool {
        self.dotset_lib.as_ref().is_some_and(|lib| !lib.is_empty())
    }

    /// Replace, clear or keep each configured library.
    ///
    /// `Keep` leaves a library untouched, `Clear` removes it so the
    /// corresponding searches short-circuit empty, `Set` swaps in a new
    /// one. The two updates are independent.
    pub fn set_libs(
        &mut self,
        font: LibUpdate<V::FontLib>,
        dotset: LibUpdate<V::DotsetLib>,
    ) -> &mut Self {
        match font {
            LibUpdate::Keep => {}
            LibUpdate::Clear => self.font_lib = None,
            LibUpdate::Set(lib) => self.font_lib = Some(lib),
        }
        match dotset {
            LibUpdate::Keep => {}
            LibUpdate::Clear => self.dotset_lib = None,
            LibUpdate::Set(lib) => self.dotset_lib = Some(lib),
        }
        self
    }

    /// One-shot capture with optional persistence.
    ///
    /// `Ok(None)` when the capture itself fails. A frame that was captured
    /// but cannot be encoded or written to `save_path` is an error.
    pub fn capture(
        &self,
        area: Option<Rect>,
        save_path: Option<&Path>,
    ) -> SeekResult<Option<RgbaImage>> {
        let region = area.map_or(Region::Whole, Region::Rect);
        let Some(frame) = self.source.capture(self.handle, region) else {
            log::debug!("one-shot capture failed for {region:?}");
            return Ok(None);
        };
        if let Some(path) = save_path {
            frame.save(path).map_err(|source| SeekError::SaveFailed {
                path: path.to_path_buf(),
                source,
            })?;
        }
        Ok(Some(frame))
    }

    /// Find the first region-priority match of any of the color ranges.
    pub fn find_color(
        &self,
        ranges: &ColorRanges,
        areas: impl Into<AreaSpec>,
        log: Option<&mut CallLog>,
    ) -> Option<Target> {
        let regions = areas.into().resolve();
        let found = if ranges.is_empty() {
            None
        } else {
            let probe = ColorProbe {
                vision: &self.vision,
                ranges,
            };
            scan_first(&self.source, self.handle, &regions, &probe)
        };
        trace::record(
            log,
            "find_color",
            &json!({ "ranges": ranges, "regions": regions }),
            &found,
        );
        found
    }

    /// Find every match of the color ranges across all regions.
    pub fn find_colors(
        &self,
        ranges: &ColorRanges,
        areas: impl Into<AreaSpec>,
        log: Option<&mut CallLog>,
    ) -> Vec<Target> {
        let regions = areas.into().resolve();
        let found = if ranges.is_empty() {
            Vec::new()
        } else {
            let probe = ColorProbe {
                vision: &self.vision,
                ranges,
            };
            scan_all(&self.source, self.handle, &regions, &probe)
        };
        trace::record(
            log,
            "find_colors",
            &json!({ "ranges": ranges, "regions": regions }),
            &found,
        );
        found
    }

    /// Find the first match of any named dotset pattern.
    ///
    /// Short-circuits to `None` without capturing when no usable dotset
    /// library is configured.
    pub fn find_dotset(
        &self,
        names: &[&str],
        areas: impl Into<AreaSpec>,
        opts: &DotsetOptions,
        log: Option<&mut CallLog>,
    ) -> Option<Target> {
        let regions = areas.into().resolve();
        let found = match self.usable_dotset_lib() {
            None => None,
            Some(lib) => {
                let probe = DotsetProbe {
                    vision: &self.vision,
                    lib,
                    names,
                    opts,
                };
                scan_first(&self.source, self.handle, &regions, &probe)
            }
        };
        trace::record(
            log,
            "find_dotset",
            &json!({ "names": names, "regions": regions, "options": opts }),
            &found,
        );
        found
    }

    /// Find every match of the named dotset patterns across all regions.
    pub fn find_dotsets(
        &self,
        names: &[&str],
        areas: impl Into<AreaSpec>,
        opts: &DotsetOptions,
        log: Option<&mut CallLog>,
    ) -> Vec<Target> {
        let regions = areas.into().resolve();
        let found = match self.usable_dotset_lib() {
            None => Vec::new(),
            Some(lib) => {
                let probe = DotsetProbe {
                    vision: &self.vision,
                    lib,
                    names,
                    opts,
                };
                scan_all(&self.source, self.handle, &regions, &probe)
            }
        };
        trace::record(
            log,
            "find_dotsets",
            &json!({ "names": names, "regions": regions, "options": opts }),
            &found,
        );
        found
    }

    /// Find the first occurrence of any of the given strings rendered in
    /// the configured font library.
    pub fn find_text(
        &self,
        texts: &[&str],
        areas: impl Into<AreaSpec>,
        opts: &TextOptions,
        log: Option<&mut CallLog>,
    ) -> Option<Target> {
        let regions = areas.into().resolve();
        let found = match self.usable_font_lib() {
            None => None,
            Some(lib) => {
                let probe = TextProbe {
                    vision: &self.vision,
                    lib,
                    texts,
                    opts,
                };
                scan_first(&self.source, self.handle, &regions, &probe)
            }
        };
        trace::record(
            log,
            "find_text",
            &json!({ "texts": texts, "regions": regions, "options": opts }),
            &found,
        );
        found
    }

    /// Find every occurrence of the given strings across all regions.
    pub fn find_texts(
        &self,
        texts: &[&str],
        areas: impl Into<AreaSpec>,
        opts: &TextOptions,
        log: Option<&mut CallLog>,
    ) -> Vec<Target> {
        let regions = areas.into().resolve();
        let found = match self.usable_font_lib() {
            None => Vec::new(),
            Some(lib) => {
                let probe = TextProbe {
                    vision: &self.vision,
                    lib,
                    texts,
                    opts,
                };
                scan_all(&self.source, self.handle, &regions, &probe)
            }
        };
        trace::record(
            log,
            "find_texts",
            &json!({ "texts": texts, "regions": regions, "options": opts }),
            &found,
        );
        found
    }

    /// Recognize all text in the given regions, concatenating the
    /// backend's assembled words and lines in region order.
    pub fn recognize_text(
        &self,
        areas: impl Into<AreaSpec>,
        opts: &TextOptions,
        log: Option<&mut CallLog>,
    ) -> Vec<String> {
        let regions = areas.into().resolve();
        let texts = match self.usable_font_lib() {
            None => Vec::new(),
            Some(lib) => scan_lines(&self.source, self.handle, &regions, |frame| {
                self.vision.recognize(frame, lib, opts)
            }),
        };
        trace::record(
            log,
            "recognize_text",
            &json!({ "regions": regions, "options": opts }),
            &texts,
        );
        texts
    }

    // Gate checks, evaluated once per call before any region is scanned.

    fn usable_font_lib(&self) -> Option<&V::FontLib> {
        let lib = self.font_lib.as_ref().filter(|lib| !lib.is_empty());
        if lib.is_none() {
            log::debug!("font search short-circuited: no usable font library");
        }
        lib
    }

    fn usable_dotset_lib(&self) -> Option<&V::DotsetLib> {
        let lib = self.dotset_lib.as_ref().filter(|lib| !lib.is_empty());
        if lib.is_none() {
            log::debug!("dotset search short-circuited: no usable dotset library");
        }
        lib
    }
}
