//! Region iteration and result aggregation.
//!
//! Both search policies share the same capture-then-match round trip per
//! region; they differ only in whether the first hit ends the scan.
//! Coordinate translation into window space happens here, once, for every
//! match.

use image::RgbaImage;

use crate::backend::{FrameSource, WindowHandle};
use crate::probe::Probe;
use crate::region::Region;
use crate::target::Target;

/// First-match policy: the region list is a priority list. Scan left to
/// right, return the first translated match, never touch later regions.
pub(crate) fn scan_first<S, P>(
    source: &S,
    window: WindowHandle,
    regions: &[Region],
    probe: &P,
) -> Option<Target>
where
    S: FrameSource,
    P: Probe,
{
    for region in regions {
        let Some(frame) = source.capture(window, *region) else {
            log::debug!("capture failed for {region:?}, skipping region");
            continue;
        };
        if let Some(raw) = probe.first(&frame) {
            return Some(Target::from_raw(raw, region.origin()));
        }
    }
    None
}

/// All-matches policy: every region contributes, in region order, then in
/// the order the matcher reported within a region.
pub(crate) fn scan_all<S, P>(
    source: &S,
    window: WindowHandle,
    regions: &[Region],
    probe: &P,
) -> Vec<Target>
where
    S: FrameSource,
    P: Probe,
{
    let mut found = Vec::new();
    for region in regions {
        let Some(frame) = source.capture(window, *region) else {
            log::debug!("capture failed for {region:?}, skipping region");
            continue;
        };
        let origin = region.origin();
        found.extend(
            probe
                .all(&frame)
                .into_iter()
                .map(|raw| Target::from_raw(raw, origin)),
        );
    }
    found
}

/// Recognition variant of the exhaustive scan: aggregates the assembled
/// strings a reader produces per frame instead of positional targets.
pub(crate) fn scan_lines<S, F>(
    source: &S,
    window: WindowHandle,
    regions: &[Region],
    mut read: F,
) -> Vec<String>
where
    S: FrameSource,
    F: FnMut(&RgbaImage) -> Vec<String>,
{
    let mut texts = Vec::new();
    for region in regions {
        let Some(frame) = source.capture(window, *region) else {
            log::debug!("capture failed for {region:?}, skipping region");
            continue;
        };
        texts.extend(read(&frame));
    }
    texts
}
