//! Multi-region visual target search over live window captures.
//!
//! Given a window handle, a capture source and a matching backend, this
//! crate repeatedly captures pixel regions and asks the backend whether a
//! target appears (by color range, dotset template, or font glyph set),
//! returning the first or all matches with coordinates translated back
//! into window space.
//!
//! The pixel math itself lives behind [`VisionBackend`]; raw screen capture
//! lives behind [`FrameSource`]. What this crate defines is the search
//! protocol: region iteration order, early-exit vs exhaustive aggregation,
//! coordinate normalization, per-call backend gating, and the optional
//! call trace.

pub mod backend;
pub mod color;
pub mod error;
pub mod options;
pub mod region;
pub mod target;
pub mod trace;
pub mod window;

mod probe;
mod scan;


// Re-export main types and functions
pub use backend::{FrameSource, LibUpdate, PatternLib, VisionBackend, WindowHandle};
pub use color::{ColorRange, ColorRanges};
pub use error::{SeekError, SeekResult};
pub use options::{DotsetOptions, MatchColor, TextDir, TextOptions};
pub use region::{AreaSpec, Rect, Region};
pub use target::{RawMatch, Target};
pub use trace::{CallLog, CallRecord};
pub use window::SearchWindow;
