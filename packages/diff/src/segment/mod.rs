//! Document segmentation: marker grammar and the unit segmenter.

mod engine;
mod marker;

pub use engine::segment;
pub use marker::{find_markers, MarkerKind, MarkerMatch};
