//! Chart rendering
//!
//! Reports hand the renderer one or more labelled groupings; the renderer
//! turns them into image bytes the transport can attach to a reply.

pub mod pie;

pub use pie::SvgPieRenderer;

use crate::error::TrackerResult;
use crate::reports::Grouping;

/// One chart panel: a title and the grouping it shows
#[derive(Debug, Clone)]
pub struct ChartPanel {
    pub title: String,
    pub grouping: Grouping,
    /// Shown in place of the chart when the grouping is empty
    pub empty_note: String,
}

impl ChartPanel {
    pub fn new(title: impl Into<String>, grouping: Grouping, empty_note: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            grouping,
            empty_note: empty_note.into(),
        }
    }
}

/// An encoded image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedChart {
    pub bytes: Vec<u8>,
    /// MIME type of `bytes`
    pub media_type: &'static str,
    /// File extension without the dot
    pub extension: &'static str,
}

/// Turns groupings into an image
pub trait ChartRenderer: Send + Sync {
    /// Render the panels side by side in a single image
    fn render(&self, panels: &[ChartPanel]) -> TrackerResult<RenderedChart>;
}
