//! Render sink
//!
//! The display boundary of the feed. The controller hands the sink ordered
//! image records; the sink owns markup production, the loading indicator,
//! and the load-more affordance.

mod html;

pub use html::HtmlGallery;

use crate::types::Image;

/// Display collaborator driven by the feed controller
pub trait RenderSink: Send {
    /// Remove everything currently rendered
    fn clear(&mut self);

    /// Append a batch of images to the existing view (never clears)
    fn append(&mut self, images: &[Image]);

    /// Re-arm zoom/lightbox bindings after an insertion
    fn refresh_bindings(&mut self);

    /// Show the loading indicator
    fn show_loading(&mut self);

    /// Hide the loading indicator
    fn hide_loading(&mut self);

    /// Disable and hide the load-more affordance once results are exhausted
    fn retire_load_more(&mut self);
}
