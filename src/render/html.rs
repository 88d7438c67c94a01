//! HTML gallery sink
//!
//! Accumulates the card markup for the gallery in memory. Card shape:
//! an anchor to the full-resolution image wrapping the preview and an
//! info block with like/view/comment/download counters.

use super::RenderSink;
use crate::types::Image;

/// In-memory HTML rendering of the gallery feed
#[derive(Debug, Clone, Default)]
pub struct HtmlGallery {
    markup: String,
    card_count: usize,
    loading: bool,
    load_more_armed: bool,
}

impl HtmlGallery {
    /// Create an empty gallery
    pub fn new() -> Self {
        Self {
            load_more_armed: true,
            ..Self::default()
        }
    }

    /// Accumulated gallery markup
    pub fn markup(&self) -> &str {
        &self.markup
    }

    /// Number of cards currently rendered
    pub fn card_count(&self) -> usize {
        self.card_count
    }

    /// Whether the loading indicator is visible
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether the load-more affordance is still active
    pub fn load_more_armed(&self) -> bool {
        self.load_more_armed
    }

    fn card(image: &Image) -> String {
        format!(
            r#"<a href="{large}" class="wrapper">
  <img src="{web}" alt="{tags}" loading="lazy" />
  <div class="info">
    <p class="info-item"><b>Likes: {likes}</b></p>
    <p class="info-item"><b>Views: {views}</b></p>
    <p class="info-item"><b>Comments: {comments}</b></p>
    <p class="info-item"><b>Downloads: {downloads}</b></p>
  </div>
</a>
"#,
            large = escape(&image.large_image_url),
            web = escape(&image.webformat_url),
            tags = escape(&image.tags),
            likes = image.likes,
            views = image.views,
            comments = image.comments,
            downloads = image.downloads,
        )
    }
}

impl RenderSink for HtmlGallery {
    fn clear(&mut self) {
        self.markup.clear();
        self.card_count = 0;
        self.load_more_armed = true;
    }

    fn append(&mut self, images: &[Image]) {
        for image in images {
            self.markup.push_str(&Self::card(image));
        }
        self.card_count += images.len();
    }

    fn refresh_bindings(&mut self) {
        // The in-memory gallery has no live lightbox to re-arm.
    }

    fn show_loading(&mut self) {
        self.loading = true;
    }

    fn hide_loading(&mut self) {
        self.loading = false;
    }

    fn retire_load_more(&mut self) {
        self.load_more_armed = false;
    }
}

/// Minimal HTML attribute/text escaping
fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
