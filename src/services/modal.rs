use crate::models::MediaItem;
use serde::{Deserialize, Serialize};

/// What the detail view shows. Also travels with each grid cell and with the
/// close controls, so showing or hiding never depends on server-side lookups.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ModalContent {
    pub image_src: String,
    pub title: String,
    pub date: String,
    pub explanation: String,
}

impl ModalContent {
    pub fn is_empty(&self) -> bool {
        self.image_src.is_empty()
            && self.title.is_empty()
            && self.date.is_empty()
            && self.explanation.is_empty()
    }

    /// JSON form used for `hx-vals`.
    pub fn to_vals(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

impl From<&MediaItem> for ModalContent {
    fn from(item: &MediaItem) -> Self {
        // Video items land here too and show their url as the image source.
        Self {
            image_src: item.url.clone(),
            title: item.title.clone(),
            date: item.date.clone(),
            explanation: item.explanation.clone(),
        }
    }
}

/// Detail view for a single gallery item.
///
/// Starts hidden. `open` replaces the content and shows it; `close` only hides,
/// so the last content stays in place until the next `open`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Modal {
    visible: bool,
    content: Option<ModalContent>,
}

impl Modal {
    pub fn hidden() -> Self {
        Self::default()
    }

    pub fn open(&mut self, item: &MediaItem) {
        self.show(ModalContent::from(item));
    }

    pub fn show(&mut self, content: ModalContent) {
        self.content = Some(content);
        self.visible = true;
    }

    pub fn close(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn content(&self) -> Option<&ModalContent> {
        self.content.as_ref()
    }
}
