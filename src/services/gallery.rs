use crate::models::{MediaItem, MediaType};
use crate::services::embed::{EmbedRegistry, VideoEmbed};
use crate::services::modal::ModalContent;
use crate::services::store::{CellId, CellStore};
use serde::Serialize;
use serde_json::Value;

pub const PROMPT_MESSAGE: &str = "Please select both a start and end date.";
pub const LOADING_MESSAGE: &str = "\u{1F504} Loading space photos\u{2026}";
pub const NO_IMAGES_MESSAGE: &str = "No images found for this date range.";
pub const FETCH_FAILED_MESSAGE: &str = "Sorry, something went wrong. Please try again later.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TileKind {
    Image,
    VideoPlayer { provider: &'static str, src: String },
    VideoLink { href: String },
}

/// One grid cell before it has been registered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tile {
    pub item: MediaItem,
    #[serde(flatten)]
    pub kind: TileKind,
}

#[derive(Debug, Clone, Serialize)]
pub struct GalleryCell {
    pub id: String,
    /// Modal fields carried on the cell, used when the registry no longer has it.
    pub vals: String,
    #[serde(flatten)]
    pub tile: Tile,
}

#[derive(Debug, Clone)]
pub enum GalleryView {
    NoImages,
    Grid(Vec<GalleryCell>),
}

impl GalleryView {
    pub fn cells(&self) -> &[GalleryCell] {
        match self {
            GalleryView::NoImages => &[],
            GalleryView::Grid(cells) => cells,
        }
    }
}

pub struct GalleryRenderer<'a> {
    embeds: &'a EmbedRegistry,
}

impl<'a> GalleryRenderer<'a> {
    pub fn new(embeds: &'a EmbedRegistry) -> Self {
        Self { embeds }
    }

    /// Turns a raw response body into tiles, in input order.
    ///
    /// Returns an empty list when the body is not an array or nothing in it
    /// can be shown. Records of any kind other than image or video are skipped.
    pub fn layout(&self, body: &Value) -> Vec<Tile> {
        let records = match body.as_array() {
            Some(records) => records,
            None => return Vec::new(),
        };

        records
            .iter()
            .filter_map(|record| {
                let item: MediaItem = match serde_json::from_value(record.clone()) {
                    Ok(item) => item,
                    Err(e) => {
                        tracing::debug!(error = %e, "Skipping unreadable APOD record");
                        return None;
                    }
                };
                let kind = match item.media_type {
                    MediaType::Image => TileKind::Image,
                    MediaType::Video => match self.embeds.resolve(&item.url) {
                        VideoEmbed::Player { provider, src } => {
                            TileKind::VideoPlayer { provider, src }
                        }
                        VideoEmbed::Link { href } => TileKind::VideoLink { href },
                    },
                    MediaType::Other => return None,
                };
                Some(Tile { item, kind })
            })
            .collect()
    }

    /// Lays out the body and registers the resulting cells so each can open
    /// the detail modal later.
    pub fn render(&self, body: &Value, store: &CellStore) -> GalleryView {
        let tiles = self.layout(body);
        if tiles.is_empty() {
            return GalleryView::NoImages;
        }

        let gallery = store.register(tiles.iter().map(|t| t.item.clone()).collect());
        let cells = tiles
            .into_iter()
            .enumerate()
            .map(|(index, tile)| GalleryCell {
                id: CellId { gallery, index }.to_string(),
                vals: ModalContent::from(&tile.item).to_vals(),
                tile,
            })
            .collect::<Vec<_>>();

        tracing::info!(gallery = %gallery, cells = cells.len(), "Rendered gallery");
        GalleryView::Grid(cells)
    }
}
