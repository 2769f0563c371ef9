use crate::services::apod::{ApodClient, ApodSource};
use crate::services::embed::EmbedRegistry;
use crate::services::store::CellStore;
use crate::Config;
use anyhow::Result;
use std::sync::Arc;
use tera::Tera;

pub struct AppState {
    pub config: Config,
    pub templates: Tera,
    pub source: Arc<dyn ApodSource>,
    pub embeds: EmbedRegistry,
    pub cells: CellStore,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let source = Arc::new(ApodClient::new(&config.apod));
        Self::with_source(config, source)
    }

    pub fn with_source(config: Config, source: Arc<dyn ApodSource>) -> Result<Self> {
        let mut templates = Tera::default();

        templates.add_raw_templates(vec![
            ("css/gallery.css", include_str!("../../templates/css/gallery.css")),
            ("base.html", include_str!("../../templates/base.html")),
            ("public/index.html", include_str!("../../templates/public/index.html")),
            ("htmx/loading.html", include_str!("../../templates/htmx/loading.html")),
            ("htmx/message.html", include_str!("../../templates/htmx/message.html")),
            ("htmx/gallery.html", include_str!("../../templates/htmx/gallery.html")),
            ("htmx/modal.html", include_str!("../../templates/htmx/modal.html")),
        ])?;

        let cells = CellStore::new(config.gallery.retained_renders);

        Ok(Self {
            config,
            templates,
            source,
            embeds: EmbedRegistry::default(),
            cells,
        })
    }
}
