use crate::services::apod::{ApodClient, ApodSource};
use crate::services::embed::EmbedRegistry;
use crate::services::gallery::{GalleryRenderer, Tile, TileKind, NO_IMAGES_MESSAGE};
use crate::Config;
use anyhow::Result;

pub async fn run(config: &Config, start: &str, end: &str, json: bool) -> Result<()> {
    if start.is_empty() || end.is_empty() {
        anyhow::bail!("Please select both a start and end date.");
    }

    let client = ApodClient::new(&config.apod);
    let body = client.fetch_range(start, end).await?;

    let embeds = EmbedRegistry::default();
    let tiles = GalleryRenderer::new(&embeds).layout(&body);

    if json {
        println!("{}", serde_json::to_string_pretty(&tiles)?);
        return Ok(());
    }

    if tiles.is_empty() {
        println!("{}", NO_IMAGES_MESSAGE);
        return Ok(());
    }

    for tile in &tiles {
        println!("{}", describe(tile));
    }

    Ok(())
}

fn describe(tile: &Tile) -> String {
    let target = match &tile.kind {
        TileKind::Image => format!("image  {}", tile.item.url),
        TileKind::VideoPlayer { provider, src } => format!("{:<6} {}", provider, src),
        TileKind::VideoLink { href } => format!("link   {}", href),
    };
    format!("{}  {:<40}  {}", tile.item.date, tile.item.title, target)
}
