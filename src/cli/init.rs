use anyhow::Result;
use std::path::PathBuf;

const CONFIG_FILE: &str = "apod.toml";

pub async fn run(path: PathBuf, force: bool) -> Result<()> {
    std::fs::create_dir_all(&path)?;

    let target = path.join(CONFIG_FILE);
    if target.exists() && !force {
        anyhow::bail!(
            "{} already exists; pass --force to overwrite it",
            target.display()
        );
    }

    let config = r#"[site]
title = "NASA Space Explorer"
tagline = "Explore the universe one day at a time"

[server]
host = "127.0.0.1"
port = 3000

[apod]
endpoint = "https://api.nasa.gov/planetary/apod"
api_key = "DEMO_KEY"

[gallery]
default_window_days = 9
archive_start = "1995-06-16"
embed_height = 250
retained_renders = 32
"#;

    std::fs::write(&target, config)?;

    tracing::info!("Created {:?}", target);
    tracing::info!("Run 'apod-gallery serve' to start the server");

    Ok(())
}
