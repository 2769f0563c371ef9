pub mod fetch;
pub mod init;
pub mod serve;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "apod-gallery")]
#[command(version)]
#[command(about = "Browse NASA's Astronomy Picture of the Day by date range", long_about = None)]
pub struct Cli {
    #[arg(short, long, default_value = "apod.toml")]
    pub config: PathBuf,

    /// Overrides `apod.api_key` from the config file.
    #[arg(long, env = "APOD_API_KEY", global = true)]
    pub api_key: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default config file.
    Init {
        #[arg(default_value = ".")]
        path: PathBuf,
        #[arg(long)]
        force: bool,
    },
    Serve {
        #[arg(short = 'H', long)]
        host: Option<String>,
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Fetch a date range once and print the gallery cells.
    Fetch {
        #[arg(long)]
        start: String,
        #[arg(long)]
        end: String,
        #[arg(long)]
        json: bool,
    },
}
