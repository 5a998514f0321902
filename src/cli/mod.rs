use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;
use url::Url;

#[derive(Debug, Parser)]
#[command(version, about = "Percentage-based image resizing over HTTP")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the resize service and its web page.
    Serve(ServeArgs),
    /// Send a local image to a running service and save the result.
    Resize(ResizeArgs),
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServeArgs {
    #[arg(long)]
    #[arg(default_value = "0.0.0.0:3030")]
    pub listen_address: SocketAddr,
    #[arg(long, value_delimiter = ',')]
    #[arg(default_value = "http://127.0.0.1:3000,http://localhost:3000")]
    pub allowed_origins: Vec<String>,
    /// Request body limit for image uploads, in bytes.
    #[arg(long)]
    #[arg(default_value_t = 10_000_000)]
    pub max_upload_size: usize,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ResizeArgs {
    pub file: PathBuf,
    #[arg(long)]
    #[arg(default_value = "33")]
    pub percentage: String,
    #[arg(long)]
    #[arg(default_value = "http://127.0.0.1:3030")]
    pub service_url: Url,
    #[arg(long)]
    #[arg(default_value = ".")]
    pub output_dir: PathBuf,
}
