use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tubelink")]
#[command(author, version, about = "HTTP API that resolves YouTube URLs into direct download links", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP API (default)
    Serve {
        /// Address to bind (defaults to HOST or 0.0.0.0)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (defaults to PORT or 8000)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Resolve one URL and print the title and download link
    Resolve {
        /// YouTube video, shorts or playlist URL
        url: String,

        /// "audio" or "video"
        #[arg(short, long, default_value = "video")]
        mode: String,

        /// Print the same JSON the API returns
        #[arg(long)]
        json: bool,
    },

    /// Validate a URL and print its normalized form without calling yt-dlp
    Check {
        /// URL to validate
        url: String,
    },

    /// Print the version of the configured yt-dlp binary
    YtdlpVersion,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
