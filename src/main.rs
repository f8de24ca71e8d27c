use anyhow::Result;
use dotenvy::dotenv;
use std::sync::Arc;

use tubelink::cli::{Cli, Commands};
use tubelink::core::web_server::{start_web_server, DownloadResponse};
use tubelink::core::{config, init_logger, log_extractor_configuration, validate_youtube_url};
use tubelink::download::{resolve_download_link, DownloadSource, Mode, YtDlpSource};

/// Main entry point for the link API
///
/// Parses CLI arguments and dispatches to the subcommand; `serve` when none is given.
///
/// # Errors
/// Returns an error if logging cannot be initialized, the listener cannot bind,
/// or a one-shot command fails.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_args();

    // Load environment variables from .env if present, before any config is read
    let _ = dotenv();

    init_logger(config::LOG_FILE_PATH.as_deref(), *config::LOG_LEVEL)?;

    match cli.command {
        Some(Commands::Serve { host, port }) => run_server(host, port).await,
        Some(Commands::Resolve { url, mode, json }) => run_resolve(url, mode, json).await,
        Some(Commands::Check { url }) => run_check(url),
        Some(Commands::YtdlpVersion) => run_ytdlp_version().await,
        None => {
            log::info!("No command specified, running server in default mode");
            run_server(None, None).await
        }
    }
}

/// Run the HTTP API
async fn run_server(host: Option<String>, port: Option<u16>) -> Result<()> {
    let host = host.unwrap_or_else(|| config::server::HOST.clone());
    let port = port.unwrap_or(*config::server::PORT);

    log::info!("Starting tubelink v{}", env!("CARGO_PKG_VERSION"));
    log_extractor_configuration();

    let source = YtDlpSource::from_config();
    match source.version().await {
        Ok(version) => log::info!("yt-dlp version: {}", version),
        Err(e) => log::warn!(
            "yt-dlp not usable ({}): {}; requests will fail until it is installed",
            source.binary(),
            e
        ),
    }

    let source: Arc<dyn DownloadSource> = Arc::new(source);
    start_web_server(&host, port, source).await
}

/// Resolve one URL from the command line
async fn run_resolve(url: String, mode: String, json: bool) -> Result<()> {
    let target = validate_youtube_url(&url)?;
    let mode = Mode::parse(&mode)?;

    let source = YtDlpSource::from_config();
    let link = resolve_download_link(&source, &target, mode).await?;

    if json {
        let response = DownloadResponse {
            status: "success",
            title: link.title,
            download_url: link.download_url,
        };
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        println!("Title: {}", link.title);
        println!("URL:   {}", link.download_url);
    }

    Ok(())
}

/// Validate a URL without calling yt-dlp
fn run_check(url: String) -> Result<()> {
    let target = validate_youtube_url(&url)?;

    println!("Kind:      {}", target.kind);
    println!("ID:        {}", target.id);
    println!("Canonical: {}", target.canonical_url);

    Ok(())
}

async fn run_ytdlp_version() -> Result<()> {
    let source = YtDlpSource::from_config();
    let version = source.version().await?;
    println!("{} {}", source.binary(), version);
    Ok(())
}
