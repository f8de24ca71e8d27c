//! Resolving a validated URL into a direct download link.

use crate::core::validation::{MediaKind, MediaTarget};
use crate::download::error::DownloadError;
use crate::download::info::DownloadLink;
use crate::download::options::{ExtractOptions, Mode};
use crate::download::source::DownloadSource;

/// Resolves a validated target into a title and direct media URL.
///
/// Calls the source once with mode-specific options against the canonical
/// URL. Playlist results resolve to their first entry only; callers asking
/// for a whole playlist get a single track back.
pub async fn resolve_download_link(
    source: &dyn DownloadSource,
    target: &MediaTarget,
    mode: Mode,
) -> Result<DownloadLink, DownloadError> {
    let options = ExtractOptions::for_mode(mode);

    log::info!(
        "Extracting link for: {} | mode: {} | source: {}",
        target.canonical_url,
        mode,
        source.name()
    );

    let info = source.extract_info(&target.canonical_url, &options).await?;

    if let Some(ref entries) = info.entries {
        log::warn!(
            "{} {} returned {} entries; only the first one is resolved",
            target.kind,
            target.id,
            entries.len()
        );
    } else if target.kind == MediaKind::Playlist {
        log::debug!("Playlist {} resolved to a single item", target.id);
    }

    let link = info.into_download_link()?;
    log::info!("Extraction successful: {}", link.title);

    Ok(link)
}
