use crate::shared::api_utils::get_raw;
use crate::shared::export::save_bytes;
use contracts::shared::limits::DOWNLOAD_FILENAME;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u504_download_results::{DownloadOutcome, DownloadResults};

const FALLBACK_MIME: &str = "application/zip";

/// Fetch the results archive and save it when the server sent one.
/// `Err` only for transport failures.
pub async fn download_results() -> Result<DownloadOutcome, String> {
    log::info!("{}: requesting archive", DownloadResults::full_name());
    let response = get_raw(DownloadResults::endpoint()).await?;
    let status = response.status();
    let content_type = response.headers().get("Content-Type");
    let body = response
        .binary()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;

    let mime = content_type.clone().unwrap_or_else(|| FALLBACK_MIME.to_string());
    Ok(DownloadOutcome::resolve(
        status,
        content_type.as_deref(),
        &body,
        |bytes| save_bytes(bytes, DOWNLOAD_FILENAME, &mime),
    ))
}
