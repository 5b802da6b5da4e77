use crate::shared::api_utils::{file_form, post_form};
use contracts::shared::api::ApiOutcome;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_document_upload::FIELD_FILE;
use contracts::usecases::u502_batch_clustering::{BatchClustering, BatchResponse};
use web_sys::File;

/// Send a CSV of texts for clustering.
pub async fn analyze_batch(file: &File) -> Result<ApiOutcome<BatchResponse>, String> {
    log::info!("{}: uploading '{}'", BatchClustering::full_name(), file.name());
    let form = file_form(FIELD_FILE, file)?;
    post_form(BatchClustering::endpoint(), form).await
}
