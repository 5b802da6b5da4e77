use crate::shared::api_utils::{file_form, post_form};
use contracts::shared::api::ApiOutcome;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_document_upload::{
    analysis_options_json, AnalysisOption, DocumentUpload, UploadResponse,
    FIELD_ANALYSIS_OPTIONS, FIELD_FILE,
};
use web_sys::File;

/// Upload a text document for analysis with the selected options.
pub async fn upload_document(
    file: &File,
    options: &[AnalysisOption],
) -> Result<ApiOutcome<UploadResponse>, String> {
    log::info!("{}: uploading '{}'", DocumentUpload::full_name(), file.name());
    let form = file_form(FIELD_FILE, file)?;
    form.append_with_str(FIELD_ANALYSIS_OPTIONS, &analysis_options_json(options))
        .map_err(|e| format!("{e:?}"))?;
    post_form(DocumentUpload::endpoint(), form).await
}
