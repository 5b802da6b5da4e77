use crate::shared::api_utils::{file_form, post_form};
use contracts::shared::api::ApiOutcome;
use contracts::usecases::u501_document_upload::FIELD_FILE;
use contracts::usecases::u503_evaluation::{EvaluationKind, EvaluationResponse};
use web_sys::File;

/// Upload a QA or VQA test set and get the benchmark metrics back.
pub async fn evaluate(
    kind: EvaluationKind,
    file: &File,
) -> Result<ApiOutcome<EvaluationResponse>, String> {
    let form = file_form(FIELD_FILE, file)?;
    post_form(kind.endpoint(), form).await
}
