//! Chat - Model (API functions)

use crate::shared::api_utils::{file_form, post_form, post_json};
use contracts::domain::a001_chat::{
    ChatRequest, ChatResponse, VisualQaAnswer, CHAT_ENDPOINT, VISUAL_QA_ENDPOINT,
    VISUAL_QA_FIELD_IMAGE, VISUAL_QA_FIELD_QUESTION,
};
use contracts::shared::api::ApiOutcome;
use web_sys::File;

/// Send a text message to the chatbot
pub async fn send_chat(message: &str) -> Result<ApiOutcome<ChatResponse>, String> {
    post_json(CHAT_ENDPOINT, &ChatRequest::new(message)).await
}

/// Ask a question about the attached image
pub async fn ask_visual_question(
    image: &File,
    question: &str,
) -> Result<ApiOutcome<VisualQaAnswer>, String> {
    let form = file_form(VISUAL_QA_FIELD_IMAGE, image)?;
    form.append_with_str(VISUAL_QA_FIELD_QUESTION, question)
        .map_err(|e| format!("{e:?}"))?;
    post_form(VISUAL_QA_ENDPOINT, form).await
}
