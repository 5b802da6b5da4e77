//! Chat - View Model

use contracts::domain::a001_chat::{AnalysisPanel, ChatResults, ChatSession, OpType};
use contracts::usecases::u501_document_upload::UploadResults;
use leptos::prelude::*;
use uuid::Uuid;
use web_sys::{File, Url};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MessageBody {
    Text(String),
    Evaluation { title: String, lines: Vec<String> },
    Error(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: Uuid,
    pub role: Role,
    pub body: MessageBody,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Role::User, MessageBody::Text(text.into()))
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self::new(Role::Bot, MessageBody::Text(text.into()))
    }

    pub fn bot_error(text: impl Into<String>) -> Self {
        Self::new(Role::Bot, MessageBody::Error(text.into()))
    }

    pub fn evaluation(title: impl Into<String>, lines: Vec<String>) -> Self {
        Self::new(
            Role::Bot,
            MessageBody::Evaluation {
                title: title.into(),
                lines,
            },
        )
    }

    fn new(role: Role, body: MessageBody) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            body,
        }
    }
}

/// Image waiting for a visual question, with its object-URL preview.
#[derive(Debug, Clone)]
pub struct AttachedImage {
    pub file: File,
    pub preview_url: String,
}

impl AttachedImage {
    pub fn new(file: File) -> Result<Self, String> {
        let preview_url = Url::create_object_url_with_blob(&file)
            .map_err(|e| format!("Failed to create object URL: {:?}", e))?;
        Ok(Self { file, preview_url })
    }

    pub fn revoke(&self) {
        let _ = Url::revoke_object_url(&self.preview_url);
    }
}

/// Content of the results container under the transcript. Replaced as a
/// whole by each new result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultsView {
    pub panel: Option<AnalysisPanel>,
    pub wordcloud: Option<String>,
    pub tsne: Option<String>,
}

impl ResultsView {
    pub fn from_chat(results: &ChatResults, sent_message: &str) -> Self {
        Self {
            panel: AnalysisPanel::from_chat_results(results, sent_message),
            ..Self::default()
        }
    }

    /// A document dropped on the chat runs every analysis.
    pub fn from_upload(results: &UploadResults) -> Self {
        Self {
            panel: AnalysisPanel::build(OpType::Analysis, &results.analysis()),
            wordcloud: results.wordcloud.clone().filter(|html| !html.is_empty()),
            tsne: results.tsne.clone().filter(|html| !html.is_empty()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.panel.is_none() && self.wordcloud.is_none() && self.tsne.is_none()
    }
}

/// Enter sends, Shift+Enter breaks the line. An Enter that commits an IME
/// composition (pinyin) never sends.
pub fn enter_sends(key: &str, shift: bool, composing: bool) -> bool {
    key == "Enter" && !shift && !composing
}

#[derive(Clone, Copy)]
pub struct ChatVm {
    pub messages: RwSignal<Vec<ChatMessage>>,
    pub input: RwSignal<String>,
    pub session: RwSignal<ChatSession<AttachedImage>, LocalStorage>,
    pub results: RwSignal<Option<ResultsView>>,
    pub downloads_ready: RwSignal<bool>,
    pub drag_over: RwSignal<bool>,
}

impl ChatVm {
    pub fn new() -> Self {
        Self {
            messages: RwSignal::new(Vec::new()),
            input: RwSignal::new(String::new()),
            session: RwSignal::new_local(ChatSession::new()),
            results: RwSignal::new(None),
            downloads_ready: RwSignal::new(false),
            drag_over: RwSignal::new(false),
        }
    }

    pub fn push(&self, message: ChatMessage) {
        self.messages.update(|messages| messages.push(message));
    }

    pub fn has_image(&self) -> bool {
        self.session.with(|s| s.has_image())
    }

    pub fn visual_qa_enabled(&self) -> bool {
        self.session.with(|s| s.visual_qa_enabled())
    }

    /// Drop the attached image and free its preview URL.
    pub fn release_image(&self) {
        if let Some(Some(image)) = self.session.try_update(|s| s.detach_image()) {
            image.revoke();
        }
    }

    pub fn preview_url(&self) -> Option<String> {
        self.session
            .with(|s| s.image().map(|image| image.preview_url.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::text_analysis::AnalysisSection;
    use serde_json::json;

    #[test]
    fn test_dropped_document_shows_all_sections() {
        let results: UploadResults = serde_json::from_value(json!({
            "text_analysis": {
                "pos_tagging": "<span>他</span>",
                "named_entities": "<span>医院</span>",
                "summary": "医院"
            },
            "wordcloud": "<img alt=\"Word Cloud\">",
            "tsne": ""
        }))
        .unwrap();
        let view = ResultsView::from_upload(&results);
        let panel = view.panel.as_ref().unwrap();
        assert!(AnalysisSection::ALL.iter().all(|s| panel.sections.iter().any(|(shown, _)| shown == s)));
        assert_eq!(view.wordcloud.as_deref(), Some("<img alt=\"Word Cloud\">"));
        assert_eq!(view.tsne, None);
    }

    #[test]
    fn test_normal_chat_clears_results() {
        let results: ChatResults = serde_json::from_value(json!({
            "op_type": "normal",
            "text_analysis": {"summary": "x"}
        }))
        .unwrap();
        assert!(ResultsView::from_chat(&results, "你好").is_empty());
    }

    #[test]
    fn test_enter_during_composition_does_not_send() {
        assert!(enter_sends("Enter", false, false));
        assert!(!enter_sends("Enter", false, true));
        assert!(!enter_sends("Enter", true, false));
        assert!(!enter_sends("Process", false, true));
        assert!(!enter_sends("a", false, false));
    }
}
