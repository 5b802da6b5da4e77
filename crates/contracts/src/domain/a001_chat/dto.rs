use super::op_type::{lenient_op_type, OpType};
use crate::shared::text_analysis::{AnalysisSection, TextAnalysis};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/chat/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub response: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<ChatResults>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatResults {
    #[serde(default, deserialize_with = "lenient_op_type")]
    pub op_type: Option<OpType>,
    #[serde(default)]
    pub text_analysis: Option<TextAnalysis>,
}

/// Successful `POST /api/visual_qa/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisualQaAnswer {
    pub answer: String,
}

/// Analysis sections to render under a chat reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisPanel {
    pub op_type: OpType,
    pub sections: Vec<(AnalysisSection, String)>,
}

impl AnalysisPanel {
    /// Sections of `analysis` that `op_type` allows; `None` when nothing
    /// would be shown.
    pub fn build(op_type: OpType, analysis: &TextAnalysis) -> Option<Self> {
        let sections: Vec<_> = analysis
            .present_sections()
            .into_iter()
            .filter(|(section, _)| op_type.shows(*section))
            .collect();
        if sections.is_empty() {
            None
        } else {
            Some(Self { op_type, sections })
        }
    }

    /// Panel for a chat response. The server label wins; when it is missing
    /// the operation is inferred from the message that was sent.
    pub fn from_chat_results(results: &ChatResults, sent_message: &str) -> Option<Self> {
        let analysis = results.text_analysis.as_ref()?;
        let op_type = results
            .op_type
            .unwrap_or_else(|| OpType::infer(sent_message));
        Self::build(op_type, analysis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn shows(panel: &AnalysisPanel, section: AnalysisSection) -> bool {
        panel.sections.iter().any(|(s, _)| *s == section)
    }

    fn full_analysis() -> serde_json::Value {
        json!({
            "pos_tagging": "<span title=\"r\">他</span>",
            "entity_tagging": "<span title=\"department\">医院</span>",
            "summary": "医院"
        })
    }

    #[test]
    fn test_request_body() {
        let body = serde_json::to_value(ChatRequest::new("词性标标：他去医院。")).unwrap();
        assert_eq!(body, json!({"message": "词性标标：他去医院。"}));
    }

    #[test]
    fn test_pos_response_renders_only_pos() {
        let response: ChatResponse = serde_json::from_value(json!({
            "response": "已完成词性标注",
            "results": {"op_type": "pos", "text_analysis": {"pos_tagging": "<span>...</span>"}}
        }))
        .unwrap();
        let results = response.results.unwrap();
        // The server label decides even when the message has a typo in the marker.
        let panel = AnalysisPanel::from_chat_results(&results, "词性标标：他去医院。").unwrap();
        assert_eq!(panel.op_type, OpType::Pos);
        assert_eq!(
            panel.sections,
            vec![(AnalysisSection::Pos, "<span>...</span>".to_string())]
        );
    }

    #[test]
    fn test_pos_label_hides_other_sections() {
        let results = ChatResults {
            op_type: Some(OpType::Pos),
            text_analysis: Some(serde_json::from_value(full_analysis()).unwrap()),
        };
        let panel = AnalysisPanel::from_chat_results(&results, "").unwrap();
        assert!(shows(&panel, AnalysisSection::Pos));
        assert!(!shows(&panel, AnalysisSection::Entity));
        assert!(!shows(&panel, AnalysisSection::Summary));
    }

    #[test]
    fn test_analysis_renders_all_present() {
        let results: ChatResults = serde_json::from_value(json!({
            "op_type": "analysis",
            "text_analysis": full_analysis()
        }))
        .unwrap();
        let panel = AnalysisPanel::from_chat_results(&results, "").unwrap();
        assert_eq!(panel.sections.len(), 3);
    }

    #[test]
    fn test_normal_renders_nothing() {
        let results: ChatResults = serde_json::from_value(json!({
            "op_type": "normal",
            "text_analysis": full_analysis()
        }))
        .unwrap();
        assert_eq!(AnalysisPanel::from_chat_results(&results, "文本分析：x"), None);
    }

    #[test]
    fn test_missing_or_unknown_label_falls_back_to_message() {
        let results: ChatResults = serde_json::from_value(json!({
            "op_type": "sentiment",
            "text_analysis": full_analysis()
        }))
        .unwrap();
        assert_eq!(results.op_type, None);
        let panel = AnalysisPanel::from_chat_results(&results, "文本摘要：头痛").unwrap();
        assert_eq!(panel.op_type, OpType::Summary);
        assert_eq!(panel.sections.len(), 1);
    }

    #[test]
    fn test_plain_reply_without_results() {
        let response: ChatResponse =
            serde_json::from_value(json!({"response": "多喝水，注意休息。"})).unwrap();
        assert_eq!(response.results, None);
    }
}
