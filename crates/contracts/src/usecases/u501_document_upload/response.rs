use crate::shared::text_analysis::TextAnalysis;
use serde::{Deserialize, Serialize};

/// Successful `POST /api/upload/`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub results: UploadResults,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UploadResults {
    #[serde(default)]
    pub text_analysis: Option<TextAnalysis>,
    /// Pre-rendered `<img>` fragment.
    #[serde(default)]
    pub wordcloud: Option<String>,
    /// Pre-rendered `<img>` fragment.
    #[serde(default)]
    pub tsne: Option<String>,
}

impl UploadResults {
    pub fn analysis(&self) -> TextAnalysis {
        self.text_analysis.clone().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::ApiOutcome;
    use crate::shared::text_analysis::AnalysisSection;

    #[test]
    fn test_report_upload_success() {
        let body = r#"{
            "success": true,
            "results": {
                "text_analysis": {
                    "pos_tagging": "<span style=\"color: #ff6b6b\" title=\"n\">患者</span>",
                    "named_entities": "<span style=\"color: #51cf66\" title=\"symptom\">胃痛</span>",
                    "summary": "患者。胃痛"
                }
            }
        }"#;
        let response = ApiOutcome::<UploadResponse>::decode(200, body)
            .unwrap()
            .into_result()
            .unwrap();
        let sections = response.results.analysis().present_sections();
        let kinds: Vec<_> = sections.iter().map(|(s, _)| *s).collect();
        assert_eq!(kinds, AnalysisSection::ALL.to_vec());
        assert_eq!(response.results.wordcloud, None);
    }

    #[test]
    fn test_upload_failure() {
        let outcome =
            ApiOutcome::<UploadResponse>::decode(500, r#"{"error": "'utf-8' codec can't decode"}"#)
                .unwrap();
        assert_eq!(
            outcome.into_result().unwrap_err().to_string(),
            "'utf-8' codec can't decode"
        );
    }
}
