use serde::{Deserialize, Serialize};

/// Multipart field carrying the document.
pub const FIELD_FILE: &str = "file";

/// Multipart field carrying the JSON array of selected options.
pub const FIELD_ANALYSIS_OPTIONS: &str = "analysis_options";

/// Analysis checkbox on the document page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisOption {
    Pos,
    Ner,
    Summary,
}

impl AnalysisOption {
    pub const ALL: [AnalysisOption; 3] = [
        AnalysisOption::Pos,
        AnalysisOption::Ner,
        AnalysisOption::Summary,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AnalysisOption::Pos => "词性标注",
            AnalysisOption::Ner => "实体识别",
            AnalysisOption::Summary => "文本摘要",
        }
    }
}

/// `analysis_options` form value, e.g. `["pos","summary"]`.
pub fn analysis_options_json(options: &[AnalysisOption]) -> String {
    serde_json::to_string(options).unwrap_or_else(|_| "[]".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_json() {
        assert_eq!(
            analysis_options_json(&AnalysisOption::ALL),
            r#"["pos","ner","summary"]"#
        );
        assert_eq!(analysis_options_json(&[]), "[]");
    }
}
