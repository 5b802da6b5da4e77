use serde::{Deserialize, Serialize};

/// Server-rendered analysis of a text. Every field is an HTML fragment that
/// the client injects verbatim.
///
/// The chat endpoint names the entity field `entity_tagging`, the upload
/// endpoint `named_entities`; both land in [`TextAnalysis::entity_tagging`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextAnalysis {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos_tagging: Option<String>,
    #[serde(default, alias = "named_entities", skip_serializing_if = "Option::is_none")]
    pub entity_tagging: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

/// One of the three analysis subsections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnalysisSection {
    Pos,
    Entity,
    Summary,
}

impl AnalysisSection {
    pub const ALL: [AnalysisSection; 3] = [
        AnalysisSection::Pos,
        AnalysisSection::Entity,
        AnalysisSection::Summary,
    ];

    pub fn title(self) -> &'static str {
        match self {
            AnalysisSection::Pos => "词性标注",
            AnalysisSection::Entity => "实体识别",
            AnalysisSection::Summary => "文本摘要",
        }
    }

    /// Colour legend shown as a tooltip next to the heading.
    pub fn legend(self) -> Option<&'static str> {
        match self {
            AnalysisSection::Pos => Some(
                "名词-红色\n动词-绿色\n形容词-蓝色\n副词-黄色\n代词-紫色\n数词-棕色\n量词-灰色\n介词-棕色\n连词-灰色\n助词-深灰色\n标点-黑色",
            ),
            AnalysisSection::Entity => Some(
                "疾病-红色\n症状-绿色\n药品-蓝色\n器官-黄色\n治疗-紫色\n科室-棕色\n检查-灰色",
            ),
            AnalysisSection::Summary => None,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            AnalysisSection::Pos => "pos-tagging-results",
            AnalysisSection::Entity => "ner-results",
            AnalysisSection::Summary => "summary-results",
        }
    }
}

impl TextAnalysis {
    /// Fragment for `section`, ignoring empty strings.
    pub fn section(&self, section: AnalysisSection) -> Option<&str> {
        let value = match section {
            AnalysisSection::Pos => &self.pos_tagging,
            AnalysisSection::Entity => &self.entity_tagging,
            AnalysisSection::Summary => &self.summary,
        };
        value.as_deref().filter(|html| !html.trim().is_empty())
    }

    pub fn present_sections(&self) -> Vec<(AnalysisSection, String)> {
        AnalysisSection::ALL
            .into_iter()
            .filter_map(|s| self.section(s).map(|html| (s, html.to_string())))
            .collect()
    }
}
