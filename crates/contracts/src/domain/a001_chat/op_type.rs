use crate::shared::text_analysis::AnalysisSection;
use serde::{Deserialize, Deserializer, Serialize};

/// Which analysis sections a chat response carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpType {
    #[default]
    Normal,
    Pos,
    Entity,
    Summary,
    Analysis,
}

/// Message markers, checked in this order.
const MARKERS: [(&str, OpType); 4] = [
    ("词性标注：", OpType::Pos),
    ("实体识别：", OpType::Entity),
    ("文本摘要：", OpType::Summary),
    ("文本分析：", OpType::Analysis),
];

impl OpType {
    /// Infer the operation from a marker embedded in the user's message,
    /// e.g. `"词性标注：他去医院。"`.
    pub fn infer(message: &str) -> Self {
        MARKERS
            .iter()
            .find(|(marker, _)| message.contains(marker))
            .map(|(_, op)| *op)
            .unwrap_or(OpType::Normal)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OpType::Normal => "normal",
            OpType::Pos => "pos",
            OpType::Entity => "entity",
            OpType::Summary => "summary",
            OpType::Analysis => "analysis",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "normal" => Some(OpType::Normal),
            "pos" => Some(OpType::Pos),
            "entity" => Some(OpType::Entity),
            "summary" => Some(OpType::Summary),
            "analysis" => Some(OpType::Analysis),
            _ => None,
        }
    }

    /// Whether `section` is rendered for this operation.
    pub fn shows(self, section: AnalysisSection) -> bool {
        match self {
            OpType::Normal => false,
            OpType::Analysis => true,
            OpType::Pos => section == AnalysisSection::Pos,
            OpType::Entity => section == AnalysisSection::Entity,
            OpType::Summary => section == AnalysisSection::Summary,
        }
    }
}

/// Unknown labels decode as `None` so the client can fall back to
/// [`OpType::infer`] instead of failing the whole response.
pub(crate) fn lenient_op_type<'de, D>(deserializer: D) -> Result<Option<OpType>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(OpType::from_str))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_from_markers() {
        assert_eq!(OpType::infer("词性标注：他去医院。"), OpType::Pos);
        assert_eq!(OpType::infer("请做实体识别：患者胃痛"), OpType::Entity);
        assert_eq!(OpType::infer("文本摘要：……"), OpType::Summary);
        assert_eq!(OpType::infer("文本分析：头痛三天"), OpType::Analysis);
        assert_eq!(OpType::infer("感冒了吃什么药？"), OpType::Normal);
        // Marker needs the full-width colon.
        assert_eq!(OpType::infer("词性标注 他去医院"), OpType::Normal);
    }

    #[test]
    fn test_first_marker_wins() {
        assert_eq!(OpType::infer("文本分析：词性标注：x"), OpType::Pos);
    }

    #[test]
    fn test_section_visibility() {
        use AnalysisSection::*;
        assert!(OpType::Pos.shows(Pos));
        assert!(!OpType::Pos.shows(Entity));
        assert!(!OpType::Pos.shows(Summary));
        assert!(OpType::Entity.shows(Entity));
        assert!(OpType::Summary.shows(Summary));
        assert!(AnalysisSection::ALL.iter().all(|s| OpType::Analysis.shows(*s)));
        assert!(AnalysisSection::ALL.iter().all(|s| !OpType::Normal.shows(*s)));
    }

    #[test]
    fn test_labels() {
        for op in [
            OpType::Normal,
            OpType::Pos,
            OpType::Entity,
            OpType::Summary,
            OpType::Analysis,
        ] {
            assert_eq!(OpType::from_str(op.as_str()), Some(op));
        }
    }
}
