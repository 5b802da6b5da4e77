use crate::usecases::common::UseCaseMetadata;

/// Benchmark modality: text QA or visual QA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EvaluationKind {
    Qa,
    Vqa,
}

pub struct QaEvaluation;
pub struct VqaEvaluation;

impl UseCaseMetadata for QaEvaluation {
    fn usecase_index() -> &'static str {
        "u503"
    }

    fn usecase_name() -> &'static str {
        "evaluate_qa"
    }

    fn display_name() -> &'static str {
        "文本问答系统评估结果"
    }

    fn endpoint() -> &'static str {
        "/api/evaluate_qa"
    }
}

impl UseCaseMetadata for VqaEvaluation {
    fn usecase_index() -> &'static str {
        "u503"
    }

    fn usecase_name() -> &'static str {
        "evaluate_vqa"
    }

    fn display_name() -> &'static str {
        "视觉问答系统评估结果"
    }

    fn endpoint() -> &'static str {
        "/api/evaluate_vqa"
    }
}

impl EvaluationKind {
    pub fn endpoint(self) -> &'static str {
        match self {
            EvaluationKind::Qa => QaEvaluation::endpoint(),
            EvaluationKind::Vqa => VqaEvaluation::endpoint(),
        }
    }

    /// Heading of the result bubble.
    pub fn title(self) -> &'static str {
        match self {
            EvaluationKind::Qa => QaEvaluation::display_name(),
            EvaluationKind::Vqa => VqaEvaluation::display_name(),
        }
    }

    pub fn progress_text(self) -> &'static str {
        match self {
            EvaluationKind::Qa => "正在分析文本问答测试集数据，请稍候...",
            EvaluationKind::Vqa => "正在分析视觉问答测试集数据，请稍候...",
        }
    }

    pub fn input_label(self) -> &'static str {
        match self {
            EvaluationKind::Qa => "文本问答测试集",
            EvaluationKind::Vqa => "视觉问答测试集",
        }
    }
}
