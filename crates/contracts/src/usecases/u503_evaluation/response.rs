use serde::{Deserialize, Serialize};

/// Successful evaluation upload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResponse {
    pub results: EvaluationMetrics,
}

/// Percentages are already scaled to 0..=100 by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationMetrics {
    #[serde(alias = "vqa_accuracy")]
    pub accuracy: f64,
    pub total_questions: u64,
    pub matched_questions: u64,
    pub avg_similarity: f64,
    pub threshold: f64,
}

impl EvaluationMetrics {
    /// Lines of the metrics list, in display order.
    pub fn metric_lines(&self) -> Vec<String> {
        vec![
            format!("系统准确率：{}%", self.accuracy),
            format!("测试问题总数：{}", self.total_questions),
            format!("成功匹配数：{}", self.matched_questions),
            format!("平均相似度：{}%", self.avg_similarity),
            format!("相似度阈值：{}%", self.threshold),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::ApiOutcome;
    use crate::usecases::u503_evaluation::EVALUATION_FAILED;

    #[test]
    fn test_qa_metrics() {
        let body = r#"{"success": true, "results": {"accuracy": 85.5, "total_questions": 200,
            "matched_questions": 171, "avg_similarity": 72.31, "threshold": 57.85}}"#;
        let metrics = ApiOutcome::<EvaluationResponse>::decode(200, body)
            .unwrap()
            .into_result()
            .unwrap()
            .results;
        assert_eq!(
            metrics.metric_lines(),
            vec![
                "系统准确率：85.5%",
                "测试问题总数：200",
                "成功匹配数：171",
                "平均相似度：72.31%",
                "相似度阈值：57.85%",
            ]
        );
    }

    #[test]
    fn test_vqa_accuracy_alias() {
        let body = r#"{"success": true, "results": {"vqa_accuracy": 80.0, "total_questions": 10,
            "matched_questions": 8, "avg_similarity": 66.0, "threshold": 52.8}}"#;
        let metrics = ApiOutcome::<EvaluationResponse>::decode(200, body)
            .unwrap()
            .into_result()
            .unwrap()
            .results;
        assert_eq!(metrics.accuracy, 80.0);
        assert_eq!(metrics.metric_lines()[0], "系统准确率：80%");
    }

    #[test]
    fn test_failure_without_message() {
        let failure = ApiOutcome::<EvaluationResponse>::decode(200, r#"{"success": false}"#)
            .unwrap()
            .into_result()
            .unwrap_err();
        assert_eq!(failure.message_or(EVALUATION_FAILED), "评估失败");
    }
}
