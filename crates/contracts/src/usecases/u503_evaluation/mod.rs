pub mod kind;
pub mod response;

pub use kind::{EvaluationKind, QaEvaluation, VqaEvaluation};
pub use response::{EvaluationMetrics, EvaluationResponse};

/// Fallback message when the server reports a failure without text.
pub const EVALUATION_FAILED: &str = "评估失败";
