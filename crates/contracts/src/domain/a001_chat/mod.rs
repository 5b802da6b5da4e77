pub mod dto;
pub mod op_type;
pub mod session;

pub use dto::{AnalysisPanel, ChatRequest, ChatResponse, ChatResults, VisualQaAnswer};
pub use op_type::OpType;
pub use session::{ChatRoute, ChatSession, VisualQaUnavailable};

/// Plain chat and text-analysis requests.
pub const CHAT_ENDPOINT: &str = "/api/chat/";

/// Questions about an attached image.
pub const VISUAL_QA_ENDPOINT: &str = "/api/visual_qa/";

/// Multipart field names of the visual-QA request.
pub const VISUAL_QA_FIELD_IMAGE: &str = "image";
pub const VISUAL_QA_FIELD_QUESTION: &str = "question";

/// Shown when a chat request fails for any reason.
pub const CHAT_APOLOGY: &str = "抱歉，发生了错误，请稍后重试。";
