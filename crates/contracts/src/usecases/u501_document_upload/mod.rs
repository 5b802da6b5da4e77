pub mod request;
pub mod response;

pub use request::{analysis_options_json, AnalysisOption, FIELD_ANALYSIS_OPTIONS, FIELD_FILE};
pub use response::{UploadResponse, UploadResults};

use crate::usecases::common::UseCaseMetadata;

pub struct DocumentUpload;

impl UseCaseMetadata for DocumentUpload {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "document_upload"
    }

    fn display_name() -> &'static str {
        "文档分析"
    }

    fn endpoint() -> &'static str {
        "/api/upload/"
    }

    fn description() -> &'static str {
        "上传单个文本文件，返回词性标注、实体识别与摘要"
    }
}
