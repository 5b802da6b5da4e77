pub mod outcome;

pub use outcome::{DownloadDisposition, DownloadOutcome};

use crate::usecases::common::UseCaseMetadata;

pub struct DownloadResults;

impl UseCaseMetadata for DownloadResults {
    fn usecase_index() -> &'static str {
        "u504"
    }

    fn usecase_name() -> &'static str {
        "download_results"
    }

    fn display_name() -> &'static str {
        "下载分析结果"
    }

    fn endpoint() -> &'static str {
        "/api/download-results/"
    }

    fn description() -> &'static str {
        "以zip压缩包形式下载最近一次的分析结果"
    }
}

/// Button label while the archive is being produced.
pub const DOWNLOAD_IN_PROGRESS_LABEL: &str = "正在生成下载文件...";

pub const DOWNLOAD_SUCCEEDED: &str = "分析结果已成功下载！";

pub const DOWNLOAD_NETWORK_ERROR: &str = "下载过程中发生网络错误，请检查网络连接后重试。";
