pub mod response;

pub use response::{BatchResponse, BatchResults, ClusteringInfo};

use crate::usecases::common::UseCaseMetadata;

pub struct BatchClustering;

impl UseCaseMetadata for BatchClustering {
    fn usecase_index() -> &'static str {
        "u502"
    }

    fn usecase_name() -> &'static str {
        "batch_clustering"
    }

    fn display_name() -> &'static str {
        "文本聚类"
    }

    fn endpoint() -> &'static str {
        "/api/analyze-batch/"
    }

    fn description() -> &'static str {
        "上传包含content列的CSV文件，返回t-SNE聚类图与词云图"
    }
}
