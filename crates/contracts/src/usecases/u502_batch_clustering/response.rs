use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Successful `POST /api/analyze-batch/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchResponse {
    pub results: BatchResults,
    #[serde(default, deserialize_with = "lenient_info")]
    pub info: Option<ClusteringInfo>,
}

/// Both fields are pre-rendered HTML fragments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchResults {
    #[serde(default)]
    pub tsne: String,
    #[serde(default)]
    pub wordcloud: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusteringInfo {
    #[serde(default)]
    pub total_texts: Option<u64>,
    #[serde(default)]
    pub n_clusters: Option<u64>,
    #[serde(default)]
    pub encoding_used: Option<String>,
}

impl ClusteringInfo {
    /// Labelled lines for the fields the server sent.
    pub fn summary_lines(&self) -> Vec<(&'static str, String)> {
        [
            ("文本总数", self.total_texts.map(|n| n.to_string())),
            ("聚类数量", self.n_clusters.map(|n| n.to_string())),
            ("文件编码", self.encoding_used.clone()),
        ]
        .into_iter()
        .filter_map(|(label, value)| value.map(|v| (label, v)))
        .collect()
    }
}

/// A malformed `info` block only loses the summary, never the plots.
fn lenient_info<'de, D>(deserializer: D) -> Result<Option<ClusteringInfo>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| serde_json::from_value(value).ok()))
}
