use super::api;
use crate::shared::analysis_view::VisualizationView;
use crate::shared::dom::{first_selected_file, input_from_event, reset_input};
use crate::shared::notification::{alert, use_notifications};
use contracts::shared::api::ApiOutcome;
use contracts::shared::upload_rules::validate_batch_csv;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u502_batch_clustering::{BatchClustering, BatchResponse};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Debug, Clone, PartialEq)]
enum ClusteringState {
    Idle,
    Loading,
    Done(BatchResponse),
    Failed(String),
}

#[component]
pub fn BatchClusteringPanel(
    downloads_ready: RwSignal<bool>,
    /// Called after a successful run, e.g. to bring the results tab forward.
    on_success: Callback<()>,
) -> impl IntoView {
    let notifications = use_notifications();
    let state = RwSignal::new(ClusteringState::Idle);

    let on_change = move |ev: web_sys::Event| {
        let Some(input) = input_from_event(&ev) else {
            return;
        };
        let Some(file) = first_selected_file(&input) else {
            return;
        };
        let name = file.name();
        if let Err(rejection) = validate_batch_csv(&name) {
            log::warn!("⚠️ batch file '{}' rejected: {}", name, rejection);
            alert(&rejection.to_string());
            reset_input(&input);
            return;
        }

        state.set(ClusteringState::Loading);
        spawn_local(async move {
            log::info!("🧮 clustering '{}'", name);
            match api::analyze_batch(&file).await {
                Ok(ApiOutcome::Success(response)) => {
                    state.set(ClusteringState::Done(response));
                    notifications.success("文本聚类分析完成！");
                    downloads_ready.set(true);
                    on_success.run(());
                }
                Ok(ApiOutcome::Failure(failure)) => {
                    log::error!("❌ clustering failed: {}", failure);
                    state.set(ClusteringState::Failed(format!("批量分析失败: {}", failure)));
                    notifications.error("聚类分析失败");
                }
                Err(e) => {
                    log::error!("❌ batch upload failed: {}", e);
                    state.set(ClusteringState::Failed(
                        "上传或分析过程中发生错误，请重试。".to_string(),
                    ));
                    notifications.error("上传失败");
                }
            }
        });
    };

    view! {
        <section class="upload-section">
            <h3>{BatchClustering::display_name()}</h3>
            <p class="upload-section__hint">{BatchClustering::description()}</p>
            <input type="file" accept=".csv" on:change=on_change />
        </section>

        <div class="clustering-results">
            {move || match state.get() {
                ClusteringState::Idle => ().into_any(),
                ClusteringState::Loading => view! {
                    <div class="loading">"正在处理文本聚类，请稍候..."</div>
                }.into_any(),
                ClusteringState::Failed(message) => view! {
                    <div class="error">{message}</div>
                }.into_any(),
                ClusteringState::Done(response) => view! {
                    <h4>"文本聚类结果"</h4>
                    {response.info.map(|info| view! {
                        <div class="analysis-info">
                            <h5>"分析摘要"</h5>
                            {info.summary_lines().into_iter().map(|(label, value)| view! {
                                <div><strong>{format!("{}：", label)}</strong>{value}</div>
                            }).collect_view()}
                        </div>
                    })}
                    <div class="results-container">
                        <VisualizationView
                            title="📊 t-SNE聚类可视化"
                            html=response.results.tsne
                            description="t-SNE将高维文本数据降维到2D空间，相似的文本会聚集在一起，不同颜色代表不同的聚类。"
                        />
                        <VisualizationView
                            title="☁️ 词云图"
                            html=response.results.wordcloud
                            description="词云图显示了文本集合中最常出现的词汇，字体大小反映词汇的重要程度。"
                        />
                    </div>
                }.into_any(),
            }}
        </div>
    }
}
