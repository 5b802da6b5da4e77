use super::view_model::ResultsView;
use crate::shared::analysis_view::{AnalysisSectionView, VisualizationView};
use leptos::prelude::*;

/// Analysis under the transcript: the sections allowed by the operation
/// type, then the optional visualisations of an uploaded document.
#[component]
pub fn AnalysisResults(results: ResultsView) -> impl IntoView {
    let sections = results.panel.map(|panel| panel.sections).unwrap_or_default();

    view! {
        <div class="analysis-results">
            {sections.into_iter().map(|(section, html)| view! {
                <AnalysisSectionView section=section html=html />
            }).collect_view()}
            {results.wordcloud.map(|html| view! {
                <VisualizationView title="词云图" html=html />
            })}
            {results.tsne.map(|html| view! {
                <VisualizationView title="t-SNE可视化" html=html />
            })}
        </div>
    }
}
