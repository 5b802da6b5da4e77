//! Rendering of server-produced analysis fragments.
//!
//! The backend returns ready HTML (coloured spans, `<img>` tags); it is
//! injected as-is.

use super::icons::icon;
use contracts::shared::text_analysis::AnalysisSection;
use leptos::prelude::*;

#[component]
pub fn AnalysisSectionView(section: AnalysisSection, html: String) -> impl IntoView {
    view! {
        <div class=format!("analysis-section {}", section.css_class())>
            <h4 class="analysis-section__title">
                {section.title()}
                {section.legend().map(|legend| view! {
                    <span class="legend-tooltip" title=legend>{icon("info")}</span>
                })}
            </h4>
            <div class="result-content" inner_html=html></div>
        </div>
    }
}

/// Titled image fragment (word cloud, t-SNE plot).
#[component]
pub fn VisualizationView(
    title: &'static str,
    html: String,
    #[prop(optional)] description: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="visualization">
            <h5>{title}</h5>
            <div class="image-container" inner_html=html></div>
            {description.map(|text| view! { <p class="image-description">{text}</p> })}
        </div>
    }
}
