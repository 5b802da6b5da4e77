use crate::usecases::u501_document_upload::DocumentUploadPanel;
use crate::usecases::u502_batch_clustering::BatchClusteringPanel;
use crate::usecases::u504_download_results::DownloadButton;
use leptos::prelude::*;

/// Result tabs of the document page; exactly one is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnalysisTab {
    #[default]
    Document,
    Clustering,
}

impl AnalysisTab {
    pub const ALL: [AnalysisTab; 2] = [AnalysisTab::Document, AnalysisTab::Clustering];

    pub fn key(self) -> &'static str {
        match self {
            AnalysisTab::Document => "document",
            AnalysisTab::Clustering => "clustering",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            AnalysisTab::Document => "文档分析",
            AnalysisTab::Clustering => "聚类结果",
        }
    }

    /// `tab-button` / `tab-content` class for this tab given the active one.
    pub fn css_class(self, base: &str, active: AnalysisTab) -> String {
        if self == active {
            format!("{} active", base)
        } else {
            base.to_string()
        }
    }
}

#[component]
pub fn DocumentAnalysisPage() -> impl IntoView {
    let active = RwSignal::new(AnalysisTab::default());
    // Shared by both panels: any successful analysis makes results downloadable.
    let downloads_ready = RwSignal::new(false);
    let show_clustering = Callback::new(move |_: ()| active.set(AnalysisTab::Clustering));

    view! {
        <div class="document-page">
            <div class="tab-buttons">
                {AnalysisTab::ALL.into_iter().map(|tab| view! {
                    <button
                        class=move || tab.css_class("tab-button", active.get())
                        data-tab=tab.key()
                        on:click=move |_| active.set(tab)
                    >
                        {tab.title()}
                    </button>
                }).collect_view()}
            </div>

            <div class=move || AnalysisTab::Document.css_class("tab-content", active.get())>
                <DocumentUploadPanel downloads_ready=downloads_ready />
            </div>
            <div class=move || AnalysisTab::Clustering.css_class("tab-content", active.get())>
                <BatchClusteringPanel downloads_ready=downloads_ready on_success=show_clustering />
            </div>

            <div class="download-section">
                <DownloadButton enabled=downloads_ready />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_tab_active() {
        for active in AnalysisTab::ALL {
            let active_count = AnalysisTab::ALL
                .iter()
                .filter(|tab| tab.css_class("tab-content", active).ends_with(" active"))
                .count();
            assert_eq!(active_count, 1);
        }
        assert_eq!(
            AnalysisTab::Clustering.css_class("tab-button", AnalysisTab::Clustering),
            "tab-button active"
        );
        assert_eq!(
            AnalysisTab::Document.css_class("tab-button", AnalysisTab::Clustering),
            "tab-button"
        );
    }
}
