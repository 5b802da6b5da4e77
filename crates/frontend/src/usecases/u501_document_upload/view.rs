use super::api;
use crate::shared::analysis_view::AnalysisSectionView;
use crate::shared::dom::{first_selected_file, input_from_event, reset_input};
use crate::shared::notification::{alert, use_notifications};
use contracts::shared::api::ApiOutcome;
use contracts::shared::text_analysis::AnalysisSection;
use contracts::shared::upload_rules::validate_document;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_document_upload::{AnalysisOption, DocumentUpload};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashMap;

/// Selection after toggling `option`, kept in display order.
fn toggle_option(current: &[AnalysisOption], option: AnalysisOption, checked: bool) -> Vec<AnalysisOption> {
    AnalysisOption::ALL
        .into_iter()
        .filter(|o| if *o == option { checked } else { current.contains(o) })
        .collect()
}

#[component]
pub fn DocumentUploadPanel(downloads_ready: RwSignal<bool>) -> impl IntoView {
    let notifications = use_notifications();
    let selected = RwSignal::new(AnalysisOption::ALL.to_vec());
    let analyzing = RwSignal::new(false);
    // Each slot keeps its last content until a newer result fills it.
    let slots = RwSignal::new(HashMap::<AnalysisSection, String>::new());

    let on_change = move |ev: web_sys::Event| {
        let Some(input) = input_from_event(&ev) else {
            return;
        };
        let Some(file) = first_selected_file(&input) else {
            return;
        };
        let name = file.name();
        if let Err(rejection) = validate_document(&name, &file.type_()) {
            log::warn!("⚠️ document '{}' rejected: {}", name, rejection);
            alert(&rejection.to_string());
            reset_input(&input);
            return;
        }

        let options = selected.get_untracked();
        analyzing.set(true);
        spawn_local(async move {
            log::info!("📄 analysing '{}' with {:?}", name, options);
            match api::upload_document(&file, &options).await {
                Ok(ApiOutcome::Success(response)) => {
                    let present = response.results.analysis().present_sections();
                    slots.update(|slots| slots.extend(present));
                    notifications.success("文档分析完成！");
                    downloads_ready.set(true);
                }
                Ok(ApiOutcome::Failure(failure)) => {
                    log::error!("❌ document analysis failed: {}", failure);
                    alert(&format!("分析过程中发生错误：{}", failure));
                    notifications.error("文档分析失败");
                }
                Err(e) => {
                    log::error!("❌ document upload failed: {}", e);
                    alert("上传或分析过程中发生错误，请重试。");
                    notifications.error("上传失败");
                }
            }
            analyzing.set(false);
        });
    };

    view! {
        <section class="upload-section">
            <h3>{DocumentUpload::display_name()}</h3>
            <p class="upload-section__hint">{DocumentUpload::description()}</p>

            <div class="analysis-options">
                {AnalysisOption::ALL.into_iter().map(|option| {
                    view! {
                        <label class="analysis-option">
                            <input
                                type="checkbox"
                                name="analysis_type"
                                prop:checked=move || selected.with(|s| s.contains(&option))
                                on:change=move |ev| {
                                    let checked = event_target_checked(&ev);
                                    selected.update(|s| *s = toggle_option(s, option, checked));
                                }
                            />
                            <span>{option.label()}</span>
                        </label>
                    }
                }).collect_view()}
            </div>

            <input type="file" accept=".txt,.text,text/plain" on:change=on_change />

            <Show when=move || analyzing.get()>
                <div class="upload-status">"正在分析文档，请稍候..."</div>
            </Show>

            <div class="analysis-results">
                {AnalysisSection::ALL.into_iter().map(|section| {
                    move || {
                        let html = slots.with(|s| s.get(&section).cloned()).unwrap_or_default();
                        view! { <AnalysisSectionView section=section html=html /> }
                    }
                }).collect_view()}
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_keeps_display_order() {
        let none = toggle_option(&AnalysisOption::ALL, AnalysisOption::Ner, false);
        assert_eq!(none, vec![AnalysisOption::Pos, AnalysisOption::Summary]);
        let back = toggle_option(&none, AnalysisOption::Ner, true);
        assert_eq!(back, AnalysisOption::ALL.to_vec());
        assert!(toggle_option(&[AnalysisOption::Pos], AnalysisOption::Pos, false).is_empty());
    }
}
