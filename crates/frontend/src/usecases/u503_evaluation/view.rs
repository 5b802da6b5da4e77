use super::api;
use crate::shared::dom::{first_selected_file, input_from_event, reset_input};
use contracts::shared::api::ApiOutcome;
use contracts::usecases::u503_evaluation::{EvaluationKind, EvaluationMetrics, EVALUATION_FAILED};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Progress of one evaluation run, reported to the hosting transcript.
#[derive(Debug, Clone, PartialEq)]
pub enum EvaluationEvent {
    Started(EvaluationKind),
    Finished {
        kind: EvaluationKind,
        metrics: EvaluationMetrics,
    },
    /// Already formatted for display.
    Failed(String),
}

pub fn failure_text(message: &str) -> String {
    format!("评估过程出错：{}", message)
}

#[component]
pub fn EvaluationUpload(kind: EvaluationKind, on_event: Callback<EvaluationEvent>) -> impl IntoView {
    let on_change = move |ev: web_sys::Event| {
        let Some(input) = input_from_event(&ev) else {
            return;
        };
        let Some(file) = first_selected_file(&input) else {
            return;
        };

        on_event.run(EvaluationEvent::Started(kind));
        spawn_local(async move {
            log::info!("📊 evaluating '{}' at {}", file.name(), kind.endpoint());
            let event = match api::evaluate(kind, &file).await {
                Ok(ApiOutcome::Success(response)) => EvaluationEvent::Finished {
                    kind,
                    metrics: response.results,
                },
                Ok(ApiOutcome::Failure(failure)) => {
                    log::error!("❌ evaluation failed: {}", failure);
                    EvaluationEvent::Failed(failure_text(&failure.message_or(EVALUATION_FAILED)))
                }
                Err(e) => {
                    log::error!("❌ evaluation request failed: {}", e);
                    EvaluationEvent::Failed(failure_text(&e))
                }
            };
            on_event.run(event);
        });

        reset_input(&input);
    };

    view! {
        <label class="evaluation-upload">
            <span>{kind.input_label()}</span>
            <input type="file" accept=".csv" on:change=on_change />
        </label>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_text() {
        assert_eq!(failure_text(EVALUATION_FAILED), "评估过程出错：评估失败");
        assert_eq!(failure_text("文件缺少question列"), "评估过程出错：文件缺少question列");
    }
}
