use super::api;
use crate::shared::icons::icon;
use crate::shared::notification::{alert, use_notifications};
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u504_download_results::{
    DownloadOutcome, DownloadResults, DOWNLOAD_IN_PROGRESS_LABEL, DOWNLOAD_NETWORK_ERROR,
    DOWNLOAD_SUCCEEDED,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Enabled once some analysis produced results; disabled while a download
/// is in flight.
#[component]
pub fn DownloadButton(#[prop(into)] enabled: Signal<bool>) -> impl IntoView {
    let notifications = use_notifications();
    let busy = RwSignal::new(false);

    let on_click = move |_| {
        busy.set(true);
        spawn_local(async move {
            match api::download_results().await {
                Ok(DownloadOutcome::Saved) => {
                    log::info!("✅ results archive saved");
                    notifications.success(DOWNLOAD_SUCCEEDED);
                }
                Ok(DownloadOutcome::Failed(message)) => {
                    log::error!("❌ download failed: {}", message);
                    alert(&message);
                }
                Err(e) => {
                    log::error!("❌ download request failed: {}", e);
                    alert(DOWNLOAD_NETWORK_ERROR);
                }
            }
            busy.set(false);
        });
    };

    view! {
        <Button
            appearance=ButtonAppearance::Primary
            disabled=Signal::derive(move || busy.get() || !enabled.get())
            on_click=on_click
        >
            {icon("download")}
            {move || if busy.get() {
                DOWNLOAD_IN_PROGRESS_LABEL
            } else {
                DownloadResults::display_name()
            }}
        </Button>
    }
}
