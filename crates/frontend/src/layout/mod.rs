pub mod global_context;
pub mod navbar;

use crate::domain::a001_chat::ui::view::ChatPage;
use crate::pages::document_analysis::DocumentAnalysisPage;
use crate::shared::notification::NotificationHost;
use global_context::{use_global_context, Page};
use leptos::prelude::*;
use navbar::Navbar;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |  Navbar                        toasts -> |
/// +------------------------------------------+
/// |  Chat page  |  Document analysis page    |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_global_context();

    view! {
        <div class="app-layout">
            <Navbar />
            <main class="app-main">
                {move || match ctx.page.get() {
                    Page::Chat => view! { <ChatPage /> }.into_any(),
                    Page::Documents => view! { <DocumentAnalysisPage /> }.into_any(),
                }}
            </main>
            <NotificationHost />
        </div>
    }
}
