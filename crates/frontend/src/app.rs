use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::shared::notification::NotificationService;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Page selection, mirrored into `?page=`.
    let ctx = AppGlobalContext::new();
    ctx.init_router_integration();
    provide_context(ctx);

    provide_context(NotificationService::new());

    view! {
        <Shell />
    }
}
