use super::config::ClientConfig;
use super::icons::icon;
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    pub fn css_class(self) -> &'static str {
        match self {
            NotificationKind::Success => "notification notification-success",
            NotificationKind::Error => "notification notification-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: Uuid,
    pub kind: NotificationKind,
    pub message: String,
}

/// Transient toasts in the top-right corner.
#[derive(Clone, Copy)]
pub struct NotificationService {
    items: RwSignal<Vec<Notification>>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
        }
    }

    /// Show a toast; it disappears by itself after the configured TTL.
    pub fn notify(&self, message: impl Into<String>, kind: NotificationKind) {
        let notification = Notification {
            id: Uuid::new_v4(),
            kind,
            message: message.into(),
        };
        let id = notification.id;
        self.items.update(|items| items.push(notification));

        let this = *self;
        let ttl = ClientConfig::get().notification_ttl_ms;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(ttl).await;
            this.dismiss(id);
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.notify(message, NotificationKind::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.notify(message, NotificationKind::Error);
    }

    pub fn dismiss(&self, id: Uuid) {
        self.items.update(|items| items.retain(|n| n.id != id));
    }
}

pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>().expect("NotificationService not provided in context")
}

/// Blocking browser alert.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

#[component]
pub fn NotificationHost() -> impl IntoView {
    let service = use_notifications();

    view! {
        <div class="notification-stack" style="position: fixed; top: 20px; right: 20px; z-index: 1000; display: flex; flex-direction: column; gap: 8px; max-width: 300px;">
            <For
                each=move || service.items.get()
                key=|n| n.id
                let:notification
            >
                {{
                    let id = notification.id;
                    view! {
                        <div class=notification.kind.css_class()>
                            <span>{notification.message.clone()}</span>
                            <button
                                class="notification__close"
                                aria-label="关闭"
                                on:click=move |_| service.dismiss(id)
                            >
                                {icon("x")}
                            </button>
                        </div>
                    }
                }}
            </For>
        </div>
    }
}
