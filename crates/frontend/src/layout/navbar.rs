use crate::layout::global_context::{use_global_context, Page};
use crate::shared::icons::icon;
use contracts::shared::limits::NAVBAR_SHADOW_THRESHOLD_PX;
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// The header gets a shadow once the page is scrolled past the threshold.
pub fn navbar_has_shadow(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_SHADOW_THRESHOLD_PX
}

fn event_node(event: &web_sys::Event) -> Option<web_sys::Node> {
    event.target()?.dyn_into::<web_sys::Node>().ok()
}

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_global_context();
    let menu_open = RwSignal::new(false);
    let scrolled = RwSignal::new(false);

    let toggle_ref = NodeRef::<html::Button>::new();
    let menu_ref = NodeRef::<html::Ul>::new();

    // Close when clicking anywhere outside the toggle and the menu
    Effect::new(move |_| {
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            if !menu_open.get_untracked() {
                return;
            }
            let Some(target) = event_node(&event) else {
                return;
            };
            let inside_toggle = toggle_ref
                .get_untracked()
                .map(|el| el.contains(Some(&target)))
                .unwrap_or(false);
            let inside_menu = menu_ref
                .get_untracked()
                .map(|el| el.contains(Some(&target)))
                .unwrap_or(false);
            if !inside_toggle && !inside_menu {
                menu_open.set(false);
            }
        }) as Box<dyn FnMut(_)>);

        if let Some(window) = web_sys::window() {
            let _ = window.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    });

    Effect::new(move |_| {
        let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            let y = web_sys::window()
                .and_then(|w| w.scroll_y().ok())
                .unwrap_or(0.0);
            let shadow = navbar_has_shadow(y);
            if scrolled.get_untracked() != shadow {
                scrolled.set(shadow);
            }
        }) as Box<dyn FnMut(_)>);

        if let Some(window) = web_sys::window() {
            let _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    });

    let header_style = move || {
        if scrolled.get() {
            "box-shadow: 0 2px 10px rgba(0, 0, 0, 0.1);"
        } else {
            "box-shadow: none;"
        }
    };

    view! {
        <header class="navbar" style=header_style>
            <div class="navbar__brand">"医疗智能问答系统"</div>
            <button
                class="navbar__toggle"
                aria-label="菜单"
                node_ref=toggle_ref
                on:click=move |_| menu_open.update(|open| *open = !*open)
            >
                {icon("menu")}
            </button>
            <ul
                class="navbar__links"
                class:active=move || menu_open.get()
                node_ref=menu_ref
            >
                {Page::ALL.into_iter().map(|page| {
                    view! {
                        <li
                            class="navbar__link"
                            class:current=move || ctx.page.get() == page
                            on:click=move |_| {
                                menu_open.set(false);
                                ctx.open(page);
                            }
                        >
                            {icon(page.icon())}
                            <span>{page.title()}</span>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </header>
    }
}
