//! Sidebar Component
//!
//! Collapsible navigation column.

use leptos::prelude::*;

use crate::context::{use_app_context, Page};

/// Sidebar entries: page, icon
const NAV_LINKS: &[(Page, &str)] = &[
    (Page::Dashboard, "▦"),
    (Page::Pipeline, "☰"),
    (Page::Clients, "👥"),
];

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();
    let (collapsed, set_collapsed) = signal(false);

    view! {
        <aside class=move || if collapsed.get() { "sidebar collapsed" } else { "sidebar" }>
            <nav class="sidebar-nav">
                {NAV_LINKS.iter().map(|&(page, icon)| {
                    let is_active = move || ctx.page.get() == page;
                    view! {
                        <button
                            class=move || if is_active() { "nav-link active" } else { "nav-link" }
                            title=page.title()
                            on:click=move |_| ctx.navigate(page)
                        >
                            <span class="nav-icon">{icon}</span>
                            <Show when=move || !collapsed.get()>
                                <span class="nav-label">{page.title()}</span>
                            </Show>
                        </button>
                    }
                }).collect_view()}
            </nav>
            <button
                class="sidebar-toggle"
                on:click=move |_| set_collapsed.update(|v| *v = !*v)
            >
                {move || if collapsed.get() { "»" } else { "« Collapse" }}
            </button>
        </aside>
    }
}
