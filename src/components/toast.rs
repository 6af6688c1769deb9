//! Toast Component
//!
//! Renders the current toast from `AppContext`, if any.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn ToastHost() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        {move || ctx.toast.get().map(|toast| view! {
            <div class="toast" role="status">
                <div class="toast-title">{toast.title}</div>
                <div class="toast-description">{toast.description}</div>
                <button class="toast-close" on:click=move |_| ctx.dismiss_toast()>"×"</button>
            </div>
        })}
    }
}
