//! Metric Card Component
//!
//! Headline number tile on the dashboard. Clicking jumps to the related page.

use leptos::prelude::*;

use crate::context::{use_app_context, Page};

#[component]
pub fn MetricCard(
    title: &'static str,
    icon: &'static str,
    #[prop(into)] value: Signal<String>,
    link_to: Page,
    #[prop(optional)] description: Option<&'static str>,
) -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="metric-card" on:click=move |_| ctx.navigate(link_to)>
            <div class="metric-card-header">
                <span class="metric-card-title">{title}</span>
                <span class="metric-card-icon">{icon}</span>
            </div>
            <div class="metric-card-value">{move || value.get()}</div>
            {description.map(|d| view! { <p class="metric-card-description">{d}</p> })}
        </div>
    }
}
