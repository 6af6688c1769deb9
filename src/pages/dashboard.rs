//! Dashboard Page
//!
//! Metric tiles computed from the live board.

use leptos::prelude::*;
use rfp_board::PipelineMetrics;

use crate::components::MetricCard;
use crate::context::Page;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let store = use_app_store();
    let today = chrono::Local::now().date_naive();
    let window_days = store.settings().with_untracked(|s| s.upcoming_deadline_days);

    let metrics = Memo::new(move |_| {
        store
            .board()
            .with(|s| PipelineMetrics::from_board(&s.board, today, window_days))
    });

    view! {
        <div class="page dashboard-page">
            <h1 class="page-title">"Dashboard"</h1>
            <section class="metric-grid">
                <MetricCard
                    title="Active RFPs"
                    icon="📄"
                    value=Signal::derive(move || metrics.get().active.to_string())
                    link_to=Page::Pipeline
                    description="New or in progress"
                />
                <MetricCard
                    title="Submitted"
                    icon="✔"
                    value=Signal::derive(move || metrics.get().submitted.to_string())
                    link_to=Page::Pipeline
                    description="Awaiting a decision"
                />
                <MetricCard
                    title="Upcoming Deadlines"
                    icon="⏰"
                    value=Signal::derive(move || metrics.get().upcoming_deadlines.to_string())
                    link_to=Page::Pipeline
                    description="Active RFPs due soon"
                />
                <MetricCard
                    title="Archived"
                    icon="🗄"
                    value=Signal::derive(move || metrics.get().archived.to_string())
                    link_to=Page::Pipeline
                />
            </section>
            <p class="dashboard-hint">
                {format!("Deadlines count active RFPs due in the next {} days.", window_days)}
            </p>
        </div>
    }
}
