//! RFP Dashboard App
//!
//! Main application component: sidebar, header, current page, toast.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{Sidebar, ToastHost};
use crate::context::{AppContext, Page, Toast};
use crate::pages::{ClientsPage, DashboardPage, DetailPage, NewRfpPage, PipelinePage};
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let state = AppState::from_seed();
    let toast_duration_ms = state.settings.toast_duration_ms;
    provide_context(Store::new(state));

    let (page, set_page) = signal(Page::Dashboard);
    let (toast, set_toast) = signal(None::<Toast>);
    provide_context(AppContext::new((page, set_page), (toast, set_toast), toast_duration_ms));

    view! {
        <div class="app-layout">
            <Sidebar />
            <div class="app-main">
                <header class="app-header">
                    <span class="app-logo">"RFP Tracker"</span>
                    <span class="app-header-page">{move || page.get().title()}</span>
                </header>

                <main class="main-content">
                    {move || match page.get() {
                        Page::Dashboard => view! { <DashboardPage /> }.into_any(),
                        Page::Pipeline => view! { <PipelinePage /> }.into_any(),
                        Page::Clients => view! { <ClientsPage /> }.into_any(),
                        Page::Detail => view! { <DetailPage /> }.into_any(),
                        Page::NewRfp => view! { <NewRfpPage /> }.into_any(),
                    }}
                </main>

                <footer class="app-footer">"RFP Tracker · sample data only"</footer>
            </div>
            <ToastHost />
        </div>
    }
}
