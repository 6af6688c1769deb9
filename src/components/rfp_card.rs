//! RFP Card Component
//!
//! Compact summary of one RFP. Clicking opens the detail page.

use leptos::prelude::*;
use rfp_board::Card;

use crate::components::StatusBadge;
use crate::context::{use_app_context, Page};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn RfpCard(card: Card) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let id = card.id.clone();

    let open_detail = move |_: web_sys::MouseEvent| {
        *store.selected_card().write() = Some(id.clone());
        ctx.navigate(Page::Detail);
    };

    view! {
        <div class="rfp-card" on:click=open_detail>
            <div class="rfp-card-header">
                <span class="rfp-card-title">{card.title}</span>
                <StatusBadge status=card.status />
            </div>
            <p class="rfp-card-client">{card.client_name}</p>
            <div class="rfp-card-due">"📅 Due: " {card.due_date}</div>
        </div>
    }
}
