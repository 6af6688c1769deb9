//! Pipeline Page
//!
//! Kanban and list views over the same board.

use leptos::prelude::*;

use crate::components::{KanbanBoard, StatusBadge};
use crate::context::{use_app_context, Page};
use crate::store::{use_app_store, AppStateStoreFields};

#[derive(Clone, Copy, PartialEq)]
enum PipelineTab {
    Kanban,
    List,
}

#[component]
pub fn PipelinePage() -> impl IntoView {
    let ctx = use_app_context();
    let (tab, set_tab) = signal(PipelineTab::Kanban);

    let tab_class = move |t: PipelineTab| {
        if tab.get() == t { "tab active" } else { "tab" }
    };

    view! {
        <div class="page pipeline-page">
            <div class="page-header">
                <h1 class="page-title">"RFP Pipeline"</h1>
                <button class="btn btn-small" on:click=move |_| ctx.navigate(Page::NewRfp)>"＋ Add RFP"</button>
            </div>
            <div class="tab-list">
                <button class=move || tab_class(PipelineTab::Kanban) on:click=move |_| set_tab.set(PipelineTab::Kanban)>"Kanban"</button>
                <button class=move || tab_class(PipelineTab::List) on:click=move |_| set_tab.set(PipelineTab::List)>"List"</button>
            </div>
            {move || match tab.get() {
                PipelineTab::Kanban => view! { <KanbanBoard /> }.into_any(),
                PipelineTab::List => view! { <RfpTable /> }.into_any(),
            }}
        </div>
    }
}

/// All RFPs on the board as a table
#[component]
fn RfpTable() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let rows = move || store.board().with(|s| s.board.all_cards().cloned().collect::<Vec<_>>());

    view! {
        <div class="card">
            <div class="card-header">
                <h2>"All RFPs"</h2>
                <p class="card-description">"Every active and archived proposal."</p>
            </div>
            <table class="table">
                <thead>
                    <tr>
                        <th>"Title"</th>
                        <th>"Client"</th>
                        <th>"Status"</th>
                        <th>"Due Date"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=rows
                        key=|card| (card.id.clone(), card.status)
                        children=move |card| {
                            let id = card.id.clone();
                            view! {
                                <tr>
                                    <td class="font-medium">{card.title}</td>
                                    <td>{card.client_name}</td>
                                    <td><StatusBadge status=card.status /></td>
                                    <td>{card.due_date}</td>
                                    <td>
                                        <button
                                            class="btn btn-ghost"
                                            on:click=move |_| {
                                                *store.selected_card().write() = Some(id.clone());
                                                ctx.navigate(Page::Detail);
                                            }
                                        >
                                            "View Details"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}
