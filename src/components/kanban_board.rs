//! Kanban Board Component
//!
//! One column per pipeline bucket. Cards are dragged between columns with
//! leptos-dragdrop; every gesture is forwarded to the board state in the
//! store, which owns the move semantics.

use leptos::prelude::*;
use rfp_board::BucketId;

use crate::components::RfpCard;
use crate::store::{use_app_store, AppStateStoreFields};

use leptos_dragdrop::*;

/// Kanban board with drag-and-drop between columns
#[component]
pub fn KanbanBoard() -> impl IntoView {
    // Zones are keyed by the columns' `data-bucket` ids
    let dnd = create_dnd_signals::<&'static str>();
    log::debug!("[KANBAN] board mounted");

    view! {
        <div class="kanban-board">
            {BucketId::ALL
                .into_iter()
                .map(|bucket| view! { <KanbanColumn bucket=bucket dnd=dnd /> })
                .collect_view()}
        </div>
    }
}

/// A single column and its cards
#[component]
fn KanbanColumn(bucket: BucketId, dnd: DndSignals<&'static str>) -> impl IntoView {
    let store = use_app_store();
    let zone = bucket.as_str();

    let cards = move || store.board().with(|s| s.board.cards(bucket).to_vec());
    let count = move || store.board().with(|s| s.board.cards(bucket).len());
    let title = move || {
        store
            .board()
            .with(|s| s.board.bucket(bucket).map(|b| b.title.clone()))
            .unwrap_or_else(|| bucket.title().to_string())
    };

    let on_dragover = make_on_dragover(dnd, zone);
    let on_dragleave = make_on_dragleave(dnd, zone);
    let on_drop = make_on_drop(dnd, zone, move |target: &'static str, payload: Option<String>| {
        log::debug!("[DND] drop on {}: payload={:?}", target, payload);
        store.board().write().drop_on(target);
    });

    let column_class = move || {
        let mut c = String::from("kanban-column");
        if dnd.dragging_read.get() && dnd.is_hovered(zone) {
            c.push_str(" drop-target");
        }
        c
    };

    view! {
        <div
            class=column_class
            data-bucket=zone
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:drop=on_drop
        >
            <div class="kanban-column-header">
                <span class="kanban-column-title">{title}</span>
                <span class="badge badge-secondary">{count}</span>
            </div>
            <div class="kanban-column-body">
                <For
                    each=cards
                    // Status is part of the key so a moved card re-renders
                    key=|card| (card.id.clone(), card.status)
                    children=move |card| {
                        let id = card.id.clone();
                        let start_id = card.id.clone();

                        let on_dragstart = make_on_dragstart(dnd, card.id.clone(), move || {
                            store.board().write().begin_drag(start_id.clone(), bucket);
                        });
                        let on_dragend = make_on_dragend(dnd, move || {
                            if store.board().with_untracked(|s| s.drag.is_some()) {
                                store.board().write().cancel_drag();
                            }
                        });

                        let card_class = move || {
                            if store.board().with(|s| s.is_in_flight(&id)) {
                                "kanban-card dragging"
                            } else {
                                "kanban-card"
                            }
                        };

                        view! {
                            <div
                                class=card_class
                                draggable="true"
                                on:dragstart=on_dragstart
                                on:dragend=on_dragend
                            >
                                <RfpCard card=card />
                            </div>
                        }
                    }
                />
                <Show when=move || count() == 0>
                    <div class="kanban-empty">"Drop RFPs here"</div>
                </Show>
            </div>
        </div>
    }
}
