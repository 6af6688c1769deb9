//! RFP Detail Page
//!
//! Details, Documents and Activity History tabs for the selected RFP.

use leptos::prelude::*;
use rfp_board::{format_value, status_choices, BucketId, Card, DetailEdit};

use crate::components::StatusBadge;
use crate::context::{use_app_context, Page};
use crate::store::{
    store_find_card, store_remove_document, store_save_record, use_app_store, AppStateStoreFields,
};

#[derive(Clone, Copy, PartialEq)]
enum DetailTab {
    Details,
    Documents,
    Activity,
}

#[component]
pub fn DetailPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let selected = move || {
        store
            .selected_card()
            .get()
            .and_then(|id| store_find_card(&store, &id))
    };

    view! {
        <div class="page detail-page">
            <button class="btn btn-ghost" on:click=move |_| ctx.navigate(Page::Pipeline)>"← Back to pipeline"</button>
            {move || match selected() {
                Some((bucket, card)) => view! { <RfpDetail bucket=bucket card=card /> }.into_any(),
                None => view! {
                    <p class="empty-state">"Select an RFP from the pipeline to see its details."</p>
                }.into_any(),
            }}
        </div>
    }
}

#[component]
fn RfpDetail(bucket: BucketId, card: Card) -> impl IntoView {
    let store = use_app_store();
    let (tab, set_tab) = signal(DetailTab::Details);
    let title = card.title.clone();
    let card = StoredValue::new(card);

    let record = move || {
        card.with_value(|c| store.records().with(|r| r.get(&c.id).cloned()))
    };
    let status = move || {
        card.with_value(|c| record().map(|r| r.status_for(c)).unwrap_or(c.status))
    };

    let tab_class = move |t: DetailTab| {
        if tab.get() == t { "tab active" } else { "tab" }
    };

    view! {
        <div class="page-header">
            <h1 class="page-title">{title}</h1>
            {move || view! { <StatusBadge status=status() /> }}
        </div>
        <div class="tab-list">
            <button class=move || tab_class(DetailTab::Details) on:click=move |_| set_tab.set(DetailTab::Details)>"Details"</button>
            <button class=move || tab_class(DetailTab::Documents) on:click=move |_| set_tab.set(DetailTab::Documents)>"Documents"</button>
            <button class=move || tab_class(DetailTab::Activity) on:click=move |_| set_tab.set(DetailTab::Activity)>"Activity History"</button>
        </div>
        {move || match tab.get() {
            DetailTab::Details => view! { <DetailsForm bucket=bucket card=card /> }.into_any(),
            DetailTab::Documents => view! { <DocumentsTable card=card /> }.into_any(),
            DetailTab::Activity => view! { <ActivityLog card=card /> }.into_any(),
        }}
    }
}

/// Text inputs of the details form
#[derive(Clone, Copy)]
enum EditField {
    Value,
    SubmittedBy,
    Description,
    Notes,
}

impl EditField {
    fn get(self, edit: &DetailEdit) -> &str {
        match self {
            EditField::Value => &edit.value,
            EditField::SubmittedBy => &edit.submitted_by,
            EditField::Description => &edit.description,
            EditField::Notes => &edit.notes,
        }
    }

    fn set(self, edit: &mut DetailEdit, value: String) {
        match self {
            EditField::Value => edit.value = value,
            EditField::SubmittedBy => edit.submitted_by = value,
            EditField::Description => edit.description = value,
            EditField::Notes => edit.notes = value,
        }
    }
}

#[component]
fn EditInput(
    field: EditField,
    id: &'static str,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] multiline: bool,
    #[prop(optional)] placeholder: &'static str,
    edit: ReadSignal<DetailEdit>,
    set_edit: WriteSignal<DetailEdit>,
) -> impl IntoView {
    let value = move || edit.with(|e| field.get(e).to_string());
    let on_input = move |ev: web_sys::Event| {
        let text = event_target_value(&ev);
        set_edit.update(|e| field.set(e, text));
    };

    view! {
        <div class="form-item">
            <label for=id>{label}</label>
            {if multiline {
                view! { <textarea id=id rows="4" placeholder=placeholder prop:value=value on:input=on_input /> }.into_any()
            } else {
                view! { <input id=id type=input_type placeholder=placeholder prop:value=value on:input=on_input /> }.into_any()
            }}
        </div>
    }
}

#[component]
fn DetailsForm(bucket: BucketId, card: StoredValue<Card>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let initial = move || {
        card.with_value(|c| store.records().with_untracked(|r| DetailEdit::for_card(c, r.get(&c.id))))
    };
    let (edit, set_edit) = signal(initial());
    let (error, set_error) = signal(None::<String>);
    let choices = card.with_value(status_choices);
    let value_text = move || {
        card.with_value(|c| store.records().with(|r| r.get(&c.id).map(|rec| rec.value)))
            .map(format_value)
            .unwrap_or_else(|| "-".to_string())
    };

    let on_cancel = move |_: web_sys::MouseEvent| {
        set_edit.set(initial());
        set_error.set(None);
    };
    let on_save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let (id, title) = card.with_value(|c| (c.id.clone(), c.title.clone()));
        match edit.with_untracked(|e| store_save_record(&store, &id, e)) {
            Ok(()) => {
                set_error.set(None);
                set_edit.set(initial());
                ctx.show_toast("Changes saved", format!("\"{}\" has been updated.", title));
            }
            Err(e) => {
                log::debug!("[DETAIL] save rejected for {}: {}", id, e);
                set_error.set(Some(e.to_string()));
            }
        }
    };

    view! {
        <form class="card" on:submit=on_save>
            <div class="card-header">
                <h2>"RFP Information"</h2>
                <p class="card-description">"View and edit the core details of this RFP. Click save when you're done."</p>
            </div>
            {card.with_value(|c| view! {
                <dl class="detail-grid">
                    <dt>"Reference"</dt><dd>{c.id.clone()}</dd>
                    <dt>"Client"</dt><dd>{c.client_name.clone()}</dd>
                    <dt>"Due Date"</dt><dd>{c.due_date.clone()}</dd>
                    <dt>"Pipeline Stage"</dt><dd>{bucket.title()}</dd>
                    <dt>"Value"</dt><dd>{value_text}</dd>
                </dl>
            })}
            <div class="form-grid">
                <div class="form-item">
                    <label for="status">"Status"</label>
                    <select
                        id="status"
                        prop:value=move || edit.with(|e| e.status.clone())
                        on:change=move |ev| {
                            let picked = event_target_value(&ev);
                            set_edit.update(|e| e.status = picked);
                        }
                    >
                        {choices
                            .into_iter()
                            .map(|s| view! {
                                <option value=s.label() selected=move || edit.with(|e| e.status == s.label())>{s.label()}</option>
                            })
                            .collect_view()}
                    </select>
                </div>
                <EditInput field=EditField::Value id="value" label="Value ($)" input_type="number" edit=edit set_edit=set_edit />
                <EditInput field=EditField::SubmittedBy id="submitted-by" label="Submitted By" edit=edit set_edit=set_edit />
            </div>
            <EditInput field=EditField::Description id="description" label="Description" multiline=true edit=edit set_edit=set_edit />
            <EditInput field=EditField::Notes id="notes" label="Internal Notes" multiline=true placeholder="Add internal notes here..." edit=edit set_edit=set_edit />
            {move || error.get().map(|msg| view! { <p class="form-message">{msg}</p> })}
            <div class="dialog-footer">
                <button type="button" class="btn btn-outline" on:click=on_cancel>"Cancel"</button>
                <button type="submit" class="btn">"Save Changes"</button>
            </div>
        </form>
    }
}

#[component]
fn DocumentsTable(card: StoredValue<Card>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let documents = move || {
        card.with_value(|c| {
            store
                .records()
                .with(|r| r.get(&c.id).map(|rec| rec.documents.clone()).unwrap_or_default())
        })
    };

    view! {
        <div class="card">
            <div class="card-header">
                <h2>"Associated Documents"</h2>
                <p class="card-description">"Manage all documents related to this RFP."</p>
            </div>
            <table class="table">
                <thead>
                    <tr>
                        <th>"Filename"</th>
                        <th>"Size"</th>
                        <th>"Uploaded Date"</th>
                        <th class="text-right">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=documents
                        key=|doc| doc.id
                        children=move |doc| {
                            let name = doc.name.clone();
                            let on_remove = move |_: web_sys::MouseEvent| {
                                let id = card.with_value(|c| c.id.clone());
                                if store_remove_document(&store, &id, doc.id) {
                                    ctx.show_toast("Document removed", format!("{} was removed.", name));
                                }
                            };
                            view! {
                                <tr>
                                    <td class="font-medium">"📄 " {doc.name.clone()}</td>
                                    <td>{doc.size}</td>
                                    <td>{doc.uploaded}</td>
                                    <td class="text-right">
                                        <button class="btn btn-ghost btn-danger" title="Remove" on:click=on_remove>"🗑"</button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
            <Show when=move || documents().is_empty()>
                <p class="empty-state">"No documents attached yet."</p>
            </Show>
        </div>
    }
}

#[component]
fn ActivityLog(card: StoredValue<Card>) -> impl IntoView {
    let store = use_app_store();

    let entries = move || {
        card.with_value(|c| {
            store
                .records()
                .with(|r| r.get(&c.id).map(|rec| rec.activity.clone()).unwrap_or_default())
        })
    };

    view! {
        <div class="card">
            <div class="card-header">
                <h2>"Activity History"</h2>
                <p class="card-description">"A log of all significant events related to this RFP."</p>
            </div>
            <ul class="activity-list">
                <For
                    each=entries
                    key=|entry| entry.id
                    children=move |entry| view! {
                        <li class="activity-item">
                            <span class="activity-icon">"⟲"</span>
                            <div>
                                <p><span class="font-medium">{entry.user}</span> " " {entry.action}</p>
                                <p class="activity-time">{entry.timestamp}</p>
                            </div>
                        </li>
                    }
                />
            </ul>
            <Show when=move || entries().is_empty()>
                <p class="empty-state">"No activity recorded yet."</p>
            </Show>
        </div>
    }
}
