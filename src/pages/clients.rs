//! Clients Page
//!
//! Searchable client table with an "Add Client" dialog.

use leptos::prelude::*;
use rfp_board::{filter_clients, NewClient};

use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ClientsPage() -> impl IntoView {
    let store = use_app_store();
    let (query, set_query) = signal(String::new());
    let (dialog_open, set_dialog_open) = signal(false);

    let visible = move || {
        let q = query.get();
        store.clients().with(|dir| {
            filter_clients(&dir.clients, &q)
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="page clients-page">
            <div class="page-header">
                <h1 class="page-title">"Clients"</h1>
                <button class="btn btn-small" on:click=move |_| set_dialog_open.set(true)>"＋ Add Client"</button>
            </div>
            <input
                class="search-input"
                type="search"
                placeholder="Search by name, company or email..."
                prop:value=move || query.get()
                on:input=move |ev| set_query.set(event_target_value(&ev))
            />
            <table class="table">
                <thead>
                    <tr>
                        <th>"Avatar"</th>
                        <th>"Contact Name"</th>
                        <th>"Company"</th>
                        <th>"Email"</th>
                        <th class="text-center">"RFPs"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=visible
                        key=|client| client.id.clone()
                        children=move |client| view! {
                            <tr>
                                <td><span class="avatar">{client.initials()}</span></td>
                                <td class="font-medium">{client.name}</td>
                                <td>{client.company}</td>
                                <td>{client.email}</td>
                                <td class="text-center">{client.rfp_count}</td>
                            </tr>
                        }
                    />
                </tbody>
            </table>
            <Show when=move || visible().is_empty()>
                <p class="empty-state">"No clients match your search."</p>
            </Show>
            <Show when=move || dialog_open.get()>
                <AddClientDialog on_close=move || set_dialog_open.set(false) />
            </Show>
        </div>
    }
}

/// Modal form for a new client
#[component]
fn AddClientDialog(on_close: impl Fn() + Copy + Send + Sync + 'static) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let (name, set_name) = signal(String::new());
    let (company, set_company) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (error, set_error) = signal(None::<String>);

    let on_save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let input = NewClient {
            name: name.get_untracked(),
            company: company.get_untracked(),
            email: email.get_untracked(),
        };
        let result = store.clients().write().add(input).map(|c| c.name.clone());
        match result {
            Ok(added) => {
                ctx.show_toast("Client added", format!("{} is now in your client list.", added));
                on_close();
            }
            Err(e) => set_error.set(Some(e.to_string())),
        }
    };

    view! {
        <div class="dialog-backdrop">
            <form class="dialog" on:submit=on_save>
                <h2>"Add New Client"</h2>
                <p class="card-description">"Enter the details for the new client. Click save when you're done."</p>
                <label>"Name"
                    <input placeholder="e.g., Jane Doe" prop:value=move || name.get() on:input=move |ev| set_name.set(event_target_value(&ev)) />
                </label>
                <label>"Company"
                    <input placeholder="e.g., Acme Inc." prop:value=move || company.get() on:input=move |ev| set_company.set(event_target_value(&ev)) />
                </label>
                <label>"Email"
                    <input type="email" placeholder="e.g., jane.doe@acme.com" prop:value=move || email.get() on:input=move |ev| set_email.set(event_target_value(&ev)) />
                </label>
                {move || error.get().map(|msg| view! { <p class="form-message">{msg}</p> })}
                <div class="dialog-footer">
                    <button type="button" class="btn btn-outline" on:click=move |_| on_close()>"Cancel"</button>
                    <button type="submit" class="btn">"Save Client"</button>
                </div>
            </form>
        </div>
    }
}
