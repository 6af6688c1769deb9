//! Multi-Step Wizard Component
//!
//! "Create a New RFP" form split over three steps. Navigation and validation
//! live in `rfp_board::Wizard`; this component only renders and forwards
//! button clicks.

use leptos::prelude::*;
use rfp_board::{RfpField, RfpFormData, RfpSchema, Wizard, WizardError, RFP_STEPS};

use crate::context::{use_app_context, Page};
use crate::store::{store_add_rfp, use_app_store};

/// One labelled input bound to a form field
#[component]
fn FieldInput(
    field: RfpField,
    #[prop(default = "text")] input_type: &'static str,
    placeholder: &'static str,
    #[prop(optional)] multiline: bool,
    data: ReadSignal<RfpFormData>,
    set_data: WriteSignal<RfpFormData>,
    wizard: ReadSignal<Wizard<RfpField>>,
) -> impl IntoView {
    let value = move || data.with(|d| d.field(field).to_string());
    let on_input = move |ev: web_sys::Event| {
        let text = event_target_value(&ev);
        set_data.update(|d| d.set_field(field, text));
    };
    let error = move || wizard.with(|w| w.error_for(field).map(str::to_string));

    view! {
        <div class="form-item">
            <label for=field.name()>{field.label()}</label>
            {if multiline {
                view! {
                    <textarea
                        id=field.name()
                        placeholder=placeholder
                        prop:value=value
                        on:input=on_input
                    />
                }.into_any()
            } else {
                view! {
                    <input
                        id=field.name()
                        type=input_type
                        placeholder=placeholder
                        prop:value=value
                        on:input=on_input
                    />
                }.into_any()
            }}
            {move || error().map(|msg| view! { <p class="form-message">{msg}</p> })}
        </div>
    }
}

#[component]
pub fn MultiStepWizard() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (wizard, set_wizard) = signal(Wizard::new(&RFP_STEPS));
    let (data, set_data) = signal(RfpFormData::default());

    let step_count = RFP_STEPS.len();
    let current = move || wizard.with(|w| w.current());

    let on_next = move |_: web_sys::MouseEvent| {
        set_wizard.update(|w| {
            data.with_untracked(|d| w.next(&RfpSchema, d));
        });
    };
    let on_prev = move |_: web_sys::MouseEvent| set_wizard.update(|w| w.previous());

    let on_submit = move |_: web_sys::MouseEvent| {
        let form = data.get_untracked();
        let mut w = wizard.get_untracked();
        let mut created = None;
        let result = w.submit(&RfpSchema, &form, |d| {
            created = Some(store_add_rfp(&store, d));
        });

        match result {
            Ok(()) => {
                if let Ok(js) = serde_wasm_bindgen::to_value(&form) {
                    web_sys::console::log_2(&"[WIZARD] RFP data submitted:".into(), &js);
                }
                if let Some(card) = created {
                    ctx.show_toast(
                        "RFP Created Successfully!",
                        format!("The RFP \"{}\" for {} has been saved.", card.title, card.client_name),
                    );
                }
                w.reset();
                set_wizard.set(w);
                set_data.set(RfpFormData::default());
                ctx.navigate(Page::Pipeline);
            }
            Err(WizardError::Invalid(fields)) => {
                log::debug!("[WIZARD] submit blocked: {:?}", fields);
                set_wizard.set(w);
            }
            Err(WizardError::NotAtLastStep) => {
                log::warn!("[WIZARD] submit clicked before the last step");
            }
        }
    };

    view! {
        <div class="wizard-card">
            <div class="wizard-header">
                <h2>"Create a New RFP"</h2>
                <p class="wizard-description">
                    {move || wizard.with(|w| format!("Step {} of {} - {}", w.current() + 1, step_count, w.step().name))}
                </p>
                <div class="wizard-progress">
                    {RFP_STEPS.iter().enumerate().map(|(i, step)| view! {
                        <span class=move || if i <= current() { "wizard-dot done" } else { "wizard-dot" } title=step.name></span>
                    }).collect_view()}
                </div>
            </div>

            <form class="wizard-body" on:submit=move |ev: web_sys::SubmitEvent| ev.prevent_default()>
                {move || match current() {
                    0 => view! {
                        <FieldInput field=RfpField::RfpTitle placeholder="e.g., Q3 Enterprise Software Upgrade" data=data set_data=set_data wizard=wizard />
                        <FieldInput field=RfpField::ClientName placeholder="e.g., Globex Corporation" data=data set_data=set_data wizard=wizard />
                    }.into_any(),
                    1 => view! {
                        <FieldInput field=RfpField::DueDate input_type="date" placeholder="" data=data set_data=set_data wizard=wizard />
                    }.into_any(),
                    _ => view! {
                        <FieldInput field=RfpField::EstimatedValue input_type="number" placeholder="e.g., 50000" data=data set_data=set_data wizard=wizard />
                        <FieldInput field=RfpField::Summary multiline=true placeholder="Provide a brief summary of the RFP requirements..." data=data set_data=set_data wizard=wizard />
                    }.into_any(),
                }}
            </form>

            <div class="wizard-footer">
                <button
                    type="button"
                    class="btn btn-outline"
                    disabled=move || wizard.with(|w| w.is_first())
                    on:click=on_prev
                >
                    "← Previous"
                </button>
                {move || if wizard.with(|w| w.is_last()) {
                    view! { <button type="button" class="btn" on:click=on_submit>"Submit RFP"</button> }.into_any()
                } else {
                    view! { <button type="button" class="btn" on:click=on_next>"Next →"</button> }.into_any()
                }}
            </div>
        </div>
    }
}
