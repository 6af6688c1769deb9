//! New RFP Page

use leptos::prelude::*;

use crate::components::MultiStepWizard;

#[component]
pub fn NewRfpPage() -> impl IntoView {
    view! {
        <div class="page new-rfp-page">
            <MultiStepWizard />
        </div>
    }
}
