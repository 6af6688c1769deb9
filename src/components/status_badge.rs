//! Status Badge Component

use leptos::prelude::*;
use rfp_board::{BadgeVariant, RfpStatus};

/// Pill showing an RFP status in its variant colour
#[component]
pub fn StatusBadge(status: RfpStatus) -> impl IntoView {
    view! {
        <span class=BadgeVariant::for_status(status).css_class()>{status.label()}</span>
    }
}
