//! UI Components
//!
//! Reusable Leptos components.

mod kanban_board;
mod metric_card;
mod multi_step_wizard;
mod rfp_card;
mod sidebar;
mod status_badge;
mod toast;

pub use kanban_board::KanbanBoard;
pub use metric_card::MetricCard;
pub use multi_step_wizard::MultiStepWizard;
pub use rfp_card::RfpCard;
pub use sidebar::Sidebar;
pub use status_badge::StatusBadge;
pub use toast::ToastHost;
