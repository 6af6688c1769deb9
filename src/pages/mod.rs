//! Pages
//!
//! One component per top-level view.

mod clients;
mod dashboard;
mod detail;
mod new_rfp;
mod pipeline;

pub use clients::ClientsPage;
pub use dashboard::DashboardPage;
pub use detail::DetailPage;
pub use new_rfp::NewRfpPage;
pub use pipeline::PipelinePage;
