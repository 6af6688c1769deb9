//! RFP Board
//!
//! Browser-free state for the RFP tracking dashboard:
//! - board: kanban buckets and drag-and-drop moves
//! - wizard: generic multi-step form navigation
//! - rfp_form: the new-RFP form and its validation rules
//! - records: per-RFP details, documents and activity history
//! - status, metrics, clients: small projections used by the pages
//! - seed: embedded initial data and settings

pub mod board;
pub mod clients;
pub mod metrics;
pub mod records;
pub mod rfp_form;
pub mod seed;
pub mod status;
pub mod wizard;

pub use board::{Board, BoardAction, BoardState, Bucket, BucketId, Card, DragSession, RfpStatus};
pub use clients::{filter_clients, Client, ClientDirectory, ClientError, NewClient};
pub use metrics::PipelineMetrics;
pub use records::{format_value, status_choices, Activity, DetailEdit, Document, RecordBook, RecordError, RfpRecord, DETAIL_STATUSES};
pub use rfp_form::{FieldError, RfpField, RfpFormData, RfpSchema, RFP_STEPS};
pub use seed::{DashboardSeed, SeedError, Settings};
pub use status::BadgeVariant;
pub use wizard::{FormValidator, Step, Validation, Wizard, WizardError};
