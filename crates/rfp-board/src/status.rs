//! Status Badges
//!
//! Maps an RFP status to the badge style it is rendered with.

use crate::board::RfpStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeVariant {
    Default,
    Secondary,
    Destructive,
    Outline,
    Success,
}

impl BadgeVariant {
    pub fn for_status(status: RfpStatus) -> Self {
        match status {
            RfpStatus::Lost | RfpStatus::Archived => BadgeVariant::Destructive,
            RfpStatus::InProgress => BadgeVariant::Secondary,
            RfpStatus::Submitted => BadgeVariant::Default,
            RfpStatus::Won => BadgeVariant::Success,
            RfpStatus::Draft | RfpStatus::New => BadgeVariant::Outline,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            BadgeVariant::Default => "badge badge-default",
            BadgeVariant::Secondary => "badge badge-secondary",
            BadgeVariant::Destructive => "badge badge-destructive",
            BadgeVariant::Outline => "badge badge-outline",
            BadgeVariant::Success => "badge badge-success",
        }
    }
}
