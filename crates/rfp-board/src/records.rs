//! RFP Records
//!
//! What the detail page shows beyond the kanban card: outcome status, value,
//! owner, description, internal notes, attached documents and the activity
//! history. Records are keyed by card id and live beside the board, so a
//! Won or Lost outcome never disturbs the bucket a card sits in.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::{Card, RfpStatus};
use crate::rfp_form::{coerce_number, FieldError, RfpFormData};

/// Choices offered by the detail page's status select
pub const DETAIL_STATUSES: [RfpStatus; 5] = [
    RfpStatus::Draft,
    RfpStatus::InProgress,
    RfpStatus::Submitted,
    RfpStatus::Won,
    RfpStatus::Lost,
];

/// A file attached to an RFP
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: u32,
    pub name: String,
    pub size: String,
    /// Calendar date, e.g. "2024-10-15"
    pub uploaded: String,
}

/// One line of the activity history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub id: u32,
    pub user: String,
    /// Sentence fragment following the user's name, e.g. "added a note."
    pub action: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RfpRecord {
    /// Status chosen on the detail page. `None` follows the card's bucket.
    #[serde(default)]
    pub status: Option<RfpStatus>,
    #[serde(default)]
    pub value: f64,
    #[serde(default)]
    pub submitted_by: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub documents: Vec<Document>,
    #[serde(default)]
    pub activity: Vec<Activity>,
}

impl RfpRecord {
    /// Status to display for `card`
    pub fn status_for(&self, card: &Card) -> RfpStatus {
        self.status.unwrap_or(card.status)
    }

    fn log(&mut self, user: &str, action: impl Into<String>, timestamp: &str) {
        let id = self
            .activity
            .iter()
            .map(|a| a.id)
            .max()
            .unwrap_or(0)
            .saturating_add(1);
        self.activity.push(Activity {
            id,
            user: user.to_string(),
            action: action.into(),
            timestamp: timestamp.to_string(),
        });
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("Unknown status '{0}'.")]
    UnknownStatus(String),

    #[error("{0}")]
    Value(#[from] FieldError),

    #[error("No RFP with id '{0}'.")]
    UnknownRfp(String),
}

/// Editable fields of the detail form, exactly as typed
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DetailEdit {
    /// Status label, e.g. "In Progress"
    pub status: String,
    pub value: String,
    pub submitted_by: String,
    pub description: String,
    pub notes: String,
}

impl DetailEdit {
    /// Form contents for a card, prefilled from its record if it has one
    pub fn for_card(card: &Card, record: Option<&RfpRecord>) -> Self {
        match record {
            Some(r) => Self {
                status: r.status_for(card).label().to_string(),
                value: r.value.to_string(),
                submitted_by: r.submitted_by.clone(),
                description: r.description.clone(),
                notes: r.notes.clone(),
            },
            None => Self {
                status: card.status.label().to_string(),
                value: "0".to_string(),
                ..Self::default()
            },
        }
    }
}

/// Statuses the detail form may choose for `card`: the fixed choices plus
/// the status of the bucket it sits in
pub fn status_choices(card: &Card) -> Vec<RfpStatus> {
    let mut choices = DETAIL_STATUSES.to_vec();
    if !choices.contains(&card.status) {
        choices.insert(0, card.status);
    }
    choices
}

fn parse_status(card: &Card, label: &str) -> Option<RfpStatus> {
    let label = label.trim();
    status_choices(card).into_iter().find(|s| s.label() == label)
}

/// All records, keyed by card id
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordBook {
    pub records: BTreeMap<String, RfpRecord>,
}

impl RecordBook {
    pub fn get(&self, card_id: &str) -> Option<&RfpRecord> {
        self.records.get(card_id)
    }

    /// Start the record of a card created through the new-RFP wizard
    pub fn create(&mut self, card_id: &str, data: &RfpFormData, user: &str, timestamp: &str) {
        let mut record = RfpRecord {
            value: data.estimated_value().unwrap_or(0.0),
            submitted_by: user.to_string(),
            description: data.summary.trim().to_string(),
            ..RfpRecord::default()
        };
        record.log(user, "created the RFP.", timestamp);
        self.records.insert(card_id.to_string(), record);
    }

    /// Apply the detail form to `card`'s record and log what changed.
    ///
    /// Nothing is written unless the whole form is valid. Choosing the
    /// status of the card's own bucket clears the override.
    pub fn save(&mut self, card: &Card, edit: &DetailEdit, user: &str, timestamp: &str) -> Result<(), RecordError> {
        let status = parse_status(card, &edit.status).ok_or_else(|| RecordError::UnknownStatus(edit.status.clone()))?;
        let value = coerce_number(&edit.value)?;
        if value < 0.0 {
            return Err(FieldError::Negative.into());
        }

        let record = self.records.entry(card.id.clone()).or_default();
        let before = record.clone();
        record.status = (status != card.status).then_some(status);
        record.value = value;
        record.submitted_by = edit.submitted_by.trim().to_string();
        record.description = edit.description.trim().to_string();
        record.notes = edit.notes.trim().to_string();

        if before.status_for(card) != status {
            record.log(user, format!("updated status to '{}'.", status), timestamp);
        }
        if before.notes != record.notes && !record.notes.is_empty() {
            record.log(user, "added a note.", timestamp);
        }
        if before.value != record.value
            || before.submitted_by != record.submitted_by
            || before.description != record.description
        {
            record.log(user, "updated the RFP details.", timestamp);
        }
        log::debug!("[RECORDS] saved {} status={}", card.id, status);
        Ok(())
    }

    /// Remove an attached document. Returns whether anything was removed.
    pub fn remove_document(&mut self, card_id: &str, doc_id: u32, user: &str, timestamp: &str) -> bool {
        let Some(record) = self.records.get_mut(card_id) else {
            return false;
        };
        let Some(idx) = record.documents.iter().position(|d| d.id == doc_id) else {
            return false;
        };
        let doc = record.documents.remove(idx);
        record.log(user, format!("removed {}.", doc.name), timestamp);
        log::debug!("[RECORDS] {} removed document {}", card_id, doc.name);
        true
    }
}

/// Whole dollars with thousands separators, e.g. `$250,000`
pub fn format_value(value: f64) -> String {
    let whole = value.round().abs() as u64;
    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value.round() < 0.0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}
