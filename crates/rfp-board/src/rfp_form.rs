//! New RFP Form
//!
//! Fields, step layout and validation rules for the "Create a New RFP"
//! wizard.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::{Card, RfpStatus};
use crate::wizard::{FormValidator, Step, Validation};

const MIN_TEXT_LEN: usize = 2;
const MAX_SUMMARY_LEN: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RfpField {
    RfpTitle,
    ClientName,
    DueDate,
    EstimatedValue,
    Summary,
}

impl RfpField {
    /// Form field name
    pub fn name(self) -> &'static str {
        match self {
            RfpField::RfpTitle => "rfpTitle",
            RfpField::ClientName => "clientName",
            RfpField::DueDate => "dueDate",
            RfpField::EstimatedValue => "estimatedValue",
            RfpField::Summary => "summary",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RfpField::RfpTitle => "RFP Title",
            RfpField::ClientName => "Client Name",
            RfpField::DueDate => "Due Date",
            RfpField::EstimatedValue => "Estimated Value ($)",
            RfpField::Summary => "Summary",
        }
    }
}

pub static RFP_STEPS: [Step<RfpField>; 3] = [
    Step {
        id: "step1",
        name: "Basic Information",
        fields: &[RfpField::RfpTitle, RfpField::ClientName],
    },
    Step {
        id: "step2",
        name: "Dates & Deadlines",
        fields: &[RfpField::DueDate],
    },
    Step {
        id: "step3",
        name: "Value & Summary",
        fields: &[RfpField::EstimatedValue, RfpField::Summary],
    },
];

/// Raw form inputs, exactly as typed
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RfpFormData {
    pub rfp_title: String,
    pub client_name: String,
    pub due_date: String,
    pub estimated_value: String,
    pub summary: String,
}

impl RfpFormData {
    pub fn field(&self, field: RfpField) -> &str {
        match field {
            RfpField::RfpTitle => &self.rfp_title,
            RfpField::ClientName => &self.client_name,
            RfpField::DueDate => &self.due_date,
            RfpField::EstimatedValue => &self.estimated_value,
            RfpField::Summary => &self.summary,
        }
    }

    pub fn set_field(&mut self, field: RfpField, value: String) {
        match field {
            RfpField::RfpTitle => self.rfp_title = value,
            RfpField::ClientName => self.client_name = value,
            RfpField::DueDate => self.due_date = value,
            RfpField::EstimatedValue => self.estimated_value = value,
            RfpField::Summary => self.summary = value,
        }
    }

    /// Estimated value with blank input counting as zero
    pub fn estimated_value(&self) -> Result<f64, FieldError> {
        coerce_number(&self.estimated_value)
    }

    /// Card for the pipeline's "New" column
    pub fn to_card(&self, id: impl Into<String>) -> Card {
        Card {
            id: id.into(),
            title: self.rfp_title.trim().to_string(),
            client_name: self.client_name.trim().to_string(),
            due_date: self.due_date.trim().to_string(),
            status: RfpStatus::New,
        }
    }
}

/// Why a single field failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{label} must be at least {min} characters.")]
    TooShort { label: &'static str, min: usize },
    #[error("Summary cannot exceed {max} characters.")]
    TooLong { max: usize },
    #[error("Please enter a valid date.")]
    InvalidDate,
    #[error("Expected a number.")]
    NotANumber,
    #[error("Estimated value must be a positive number.")]
    Negative,
}

/// Accepts `YYYY-MM-DD` (what a date input yields) or a full RFC 3339 timestamp.
/// Free-form dates such as `Oct 1, 2024` are rejected.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

pub(crate) fn coerce_number(raw: &str) -> Result<f64, FieldError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(0.0);
    }
    match raw.parse::<f64>() {
        Ok(v) if !v.is_nan() => Ok(v),
        _ => Err(FieldError::NotANumber),
    }
}

fn check_field(data: &RfpFormData, field: RfpField) -> Result<(), FieldError> {
    match field {
        RfpField::RfpTitle | RfpField::ClientName => {
            if data.field(field).chars().count() < MIN_TEXT_LEN {
                return Err(FieldError::TooShort {
                    label: field.label(),
                    min: MIN_TEXT_LEN,
                });
            }
        }
        RfpField::DueDate => {
            parse_date(&data.due_date).ok_or(FieldError::InvalidDate)?;
        }
        RfpField::EstimatedValue => {
            if data.estimated_value()? < 0.0 {
                return Err(FieldError::Negative);
            }
        }
        RfpField::Summary => {
            if data.summary.chars().count() > MAX_SUMMARY_LEN {
                return Err(FieldError::TooLong { max: MAX_SUMMARY_LEN });
            }
        }
    }
    Ok(())
}

/// Validation rules for the new-RFP form
#[derive(Debug, Clone, Copy, Default)]
pub struct RfpSchema;

impl FormValidator for RfpSchema {
    type Field = RfpField;
    type Data = RfpFormData;

    fn validate(&self, data: &RfpFormData, fields: &[RfpField]) -> Validation<RfpField> {
        let mut validation = Validation::default();
        for &field in fields {
            if let Err(e) = check_field(data, field) {
                validation.errors.insert(field, e.to_string());
            }
        }
        validation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::Wizard;

    fn valid_data() -> RfpFormData {
        RfpFormData {
            rfp_title: "Cloud Migration".to_string(),
            client_name: "SkyHigh Inc.".to_string(),
            due_date: "2024-10-01".to_string(),
            estimated_value: "50000".to_string(),
            summary: String::new(),
        }
    }

    #[test]
    fn test_empty_title_blocks_first_step() {
        let mut wizard = Wizard::new(&RFP_STEPS);
        let mut data = RfpFormData::default();
        data.client_name = "Acme".to_string();

        assert!(!wizard.next(&RfpSchema, &data));
        assert_eq!(wizard.current(), 0);
        assert_eq!(
            wizard.error_for(RfpField::RfpTitle),
            Some("RFP Title must be at least 2 characters.")
        );

        data.rfp_title = "Q3".to_string();
        assert!(wizard.next(&RfpSchema, &data));
        assert_eq!(wizard.current(), 1);
    }

    #[test]
    fn test_due_date_rules() {
        let schema = RfpSchema;
        let mut data = valid_data();
        for bad in ["", "tomorrow", "2024-13-01", "2024-02-30", "2024/10/01", "Oct 1, 2024"] {
            data.due_date = bad.to_string();
            let v = schema.validate(&data, &[RfpField::DueDate]);
            assert_eq!(
                v.errors.get(&RfpField::DueDate).map(String::as_str),
                Some("Please enter a valid date."),
                "{bad:?} should be rejected"
            );
        }
        data.due_date = "2024-12-15T09:30:00Z".to_string();
        assert!(schema.validate(&data, &[RfpField::DueDate]).is_valid());
    }

    #[test]
    fn test_estimated_value_coercion() {
        let schema = RfpSchema;
        let mut data = valid_data();

        data.estimated_value = "   ".to_string();
        assert!(schema.validate(&data, &[RfpField::EstimatedValue]).is_valid());
        assert_eq!(data.estimated_value(), Ok(0.0));

        data.estimated_value = "-1".to_string();
        let v = schema.validate(&data, &[RfpField::EstimatedValue]);
        assert_eq!(
            v.errors.get(&RfpField::EstimatedValue).map(String::as_str),
            Some("Estimated value must be a positive number.")
        );

        data.estimated_value = "lots".to_string();
        assert_eq!(data.estimated_value(), Err(FieldError::NotANumber));
    }

    #[test]
    fn test_summary_limit_counts_chars() {
        let schema = RfpSchema;
        let mut data = valid_data();
        data.summary = "é".repeat(500);
        assert!(schema.validate(&data, &[RfpField::Summary]).is_valid());
        data.summary.push('x');
        assert!(!schema.validate(&data, &[RfpField::Summary]).is_valid());
    }

    #[test]
    fn test_full_walkthrough_submits_once() {
        let mut wizard = Wizard::new(&RFP_STEPS);
        let data = valid_data();
        assert!(wizard.next(&RfpSchema, &data));
        assert!(wizard.next(&RfpSchema, &data));
        assert_eq!(wizard.step().name, "Value & Summary");

        let mut cards = Vec::new();
        wizard
            .submit(&RfpSchema, &data, |d| cards.push(d.to_card("rfp-6")))
            .unwrap();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].status, RfpStatus::New);
        assert_eq!(cards[0].client_name, "SkyHigh Inc.");
    }
}
