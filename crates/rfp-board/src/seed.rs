//! Seed Data & Settings
//!
//! The initial board, client list and dashboard settings ship with the app
//! as an embedded JSON document.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::{Board, BucketId};
use crate::clients::Client;
use crate::records::RecordBook;

const SEED_JSON: &str = include_str!("../seed/dashboard.json");

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to parse seed data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Seed board is missing bucket '{}'", .0.as_str())]
    MissingBucket(BucketId),

    #[error("Seed board has a card whose status does not match its bucket, or a duplicate id")]
    Inconsistent,

    #[error("Seed record '{0}' does not belong to any card")]
    OrphanRecord(String),
}

fn default_upcoming_deadline_days() -> i64 {
    7
}

fn default_toast_duration_ms() -> u32 {
    4000
}

/// Tunables read from the `settings` block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Window for the "Upcoming Deadlines" metric
    #[serde(default = "default_upcoming_deadline_days")]
    pub upcoming_deadline_days: i64,
    /// How long a toast stays on screen
    #[serde(default = "default_toast_duration_ms")]
    pub toast_duration_ms: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            upcoming_deadline_days: default_upcoming_deadline_days(),
            toast_duration_ms: default_toast_duration_ms(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSeed {
    #[serde(default)]
    pub settings: Settings,
    pub board: Board,
    #[serde(default)]
    pub records: RecordBook,
    #[serde(default)]
    pub clients: Vec<Client>,
}

impl DashboardSeed {
    /// Parse the embedded seed document
    pub fn load() -> Result<Self, SeedError> {
        Self::from_json(SEED_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self, SeedError> {
        let seed: DashboardSeed = serde_json::from_str(json)?;
        if let Some(missing) = BucketId::ALL
            .into_iter()
            .find(|id| seed.board.bucket(*id).is_none())
        {
            return Err(SeedError::MissingBucket(missing));
        }
        if !seed.board.is_consistent() {
            return Err(SeedError::Inconsistent);
        }
        if let Some(orphan) = seed
            .records
            .records
            .keys()
            .find(|id| seed.board.locate(id).is_none())
        {
            return Err(SeedError::OrphanRecord(orphan.clone()));
        }
        log::info!(
            "[SEED] loaded {} cards, {} records, {} clients",
            seed.board.card_count(),
            seed.records.records.len(),
            seed.clients.len()
        );
        Ok(seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::RfpStatus;

    #[test]
    fn test_embedded_seed_loads() {
        let seed = DashboardSeed::load().unwrap();
        assert_eq!(seed.board.buckets.len(), 4);
        assert_eq!(seed.board.card_count(), 5);
        assert_eq!(seed.clients.len(), 5);
        assert_eq!(seed.settings, Settings::default());

        let ids: Vec<&str> = seed.board.cards(BucketId::New).iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["rfp-1", "rfp-2"]);
    }

    #[test]
    fn test_embedded_records() {
        let seed = DashboardSeed::load().unwrap();
        let alpha = seed.records.get("rfp-3").unwrap();
        assert_eq!(alpha.documents.len(), 3);
        assert_eq!(alpha.activity.len(), 4);
        assert_eq!(alpha.submitted_by, "Jane Doe");

        let (_, won) = seed.board.locate("rfp-4").unwrap();
        assert_eq!(seed.records.get("rfp-4").unwrap().status_for(won), RfpStatus::Won);
        let (_, lost) = seed.board.locate("rfp-5").unwrap();
        assert_eq!(seed.records.get("rfp-5").unwrap().status_for(lost), RfpStatus::Lost);
        assert!(seed.records.get("rfp-2").is_none());
    }

    #[test]
    fn test_orphan_record_rejected() {
        let json = r#"{
            "board": [
                { "id": "new", "title": "New", "cards": [] },
                { "id": "inProgress", "title": "In Progress", "cards": [] },
                { "id": "submitted", "title": "Submitted", "cards": [] },
                { "id": "archived", "title": "Archived", "cards": [] }
            ],
            "records": { "rfp-9": { "value": 10 } }
        }"#;
        let err = DashboardSeed::from_json(json).unwrap_err();
        assert!(matches!(err, SeedError::OrphanRecord(ref id) if id == "rfp-9"));
    }

    #[test]
    fn test_settings_default_when_absent() {
        let json = r#"{
            "board": [
                { "id": "new", "title": "New", "cards": [] },
                { "id": "inProgress", "title": "In Progress", "cards": [] },
                { "id": "submitted", "title": "Submitted", "cards": [] },
                { "id": "archived", "title": "Archived", "cards": [] }
            ]
        }"#;
        let seed = DashboardSeed::from_json(json).unwrap();
        assert_eq!(seed.settings.upcoming_deadline_days, 7);
        assert!(seed.clients.is_empty());
    }

    #[test]
    fn test_missing_bucket_rejected() {
        let json = r#"{ "board": [ { "id": "new", "title": "New", "cards": [] } ] }"#;
        let err = DashboardSeed::from_json(json).unwrap_err();
        assert!(matches!(err, SeedError::MissingBucket(BucketId::InProgress)));
    }

    #[test]
    fn test_mismatched_status_rejected() {
        let json = r#"{
            "board": [
                { "id": "new", "title": "New", "cards": [
                    { "id": "rfp-1", "title": "T", "clientName": "C", "dueDate": "2024-01-01", "status": "Won" }
                ] },
                { "id": "inProgress", "title": "In Progress", "cards": [] },
                { "id": "submitted", "title": "Submitted", "cards": [] },
                { "id": "archived", "title": "Archived", "cards": [] }
            ]
        }"#;
        assert!(matches!(DashboardSeed::from_json(json), Err(SeedError::Inconsistent)));
    }

    #[test]
    fn test_bad_json_is_parse_error() {
        assert!(matches!(DashboardSeed::from_json("{"), Err(SeedError::Parse(_))));
    }
}
