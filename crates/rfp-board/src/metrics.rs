//! Pipeline Metrics
//!
//! Headline numbers for the dashboard, derived from the live board.

use chrono::{Duration, NaiveDate};

use crate::board::{Board, BucketId};
use crate::rfp_form::parse_date;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PipelineMetrics {
    /// New + In Progress
    pub active: usize,
    pub submitted: usize,
    pub archived: usize,
    /// Active RFPs due between today and today + window, inclusive
    pub upcoming_deadlines: usize,
}

impl PipelineMetrics {
    pub fn from_board(board: &Board, today: NaiveDate, window_days: i64) -> Self {
        let active_buckets = [BucketId::New, BucketId::InProgress];
        let horizon = today + Duration::days(window_days.max(0));

        let upcoming_deadlines = active_buckets
            .iter()
            .flat_map(|id| board.cards(*id))
            .filter_map(|card| parse_date(&card.due_date))
            .filter(|due| *due >= today && *due <= horizon)
            .count();

        Self {
            active: active_buckets.iter().map(|id| board.cards(*id).len()).sum(),
            submitted: board.cards(BucketId::Submitted).len(),
            archived: board.cards(BucketId::Archived).len(),
            upcoming_deadlines,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Bucket, Card, RfpStatus};

    fn card(id: &str, due: &str, status: RfpStatus) -> Card {
        Card {
            id: id.to_string(),
            title: id.to_string(),
            client_name: "Acme".to_string(),
            due_date: due.to_string(),
            status,
        }
    }

    #[test]
    fn test_metrics_from_board() {
        let board = Board::new(vec![
            Bucket::with_cards(
                BucketId::New,
                vec![
                    card("a", "2024-09-01", RfpStatus::New),
                    card("b", "2024-09-08", RfpStatus::New),
                    card("c", "not a date", RfpStatus::New),
                ],
            ),
            Bucket::with_cards(
                BucketId::InProgress,
                vec![
                    card("d", "2024-08-31", RfpStatus::InProgress),
                    card("e", "2024-09-09", RfpStatus::InProgress),
                ],
            ),
            Bucket::with_cards(BucketId::Submitted, vec![card("f", "2024-09-02", RfpStatus::Submitted)]),
            Bucket::new(BucketId::Archived),
        ]);
        let today = NaiveDate::from_ymd_opt(2024, 9, 1).unwrap();
        let m = PipelineMetrics::from_board(&board, today, 7);

        assert_eq!(m.active, 5);
        assert_eq!(m.submitted, 1);
        assert_eq!(m.archived, 0);
        // a (today) and b (today + 7); d is past, e is outside the window
        assert_eq!(m.upcoming_deadlines, 2);
    }
}
