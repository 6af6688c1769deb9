//! Kanban Board State
//!
//! Fixed set of pipeline buckets, each holding an ordered list of RFP cards,
//! plus the transient drag session that drives moves between them.
//!
//! Every transition is a pure function from one `BoardState` to the next.
//! Nothing here can fail: an unknown bucket, a missing card or a drop
//! without a drag session all resolve to "leave the board alone".

use serde::{Deserialize, Serialize};

// ========================
// Status & Bucket Ids
// ========================

/// Lifecycle status of an RFP
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RfpStatus {
    Draft,
    New,
    #[serde(rename = "In Progress")]
    InProgress,
    Submitted,
    Won,
    Lost,
    Archived,
}

impl RfpStatus {
    /// Display text, identical to the title of the matching bucket
    pub fn label(self) -> &'static str {
        match self {
            RfpStatus::Draft => "Draft",
            RfpStatus::New => "New",
            RfpStatus::InProgress => "In Progress",
            RfpStatus::Submitted => "Submitted",
            RfpStatus::Won => "Won",
            RfpStatus::Lost => "Lost",
            RfpStatus::Archived => "Archived",
        }
    }
}

impl std::fmt::Display for RfpStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Identifier of a board column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BucketId {
    New,
    InProgress,
    Submitted,
    Archived,
}

impl BucketId {
    /// All buckets in display order
    pub const ALL: [BucketId; 4] = [
        BucketId::New,
        BucketId::InProgress,
        BucketId::Submitted,
        BucketId::Archived,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BucketId::New => "new",
            BucketId::InProgress => "inProgress",
            BucketId::Submitted => "submitted",
            BucketId::Archived => "archived",
        }
    }

    /// Parse a wire id such as `"inProgress"`. Unknown ids yield `None`.
    pub fn parse(raw: &str) -> Option<BucketId> {
        BucketId::ALL.into_iter().find(|id| id.as_str() == raw)
    }

    /// Status every card in this bucket carries
    pub fn status(self) -> RfpStatus {
        match self {
            BucketId::New => RfpStatus::New,
            BucketId::InProgress => RfpStatus::InProgress,
            BucketId::Submitted => RfpStatus::Submitted,
            BucketId::Archived => RfpStatus::Archived,
        }
    }

    pub fn title(self) -> &'static str {
        self.status().label()
    }
}

// ========================
// Cards, Buckets, Board
// ========================

/// A single tracked RFP
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: String,
    pub title: String,
    pub client_name: String,
    /// Calendar date as entered, e.g. "2024-09-15"
    pub due_date: String,
    pub status: RfpStatus,
}

/// One pipeline column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bucket {
    pub id: BucketId,
    pub title: String,
    pub cards: Vec<Card>,
}

impl Bucket {
    pub fn new(id: BucketId) -> Self {
        Self {
            id,
            title: id.title().to_string(),
            cards: Vec::new(),
        }
    }

    pub fn with_cards(id: BucketId, cards: Vec<Card>) -> Self {
        Self {
            cards,
            ..Self::new(id)
        }
    }
}

/// Buckets in display order
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    pub buckets: Vec<Bucket>,
}

impl Board {
    pub fn new(buckets: Vec<Bucket>) -> Self {
        Self { buckets }
    }

    /// All four buckets, no cards
    pub fn empty() -> Self {
        Self::new(BucketId::ALL.into_iter().map(Bucket::new).collect())
    }

    pub fn bucket(&self, id: BucketId) -> Option<&Bucket> {
        self.buckets.iter().find(|b| b.id == id)
    }

    /// Cards of a bucket, empty for a bucket the board does not have
    pub fn cards(&self, id: BucketId) -> &[Card] {
        self.bucket(id).map(|b| b.cards.as_slice()).unwrap_or(&[])
    }

    pub fn card_count(&self) -> usize {
        self.buckets.iter().map(|b| b.cards.len()).sum()
    }

    /// Find the bucket currently holding a card
    pub fn locate(&self, card_id: &str) -> Option<(BucketId, &Card)> {
        self.buckets.iter().find_map(|b| {
            b.cards
                .iter()
                .find(|c| c.id == card_id)
                .map(|c| (b.id, c))
        })
    }

    pub fn all_cards(&self) -> impl Iterator<Item = &Card> {
        self.buckets.iter().flat_map(|b| b.cards.iter())
    }

    /// Every card's status matches its bucket title, ids are unique
    /// and no bucket appears twice.
    pub fn is_consistent(&self) -> bool {
        let mut seen_buckets = std::collections::HashSet::new();
        let mut seen_cards = std::collections::HashSet::new();
        for bucket in &self.buckets {
            if !seen_buckets.insert(bucket.id) || bucket.title != bucket.id.title() {
                return false;
            }
            for card in &bucket.cards {
                if card.status.label() != bucket.title || !seen_cards.insert(card.id.as_str()) {
                    return false;
                }
            }
        }
        true
    }

    /// Move a card between buckets, returning the updated board.
    ///
    /// The card is looked up by id in `source`, removed, restamped with the
    /// target's status and appended to the end of `target`. A self-move,
    /// an unknown bucket or a card that is no longer in `source` returns
    /// an unchanged copy.
    pub fn move_card(&self, card_id: &str, source: BucketId, target: BucketId) -> Board {
        if source == target {
            return self.clone();
        }
        let src = self.buckets.iter().position(|b| b.id == source);
        let tgt = self.buckets.iter().position(|b| b.id == target);
        let (Some(src), Some(tgt)) = (src, tgt) else {
            return self.clone();
        };
        let Some(idx) = self.buckets[src].cards.iter().position(|c| c.id == card_id) else {
            return self.clone();
        };

        let mut next = self.clone();
        let mut card = next.buckets[src].cards.remove(idx);
        card.status = target.status();
        next.buckets[tgt].cards.push(card);
        next
    }

    /// Next unused `rfp-N` identifier
    pub fn next_card_id(&self) -> String {
        let max = self
            .all_cards()
            .filter_map(|c| c.id.strip_prefix("rfp-")?.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        format!("rfp-{}", max.saturating_add(1))
    }

    /// Append a freshly created card to a bucket, stamping its status.
    /// A duplicate id or a missing bucket leaves the board unchanged.
    pub fn insert_card(&self, target: BucketId, mut card: Card) -> Board {
        if self.locate(&card.id).is_some() {
            return self.clone();
        }
        let mut next = self.clone();
        if let Some(bucket) = next.buckets.iter_mut().find(|b| b.id == target) {
            card.status = target.status();
            bucket.cards.push(card);
        }
        next
    }
}

// ========================
// Drag Session & Reducer
// ========================

/// The card being dragged and where it came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragSession {
    pub card_id: String,
    pub source: BucketId,
}

/// Gesture-level inputs to the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardAction {
    BeginDrag { card_id: String, source: BucketId },
    Drop { target: BucketId },
    /// Drop onto a raw bucket id coming from the DOM
    DropOn { target: String },
    CancelDrag,
}

/// Board plus the in-flight drag, owned by the kanban view
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BoardState {
    pub board: Board,
    #[serde(skip)]
    pub drag: Option<DragSession>,
}

impl BoardState {
    pub fn new(board: Board) -> Self {
        Self { board, drag: None }
    }

    /// Apply one action and return the resulting state
    pub fn reduce(&self, action: BoardAction) -> BoardState {
        match action {
            BoardAction::BeginDrag { card_id, source } => {
                log::debug!("[BOARD] drag start: card={} source={}", card_id, source.as_str());
                BoardState {
                    board: self.board.clone(),
                    drag: Some(DragSession { card_id, source }),
                }
            }
            BoardAction::Drop { target } => {
                let board = match &self.drag {
                    Some(session) if session.source != target => {
                        log::debug!(
                            "[BOARD] drop: card={} {} -> {}",
                            session.card_id,
                            session.source.as_str(),
                            target.as_str()
                        );
                        self.board.move_card(&session.card_id, session.source, target)
                    }
                    Some(_) => {
                        log::debug!("[BOARD] drop on source bucket ignored");
                        self.board.clone()
                    }
                    None => {
                        log::debug!("[BOARD] drop without drag session ignored");
                        self.board.clone()
                    }
                };
                BoardState::new(board)
            }
            BoardAction::DropOn { target } => match BucketId::parse(&target) {
                Some(id) => self.reduce(BoardAction::Drop { target: id }),
                None => {
                    log::debug!("[BOARD] drop on unknown bucket {:?} ignored", target);
                    BoardState::new(self.board.clone())
                }
            },
            BoardAction::CancelDrag => BoardState::new(self.board.clone()),
        }
    }

    pub fn begin_drag(&mut self, card_id: impl Into<String>, source: BucketId) {
        *self = self.reduce(BoardAction::BeginDrag {
            card_id: card_id.into(),
            source,
        });
    }

    pub fn drop(&mut self, target: BucketId) {
        *self = self.reduce(BoardAction::Drop { target });
    }

    pub fn drop_on(&mut self, target: &str) {
        *self = self.reduce(BoardAction::DropOn {
            target: target.to_string(),
        });
    }

    pub fn cancel_drag(&mut self) {
        if self.drag.is_some() {
            log::debug!("[BOARD] drag cancelled");
        }
        *self = self.reduce(BoardAction::CancelDrag);
    }

    /// True while `card_id` is the card being dragged
    pub fn is_in_flight(&self, card_id: &str) -> bool {
        self.drag.as_ref().is_some_and(|d| d.card_id == card_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: &str, status: RfpStatus) -> Card {
        Card {
            id: id.to_string(),
            title: format!("Title {}", id),
            client_name: "Client".to_string(),
            due_date: "2024-09-15".to_string(),
            status,
        }
    }

    fn sample_state() -> BoardState {
        BoardState::new(Board::new(vec![
            Bucket::with_cards(
                BucketId::New,
                vec![card("rfp-1", RfpStatus::New), card("rfp-2", RfpStatus::New)],
            ),
            Bucket::with_cards(BucketId::InProgress, vec![card("rfp-3", RfpStatus::InProgress)]),
            Bucket::new(BucketId::Submitted),
            Bucket::new(BucketId::Archived),
        ]))
    }

    fn ids(board: &Board, bucket: BucketId) -> Vec<&str> {
        board.cards(bucket).iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_bucket_id_parse() {
        assert_eq!(BucketId::parse("inProgress"), Some(BucketId::InProgress));
        assert_eq!(BucketId::parse("archived"), Some(BucketId::Archived));
        assert_eq!(BucketId::parse("InProgress"), None);
        assert_eq!(BucketId::parse(""), None);
    }

    #[test]
    fn test_drop_moves_card_to_tail() {
        let mut state = sample_state();
        state.begin_drag("rfp-1", BucketId::New);
        state.drop(BucketId::InProgress);

        assert_eq!(ids(&state.board, BucketId::New), vec!["rfp-2"]);
        assert_eq!(ids(&state.board, BucketId::InProgress), vec!["rfp-3", "rfp-1"]);
        let (_, moved) = state.board.locate("rfp-1").unwrap();
        assert_eq!(moved.status, RfpStatus::InProgress);
        assert!(state.drag.is_none());
        assert!(state.board.is_consistent());
    }

    #[test]
    fn test_self_drop_is_noop_and_clears_session() {
        let mut state = sample_state();
        let before = state.board.clone();
        state.begin_drag("rfp-2", BucketId::New);
        state.drop(BucketId::New);

        assert_eq!(state.board, before);
        assert!(state.drag.is_none());
    }

    #[test]
    fn test_drop_without_session_is_noop() {
        let mut state = sample_state();
        let before = state.board.clone();
        state.drop(BucketId::Archived);
        assert_eq!(state.board, before);
    }

    #[test]
    fn test_drop_on_unknown_bucket_is_noop() {
        let mut state = sample_state();
        let before = state.board.clone();
        state.begin_drag("rfp-1", BucketId::New);
        state.drop_on("won");

        assert_eq!(state.board, before);
        assert!(state.drag.is_none());
    }

    #[test]
    fn test_drop_on_wire_id_moves() {
        let mut state = sample_state();
        state.begin_drag("rfp-2", BucketId::New);
        state.drop_on(BucketId::Submitted.as_str());

        assert_eq!(ids(&state.board, BucketId::Submitted), vec!["rfp-2"]);
        assert_eq!(state.board.locate("rfp-2").unwrap().1.status, RfpStatus::Submitted);
        assert!(state.drag.is_none());
    }

    #[test]
    fn test_drop_onto_bucket_missing_from_board() {
        let mut state = BoardState::new(Board::new(vec![Bucket::with_cards(
            BucketId::New,
            vec![card("rfp-1", RfpStatus::New)],
        )]));
        let before = state.board.clone();
        state.begin_drag("rfp-1", BucketId::New);
        state.drop(BucketId::Submitted);
        assert_eq!(state.board, before);
    }

    #[test]
    fn test_stale_card_reference_does_not_duplicate() {
        let mut state = sample_state();
        state.begin_drag("rfp-1", BucketId::New);
        state.drop(BucketId::Submitted);
        // Replay the same gesture with the old source
        state.begin_drag("rfp-1", BucketId::New);
        state.drop(BucketId::Archived);

        assert_eq!(ids(&state.board, BucketId::Submitted), vec!["rfp-1"]);
        assert!(ids(&state.board, BucketId::Archived).is_empty());
        assert_eq!(state.board.card_count(), 3);
    }

    #[test]
    fn test_cancel_keeps_board() {
        let mut state = sample_state();
        let before = state.board.clone();
        state.begin_drag("rfp-3", BucketId::InProgress);
        assert!(state.is_in_flight("rfp-3"));
        assert!(!state.is_in_flight("rfp-1"));

        state.cancel_drag();
        assert_eq!(state.board, before);
        assert!(state.drag.is_none());
        assert!(!state.is_in_flight("rfp-3"));
    }

    #[test]
    fn test_begin_drag_replaces_previous_session() {
        let mut state = sample_state();
        state.begin_drag("rfp-1", BucketId::New);
        state.begin_drag("rfp-3", BucketId::InProgress);
        state.drop(BucketId::Submitted);

        assert_eq!(ids(&state.board, BucketId::Submitted), vec!["rfp-3"]);
        assert_eq!(ids(&state.board, BucketId::New), vec!["rfp-1", "rfp-2"]);
    }

    #[test]
    fn test_reduce_leaves_input_untouched() {
        let state = sample_state();
        let dragging = state.reduce(BoardAction::BeginDrag {
            card_id: "rfp-2".to_string(),
            source: BucketId::New,
        });
        let moved = dragging.reduce(BoardAction::Drop {
            target: BucketId::Archived,
        });

        assert_eq!(state, sample_state());
        assert!(dragging.drag.is_some());
        assert_eq!(ids(&moved.board, BucketId::Archived), vec!["rfp-2"]);
    }

    #[test]
    fn test_insert_card_stamps_status() {
        let board = sample_state().board;
        let next = board.insert_card(BucketId::New, card("rfp-9", RfpStatus::Draft));
        assert_eq!(ids(&next, BucketId::New), vec!["rfp-1", "rfp-2", "rfp-9"]);
        assert_eq!(next.locate("rfp-9").unwrap().1.status, RfpStatus::New);

        let dup = next.insert_card(BucketId::Archived, card("rfp-9", RfpStatus::New));
        assert_eq!(dup, next);
    }

    #[test]
    fn test_next_card_id() {
        let board = sample_state().board;
        assert_eq!(board.next_card_id(), "rfp-4");
        assert_eq!(Board::empty().next_card_id(), "rfp-1");
    }

    #[test]
    fn test_next_card_id_past_u32() {
        let board = Board::new(vec![Bucket::with_cards(
            BucketId::New,
            vec![card("rfp-4294967295", RfpStatus::New)],
        )]);
        assert_eq!(board.next_card_id(), "rfp-4294967296");

        let board = Board::new(vec![Bucket::with_cards(
            BucketId::New,
            vec![card("rfp-18446744073709551615", RfpStatus::New)],
        )]);
        assert_eq!(board.next_card_id(), "rfp-18446744073709551615");
    }

    #[test]
    fn test_is_consistent_detects_mismatch() {
        let mut board = sample_state().board;
        assert!(board.is_consistent());
        board.buckets[0].cards[0].status = RfpStatus::Won;
        assert!(!board.is_consistent());
    }

    #[test]
    fn test_status_serializes_as_label() {
        let json = serde_json::to_string(&RfpStatus::InProgress).unwrap();
        assert_eq!(json, "\"In Progress\"");
        let id: BucketId = serde_json::from_str("\"inProgress\"").unwrap();
        assert_eq!(id, BucketId::InProgress);
    }
}
