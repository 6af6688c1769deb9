//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use rfp_board::{
    Board, BoardState, BucketId, Card, ClientDirectory, DashboardSeed, DetailEdit, RecordBook, RecordError, RfpFormData,
    Settings,
};

/// Name recorded in activity entries made from this browser
pub const CURRENT_USER: &str = "You";

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct AppState {
    /// Kanban board and the in-flight drag
    pub board: BoardState,
    /// Detail-page data per card
    pub records: RecordBook,
    pub clients: ClientDirectory,
    pub settings: Settings,
    /// Card shown on the detail page
    pub selected_card: Option<String>,
}

impl AppState {
    /// Initial state from the embedded seed. A broken seed yields an empty
    /// board rather than a dead page.
    pub fn from_seed() -> Self {
        match DashboardSeed::load() {
            Ok(seed) => Self {
                board: BoardState::new(seed.board),
                records: seed.records,
                clients: ClientDirectory::new(seed.clients),
                settings: seed.settings,
                selected_card: None,
            },
            Err(e) => {
                log::error!("[STORE] seed data unusable, starting empty: {}", e);
                Self {
                    board: BoardState::new(Board::empty()),
                    records: RecordBook::default(),
                    clients: ClientDirectory::default(),
                    settings: Settings::default(),
                    selected_card: None,
                }
            }
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Local time as shown in the activity history
fn timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %I:%M %p").to_string()
}

/// Add a submitted RFP to the "New" column and open its record,
/// returning the created card
pub fn store_add_rfp(store: &AppStore, data: &RfpFormData) -> Card {
    let card = {
        let board = store.board();
        let mut state = board.write();
        let card = data.to_card(state.board.next_card_id());
        state.board = state.board.insert_card(BucketId::New, card.clone());
        card
    };

    store
        .records()
        .write()
        .create(&card.id, data, CURRENT_USER, &timestamp());
    card
}

/// Look up a card anywhere on the board
pub fn store_find_card(store: &AppStore, card_id: &str) -> Option<(BucketId, Card)> {
    store
        .board()
        .with(|s| s.board.locate(card_id).map(|(bucket, card)| (bucket, card.clone())))
}

/// Save the detail form of a card
pub fn store_save_record(store: &AppStore, card_id: &str, edit: &DetailEdit) -> Result<(), RecordError> {
    let card = store
        .board()
        .with_untracked(|s| s.board.locate(card_id).map(|(_, card)| card.clone()))
        .ok_or_else(|| RecordError::UnknownRfp(card_id.to_string()))?;
    store
        .records()
        .write()
        .save(&card, edit, CURRENT_USER, &timestamp())
}

/// Remove a document from a card's record
pub fn store_remove_document(store: &AppStore, card_id: &str, doc_id: u32) -> bool {
    store
        .records()
        .write()
        .remove_document(card_id, doc_id, CURRENT_USER, &timestamp())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_from_seed() {
        let state = AppState::from_seed();
        assert_eq!(state.board.board.card_count(), 5);
        assert!(state.board.drag.is_none());
        assert_eq!(state.clients.clients.len(), 5);
        assert!(state.selected_card.is_none());
        assert!(state.records.get("rfp-3").is_some());
    }

    fn form() -> RfpFormData {
        RfpFormData {
            rfp_title: "Cloud Migration".to_string(),
            client_name: "SkyHigh Inc.".to_string(),
            due_date: "2024-10-01".to_string(),
            estimated_value: "75000".to_string(),
            summary: "Lift and shift.".to_string(),
        }
    }

    #[test]
    fn test_store_add_rfp_appends_to_new() {
        let store = Store::new(AppState::from_seed());
        let card = store_add_rfp(&store, &form());
        assert_eq!(card.id, "rfp-6");

        let new_ids = store.board().with_untracked(|s| {
            s.board
                .cards(BucketId::New)
                .iter()
                .map(|c| c.id.clone())
                .collect::<Vec<_>>()
        });
        assert_eq!(new_ids, vec!["rfp-1", "rfp-2", "rfp-6"]);
        assert!(store.board().with_untracked(|s| s.board.is_consistent()));

        let (value, description) = store.records().with_untracked(|r| {
            let record = r.get("rfp-6").unwrap();
            (record.value, record.description.clone())
        });
        assert_eq!(value, 75000.0);
        assert_eq!(description, "Lift and shift.");

        assert_eq!(store_add_rfp(&store, &form()).id, "rfp-7");
    }

    #[test]
    fn test_store_save_record() {
        let store = Store::new(AppState::from_seed());
        let (_, card) = store_find_card(&store, "rfp-2").unwrap();
        let mut edit = DetailEdit::for_card(&card, None);
        edit.status = "Won".to_string();
        store_save_record(&store, "rfp-2", &edit).unwrap();

        let shown = store
            .records()
            .with_untracked(|r| r.get("rfp-2").map(|rec| rec.status_for(&card)));
        assert_eq!(shown, Some(rfp_board::RfpStatus::Won));
        assert_eq!(
            store_save_record(&store, "rfp-404", &edit),
            Err(RecordError::UnknownRfp("rfp-404".to_string()))
        );
    }

    #[test]
    fn test_store_remove_document() {
        let store = Store::new(AppState::from_seed());
        assert!(store_remove_document(&store, "rfp-3", 2));
        assert!(!store_remove_document(&store, "rfp-3", 2));
        let left = store
            .records()
            .with_untracked(|r| r.get("rfp-3").map(|rec| rec.documents.len()));
        assert_eq!(left, Some(2));
    }
}
