use super::*;
use crate::card::Priority;
use crate::storage::MemoryStorage;

fn draft(title: &str) -> CardDraft {
    CardDraft { title: title.to_owned(), ..CardDraft::default() }
}

fn card_ids(store: &ContentStore<&MemoryStorage>, column_id: &str) -> Vec<String> {
    store
        .columns()
        .iter()
        .find(|c| c.id == column_id)
        .map(|c| c.cards.iter().map(|card| card.id.clone()).collect())
        .unwrap_or_default()
}

#[test]
fn fresh_board_seeds_three_empty_columns() {
    let storage = MemoryStorage::new();
    let store = ContentStore::load(&storage, "board-1");
    let titles: Vec<&str> = store.columns().iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, ["To Do", "In Progress", "Done"]);
    assert!(store.columns().iter().all(|c| c.cards.is_empty()));
    // Seed is written under the board's content key.
    assert!(storage.read("board-board-1").is_some());
}

#[test]
fn add_column_appends_and_blank_title_is_rejected() {
    let storage = MemoryStorage::new();
    let mut store = ContentStore::load(&storage, "board-1");

    assert!(store.add_column("  ", 5_000).is_none());
    assert_eq!(store.columns().len(), 3);

    let column = store.add_column("Review", 5_000).unwrap();
    assert_eq!(column.id, "col-5000");
    assert!(column.cards.is_empty());
    assert_eq!(store.columns().len(), 4);
    assert_eq!(store.columns()[3].title, "Review");
}

#[test]
fn delete_column_drops_its_cards() {
    let storage = MemoryStorage::new();
    let mut store = ContentStore::load(&storage, "board-1");
    store.upsert_card("col-1", None, &draft("Task"), 1_000);

    store.delete_column("col-1");
    let ids: Vec<&str> = store.columns().iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["col-2", "col-3"]);
}

#[test]
fn create_card_appends_with_equal_timestamps() {
    let storage = MemoryStorage::new();
    let mut store = ContentStore::load(&storage, "board-1");

    let first = store.upsert_card("col-1", None, &draft("Task A"), 1_000).unwrap();
    let second = store
        .upsert_card(
            "col-1",
            None,
            &CardDraft { title: "Task B".to_owned(), priority: Priority::High, ..CardDraft::default() },
            2_000,
        )
        .unwrap();

    assert_eq!(first.created_at, first.updated_at);
    assert_eq!(second.priority, Priority::High);
    assert_eq!(card_ids(&store, "col-1"), [first.id, second.id]);
}

#[test]
fn edit_card_keeps_position_and_created_at() {
    let storage = MemoryStorage::new();
    let mut store = ContentStore::load(&storage, "board-1");
    let a = store.upsert_card("col-1", None, &draft("Task A"), 1_000).unwrap();
    let b = store.upsert_card("col-1", None, &draft("Task B"), 2_000).unwrap();

    let edited = store
        .upsert_card("col-1", Some(&a.id), &draft("Task A renamed"), 3_000)
        .unwrap();
    assert_eq!(edited.title, "Task A renamed");
    assert_eq!(edited.created_at, 1_000);
    assert!(edited.updated_at > edited.created_at);
    // Still first in the sequence.
    assert_eq!(card_ids(&store, "col-1"), [a.id, b.id]);
}

#[test]
fn upsert_with_blank_title_mutates_nothing() {
    let storage = MemoryStorage::new();
    let mut store = ContentStore::load(&storage, "board-1");
    let a = store.upsert_card("col-1", None, &draft("Task A"), 1_000).unwrap();

    assert!(store.upsert_card("col-1", None, &draft("   "), 2_000).is_none());
    assert!(store.upsert_card("col-1", Some(&a.id), &draft(""), 2_000).is_none());
    let column = &store.columns()[0];
    assert_eq!(column.cards.len(), 1);
    assert_eq!(column.cards[0].title, "Task A");
    assert_eq!(column.cards[0].updated_at, 1_000);
}

#[test]
fn upsert_into_unknown_column_is_a_no_op() {
    let storage = MemoryStorage::new();
    let mut store = ContentStore::load(&storage, "board-1");
    assert!(store.upsert_card("col-99", None, &draft("Task"), 1_000).is_none());
    assert!(store.columns().iter().all(|c| c.cards.is_empty()));
}

#[test]
fn delete_card_removes_only_that_card() {
    let storage = MemoryStorage::new();
    let mut store = ContentStore::load(&storage, "board-1");
    let a = store.upsert_card("col-1", None, &draft("Task A"), 1_000).unwrap();
    let b = store.upsert_card("col-1", None, &draft("Task B"), 2_000).unwrap();

    store.delete_card("col-1", &a.id);
    assert_eq!(card_ids(&store, "col-1"), [b.id]);
}

#[test]
fn move_card_appends_to_target_and_preserves_other_order() {
    let storage = MemoryStorage::new();
    let mut store = ContentStore::load(&storage, "board-1");
    let a = store.upsert_card("col-1", None, &draft("A"), 1_000).unwrap();
    let b = store.upsert_card("col-1", None, &draft("B"), 2_000).unwrap();
    let c = store.upsert_card("col-1", None, &draft("C"), 3_000).unwrap();
    let x = store.upsert_card("col-2", None, &draft("X"), 4_000).unwrap();

    store.move_card(&CardMove {
        source_column: "col-1".to_owned(),
        target_column: "col-2".to_owned(),
        card_id: b.id.clone(),
    });

    assert_eq!(card_ids(&store, "col-1"), [a.id, c.id]);
    assert_eq!(card_ids(&store, "col-2"), [x.id, b.id]);
}

#[test]
fn same_column_move_of_tail_card_is_a_no_op() {
    let storage = MemoryStorage::new();
    let mut store = ContentStore::load(&storage, "board-1");
    let a = store.upsert_card("col-1", None, &draft("A"), 1_000).unwrap();
    let b = store.upsert_card("col-1", None, &draft("B"), 2_000).unwrap();

    store.move_card(&CardMove {
        source_column: "col-1".to_owned(),
        target_column: "col-1".to_owned(),
        card_id: b.id.clone(),
    });
    assert_eq!(card_ids(&store, "col-1"), [a.id, b.id]);
}

#[test]
fn same_column_move_of_non_tail_card_repositions_to_end() {
    let storage = MemoryStorage::new();
    let mut store = ContentStore::load(&storage, "board-1");
    let a = store.upsert_card("col-1", None, &draft("A"), 1_000).unwrap();
    let b = store.upsert_card("col-1", None, &draft("B"), 2_000).unwrap();

    store.move_card(&CardMove {
        source_column: "col-1".to_owned(),
        target_column: "col-1".to_owned(),
        card_id: a.id.clone(),
    });
    assert_eq!(card_ids(&store, "col-1"), [b.id, a.id]);
}

#[test]
fn move_to_unknown_target_leaves_source_intact() {
    let storage = MemoryStorage::new();
    let mut store = ContentStore::load(&storage, "board-1");
    let a = store.upsert_card("col-1", None, &draft("A"), 1_000).unwrap();

    store.move_card(&CardMove {
        source_column: "col-1".to_owned(),
        target_column: "col-99".to_owned(),
        card_id: a.id.clone(),
    });
    assert_eq!(card_ids(&store, "col-1"), [a.id]);
}

#[test]
fn move_of_unknown_card_mutates_nothing() {
    let storage = MemoryStorage::new();
    let mut store = ContentStore::load(&storage, "board-1");
    store.upsert_card("col-2", None, &draft("X"), 1_000);

    store.move_card(&CardMove {
        source_column: "col-1".to_owned(),
        target_column: "col-2".to_owned(),
        card_id: "card-404".to_owned(),
    });
    assert_eq!(store.columns()[0].cards.len(), 0);
    assert_eq!(store.columns()[1].cards.len(), 1);
}

#[test]
fn reload_reproduces_the_same_tree() {
    let storage = MemoryStorage::new();
    {
        let mut store = ContentStore::load(&storage, "board-1");
        store.add_column("Review", 500);
        store.upsert_card(
            "col-1",
            None,
            &CardDraft {
                title: "Task A".to_owned(),
                description: "details".to_owned(),
                priority: Priority::High,
                due_date: "2026-09-01".to_owned(),
            },
            1_000,
        );
    }
    let reloaded = ContentStore::load(&storage, "board-1");
    assert_eq!(reloaded.columns().len(), 4);
    let card = &reloaded.columns()[0].cards[0];
    assert_eq!(card.title, "Task A");
    assert_eq!(card.description, "details");
    assert_eq!(card.priority, Priority::High);
    assert_eq!(card.due_date, "2026-09-01");
    assert_eq!(card.created_at, 1_000);
}

#[test]
fn corrupt_columns_fall_back_to_seed() {
    let storage = MemoryStorage::new();
    storage.write("board-board-1", "[{\"id\": 12}");
    let store = ContentStore::load(&storage, "board-1");
    assert_eq!(store.columns().len(), 3);
    assert_eq!(store.columns()[0].title, "To Do");
}

#[test]
fn stores_for_different_boards_do_not_interfere() {
    let storage = MemoryStorage::new();
    let mut first = ContentStore::load(&storage, "board-1");
    first.upsert_card("col-1", None, &draft("only on board 1"), 1_000);

    let second = ContentStore::load(&storage, "board-2");
    assert!(second.columns().iter().all(|c| c.cards.is_empty()));

    let first_again = ContentStore::load(&storage, "board-1");
    assert_eq!(first_again.columns()[0].cards.len(), 1);
}
