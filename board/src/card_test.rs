use super::*;

fn draft(title: &str) -> CardDraft {
    CardDraft {
        title: title.to_owned(),
        description: String::new(),
        priority: Priority::Medium,
        due_date: String::new(),
    }
}

#[test]
fn priority_serde_lowercase() {
    let cases = [
        (Priority::Low, "\"low\""),
        (Priority::Medium, "\"medium\""),
        (Priority::High, "\"high\""),
    ];
    for (priority, expected) in cases {
        assert_eq!(serde_json::to_string(&priority).unwrap(), expected);
        let back: Priority = serde_json::from_str(expected).unwrap();
        assert_eq!(back, priority);
    }
}

#[test]
fn create_stamps_both_timestamps_equal() {
    let card = Card::create(&draft("  Task A  "), 1_000);
    assert_eq!(card.id, "card-1000");
    assert_eq!(card.title, "Task A");
    assert_eq!(card.created_at, 1_000);
    assert_eq!(card.updated_at, 1_000);
    assert_eq!(card.priority, Priority::Medium);
}

#[test]
fn apply_preserves_id_and_created_at() {
    let mut card = Card::create(&draft("Task A"), 1_000);
    let mut edit = card.to_draft();
    edit.title = "Task B".to_owned();
    edit.priority = Priority::High;
    card.apply(&edit, 2_000);

    assert_eq!(card.id, "card-1000");
    assert_eq!(card.title, "Task B");
    assert_eq!(card.priority, Priority::High);
    assert_eq!(card.created_at, 1_000);
    assert_eq!(card.updated_at, 2_000);
    assert!(card.updated_at > card.created_at);
}

#[test]
fn optional_fields_default_on_deserialize() {
    let json = r#"{"id":"card-5","title":"Bare","created_at":5,"updated_at":5}"#;
    let card: Card = serde_json::from_str(json).unwrap();
    assert_eq!(card.description, "");
    assert_eq!(card.priority, Priority::Medium);
    assert_eq!(card.due_date, "");
}

#[test]
fn has_title_rejects_whitespace() {
    assert!(draft("Task").has_title());
    assert!(!draft("").has_title());
    assert!(!draft("   ").has_title());
}
