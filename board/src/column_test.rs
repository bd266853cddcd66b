use super::*;

#[test]
fn seed_is_three_empty_lanes() {
    let cols = seed_columns();
    let titles: Vec<&str> = cols.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, ["To Do", "In Progress", "Done"]);
    let ids: Vec<&str> = cols.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["col-1", "col-2", "col-3"]);
    assert!(cols.iter().all(|c| c.cards.is_empty()));
}

#[test]
fn cards_default_when_absent_in_json() {
    let col: Column = serde_json::from_str(r#"{"id":"col-1","title":"To Do"}"#).unwrap();
    assert!(col.cards.is_empty());
}
