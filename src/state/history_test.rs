use super::*;

fn conv(id: &str, title: &str) -> Conversation {
    Conversation { id: id.into(), title: title.into(), schema: format!("-- {id}") }
}

#[test]
fn loads_once_per_active_id() {
    let mut history = HistoryState::default();
    let ticket = history.begin_load(None).unwrap();
    assert!(history.loading);
    history.finish_load(&ticket, Ok(vec![conv("c1", "Orders")]));
    assert!(!history.loading);

    assert!(history.begin_load(None).is_none());
    assert!(history.begin_load(Some("c1".into())).is_some());
    assert!(history.begin_load(Some("c1".into())).is_none());

    history.invalidate();
    assert!(history.begin_load(Some("c1".into())).is_some());
}

#[test]
fn finish_returns_active_conversation() {
    let mut history = HistoryState::default();
    let ticket = history.begin_load(Some("c2".into())).unwrap();
    let active = history.finish_load(&ticket, Ok(vec![conv("c1", "A"), conv("c2", "B")]));
    assert_eq!(active, HistoryLoad::Current(Some(conv("c2", "B"))));
    assert_eq!(history.items.len(), 2);
}

#[test]
fn stale_fetch_is_ignored() {
    let mut history = HistoryState::default();
    let old = history.begin_load(None).unwrap();
    let new = history.begin_load(Some("c1".into())).unwrap();
    assert_eq!(history.finish_load(&old, Ok(vec![conv("x", "stale")])), HistoryLoad::Stale);
    assert!(history.items.is_empty());
    history.finish_load(&new, Ok(vec![conv("c1", "fresh")]));
    assert_eq!(history.items[0].title, "fresh");
}

#[test]
fn failed_fetch_keeps_items() {
    let mut history = HistoryState::default();
    history.upsert(conv("c1", "A"));
    let ticket = history.begin_load(None).unwrap();
    let outcome = history.finish_load(&ticket, Err(ApiError::Network("offline".into())));
    assert_eq!(outcome, HistoryLoad::Failed);
    assert_eq!(history.items.len(), 1);
    assert!(history.error.is_some());
}

#[test]
fn unlisted_active_id_is_current_without_entry() {
    let mut history = HistoryState::default();
    let ticket = history.begin_load(Some("gone".into())).unwrap();
    assert_eq!(history.finish_load(&ticket, Ok(vec![conv("c1", "A")])), HistoryLoad::Current(None));
}

#[test]
fn upsert_prepends_or_replaces() {
    let mut history = HistoryState::default();
    history.upsert(conv("c1", "A"));
    history.upsert(conv("c2", "B"));
    assert_eq!(history.items[0].id, "c2");
    history.upsert(conv("c1", "A2"));
    assert_eq!(history.items.len(), 2);
    assert_eq!(history.find("c1").map(|c| c.title.as_str()), Some("A2"));
}

#[test]
fn rename_changes_title_only() {
    let mut history = HistoryState::default();
    history.upsert(conv("c1", "A"));
    assert!(history.rename("c1", "  Revenue by month "));
    let c = history.find("c1").unwrap();
    assert_eq!(c.title, "Revenue by month");
    assert_eq!(c.schema, "-- c1");
    assert!(!history.rename("missing", "x"));
}

#[test]
fn remove_drops_entry() {
    let mut history = HistoryState::default();
    history.upsert(conv("c1", "A"));
    assert_eq!(history.remove("c1").map(|c| c.id), Some("c1".to_owned()));
    assert!(history.items.is_empty());
    assert_eq!(history.remove("c1"), None);
}
