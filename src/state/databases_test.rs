use super::*;

fn db(name: &str) -> DiscoveredDatabase {
    DiscoveredDatabase { kind: "sqlite".into(), name: Some(name.into()), ..DiscoveredDatabase::default() }
}

#[test]
fn one_fetch_at_a_time() {
    let mut state = DatabasesState::default();
    assert!(state.begin(false));
    assert!(state.busy());
    assert!(!state.begin(true));
    state.finish(Ok(DatabaseCatalog { databases: vec![db("shop")], summary: "1 database".into() }));
    assert!(!state.busy());
    assert_eq!(state.databases.len(), 1);
    assert_eq!(state.summary, "1 database");
}

#[test]
fn rescan_sets_its_own_flag() {
    let mut state = DatabasesState::default();
    assert!(state.begin(true));
    assert!(state.rescanning);
    assert!(!state.loading);
}

#[test]
fn failure_keeps_previous_catalog() {
    let mut state = DatabasesState::default();
    state.seed(vec![db("shop")]);
    state.begin(true);
    state.finish(Err(ApiError::from_status(500, r#"{"detail":"scan failed"}"#)));
    assert_eq!(state.databases.len(), 1);
    assert_eq!(state.error.as_deref(), Some("scan failed"));
    assert!(!state.busy());
}

#[test]
fn empty_seed_does_not_clear() {
    let mut state = DatabasesState::default();
    state.seed(vec![db("shop")]);
    state.seed(Vec::new());
    assert_eq!(state.databases.len(), 1);
}
