use super::*;

fn owner(id: i64) -> Owner {
    Owner { id: Some(id), first_name: "Betty".to_owned(), last_name: "Davis".to_owned(), ..Owner::default() }
}

// =============================================================
// OwnerListState
// =============================================================

#[test]
fn list_load_mirrors_response() {
    let mut state = OwnerListState::default();
    state.begin_load();
    assert!(state.loading);
    state.finish_load(Ok(vec![owner(1), owner(2)]));
    assert!(!state.loading);
    assert_eq!(state.owners.len(), 2);
    assert!(state.error.is_none());
}

#[test]
fn list_failure_keeps_previous_owners() {
    let mut state = OwnerListState { owners: vec![owner(1)], ..OwnerListState::default() };
    state.begin_load();
    state.finish_load(Err("Error loading owners: request failed: offline".to_owned()));
    assert_eq!(state.owners, vec![owner(1)]);
    assert_eq!(state.error.as_deref(), Some("Error loading owners: request failed: offline"));
}

#[test]
fn begin_load_clears_stale_error() {
    let mut state = OwnerListState { error: Some("old".to_owned()), ..OwnerListState::default() };
    state.begin_load();
    assert!(state.error.is_none());
}

// =============================================================
// OwnerDetailsState
// =============================================================

#[test]
fn details_failure_leaves_owner_unset() {
    let mut state = OwnerDetailsState::default();
    state.begin_load();
    state.finish_load(Err("boom".to_owned()));
    assert!(state.owner.is_none());
    assert_eq!(state.error.as_deref(), Some("boom"));
}

// =============================================================
// OwnerFormState
// =============================================================

#[test]
fn form_without_id_is_new() {
    let mut state = OwnerFormState::default();
    assert!(state.is_new());
    state.finish_load(Ok(owner(5)));
    assert!(!state.is_new());
}

#[test]
fn submit_guard_rejects_double_submit() {
    let mut state = OwnerFormState::default();
    assert!(state.begin_submit());
    assert!(!state.begin_submit());
    state.finish_submit::<()>(&Err("Error creating owner: HTTP error! status: 400".to_owned()));
    assert!(!state.saving);
    assert!(state.error.is_some());
    assert!(state.begin_submit());
}
