use super::*;

#[test]
fn vet_list_state_default_empty() {
    let state = VetListState::default();
    assert!(state.vets.is_empty());
    assert!(!state.loading);
}

#[test]
fn vet_list_mirrors_response() {
    let mut state = VetListState::default();
    state.begin_load();
    state.finish_load(Ok(vec![Vet { id: 1, first_name: "James".to_owned(), last_name: "Carter".to_owned(), specialties: vec![] }]));
    assert_eq!(state.vets.len(), 1);
    assert!(!state.loading);
}
