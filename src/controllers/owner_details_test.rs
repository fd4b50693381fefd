use super::*;
use crate::test_support::{MockTransport, api, owner_json, url};
use futures::executor::block_on;

fn two_pets() -> serde_json::Value {
    serde_json::json!([
        { "id": 7, "name": "Samantha", "birthDate": "2012-09-04", "type": { "id": 1, "name": "cat" } },
        { "id": 8, "name": "Max", "birthDate": "2012-09-04", "type": { "id": 1, "name": "cat" } }
    ])
}

#[test]
fn activate_attaches_visits_to_each_pet() {
    let client = api(
        MockTransport::new()
            .respond(&url("/api/customers/owners/6"), 200, owner_json(6, two_pets()))
            .respond(
                &url("/api/visits/owners/*/pets/7/visits"),
                200,
                serde_json::json!([{ "id": 1, "date": "2013-01-01", "description": "rabies shot", "petId": 7 }]),
            )
            .respond(&url("/api/visits/owners/*/pets/8/visits"), 200, serde_json::json!([])),
    );
    let owner = block_on(activate(&client, 6)).unwrap();
    assert_eq!(owner.pets[0].visits.len(), 1);
    assert_eq!(owner.pets[0].visits[0].description, "rabies shot");
    assert!(owner.pets[1].visits.is_empty());
    assert_eq!(client_requests(&client), 3);
}

#[test]
fn failed_visit_fetch_yields_empty_list_for_that_pet_only() {
    let client = api(
        MockTransport::new()
            .respond(&url("/api/customers/owners/6"), 200, owner_json(6, two_pets()))
            .fail(&url("/api/visits/owners/*/pets/7/visits"), "offline")
            .respond(
                &url("/api/visits/owners/*/pets/8/visits"),
                200,
                serde_json::json!([{ "id": 2, "date": "2013-01-02", "description": "neutered", "petId": 8 }]),
            ),
    );
    let owner = block_on(activate(&client, 6)).unwrap();
    assert!(owner.pets[0].visits.is_empty());
    assert_eq!(owner.pets[1].visits.len(), 1);
}

#[test]
fn owner_without_pets_issues_single_request() {
    let client = api(MockTransport::new().respond(&url("/api/customers/owners/1"), 200, owner_json(1, serde_json::json!([]))));
    let owner = block_on(activate(&client, 1)).unwrap();
    assert!(owner.pets.is_empty());
    assert_eq!(client_requests(&client), 1);
}

#[test]
fn owner_read_failure_fails_the_view() {
    let client = api(MockTransport::new().respond_text(&url("/api/customers/owners/9"), 404, ""));
    let err = block_on(activate(&client, 9)).unwrap_err();
    assert_eq!(err, "Error loading owner details: HTTP error! status: 404");
}

fn client_requests(client: &PetClinicApi<MockTransport>) -> usize {
    client.transport().sent().len()
}
