use super::*;
use crate::net::types::NO_RESPONSE_TEXT;
use crate::state::chat::{ChatRole, ChatState, NOT_FOUND_TEXT, SERVER_ERROR_TEXT, UNAVAILABLE_TEXT};
use crate::test_support::{MockTransport, api, url};
use crate::util::markdown::render_markdown_html;
use futures::executor::block_on;

fn exchange(client: &PetClinicApi<MockTransport>, input: &str) -> ChatState {
    let mut state = ChatState { input: input.to_owned(), ..ChatState::default() };
    let question = state.begin_send().expect("non-empty input");
    assert_eq!(state.bubbles.len(), 1, "user bubble is appended before the request resolves");
    assert!(client.transport().sent().is_empty());

    let outcome = block_on(ask(client, &question));
    state.finish_send(&outcome);
    state
}

#[test]
fn successful_exchange_renders_answer() {
    let client = api(MockTransport::new().respond(&url("/api/genai"), 200, serde_json::json!({ "answer": "*Yes*" })));
    let state = exchange(&client, "Is Leo due for a shot?");

    assert_eq!(state.bubbles.len(), 2);
    assert_eq!(state.bubbles[0].role, ChatRole::User);
    assert_eq!(state.bubbles[1].role, ChatRole::Bot);
    assert_eq!(state.bubbles[1].html, render_markdown_html("*Yes*"));
    assert_eq!(client.transport().sent()[0].body, Some(serde_json::json!({ "question": "Is Leo due for a shot?" })));
}

#[test]
fn not_found_shows_service_not_found() {
    let client = api(MockTransport::new().respond_text(&url("/api/genai"), 404, ""));
    let state = exchange(&client, "hello");
    assert_eq!(state.bubbles[1].text, NOT_FOUND_TEXT);
}

#[test]
fn server_error_shows_server_error() {
    let client = api(MockTransport::new().respond_text(&url("/api/genai"), 500, ""));
    assert_eq!(exchange(&client, "hello").bubbles[1].text, SERVER_ERROR_TEXT);
}

#[test]
fn network_failure_shows_generic_message() {
    let client = api(MockTransport::new().fail(&url("/api/genai"), "offline"));
    let state = exchange(&client, "hello");
    assert_eq!(state.bubbles.len(), 2);
    assert_eq!(state.bubbles[1].text, UNAVAILABLE_TEXT);
}

#[test]
fn non_string_message_field_still_shows_answer() {
    let body = serde_json::json!({ "answer": "X", "message": 42 });
    let client = api(MockTransport::new().respond(&url("/api/genai"), 200, body));
    assert_eq!(exchange(&client, "hello").bubbles[1].text, "X");
}

#[test]
fn scalar_json_body_shows_no_response_placeholder() {
    let client = api(MockTransport::new().respond(&url("/api/genai"), 200, serde_json::json!("plain")));
    assert_eq!(exchange(&client, "hello").bubbles[1].text, NO_RESPONSE_TEXT);
}

#[test]
fn non_json_body_shows_generic_message() {
    let client = api(MockTransport::new().respond_text(&url("/api/genai"), 200, "<html>"));
    assert_eq!(exchange(&client, "hello").bubbles[1].text, UNAVAILABLE_TEXT);
}
