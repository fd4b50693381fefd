use super::*;
use std::cell::RefCell;

#[derive(Default)]
struct MemoryStore {
    saved: RefCell<Option<String>>,
}

impl TranscriptStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.saved.borrow().clone()
    }

    fn save(&self, markup: &str) {
        *self.saved.borrow_mut() = Some(markup.to_owned());
    }
}

fn status(code: u16) -> ApiError {
    ApiError::Status { status: code, body: String::new() }
}

// =============================================================
// begin_send / finish_send
// =============================================================

#[test]
fn begin_send_appends_user_bubble_and_clears_input() {
    let mut state = ChatState { input: "  is my cat ok?  ".to_owned(), ..ChatState::default() };
    let question = state.begin_send();
    assert_eq!(question.as_deref(), Some("is my cat ok?"));
    assert_eq!(state.input, "");
    assert_eq!(state.bubbles.len(), 1);
    assert_eq!(state.bubbles[0].role, ChatRole::User);
    assert_eq!(state.pending, 1);
}

#[test]
fn begin_send_ignores_blank_input_and_keeps_it() {
    let mut state = ChatState { input: " \t ".to_owned(), ..ChatState::default() };
    assert_eq!(state.begin_send(), None);
    assert_eq!(state.input, " \t ");
    assert!(state.bubbles.is_empty());
    assert_eq!(state.pending, 0);
}

#[test]
fn finish_send_renders_reply_markdown() {
    let mut state = ChatState { input: "hi".to_owned(), ..ChatState::default() };
    state.begin_send();
    state.finish_send(&Ok(GenAiReply::Answer("**X**".to_owned())));
    assert_eq!(state.bubbles.len(), 2);
    assert_eq!(state.bubbles[1].role, ChatRole::Bot);
    assert_eq!(state.bubbles[1].html, render_markdown_html("**X**"));
    assert_eq!(state.pending, 0);
}

#[test]
fn finish_send_uses_message_then_placeholder() {
    let mut state = ChatState::default();
    state.finish_send(&Ok(GenAiReply::Message("Y".to_owned())));
    state.finish_send(&Ok(GenAiReply::Empty));
    assert_eq!(state.bubbles[0].text, "Y");
    assert_eq!(state.bubbles[1].text, "No response received");
}

#[test]
fn error_text_classifies_status_codes() {
    assert_eq!(error_text(&status(404)), NOT_FOUND_TEXT);
    assert_eq!(error_text(&status(500)), SERVER_ERROR_TEXT);
    assert_eq!(error_text(&status(429)), RATE_LIMITED_TEXT);
    assert_eq!(error_text(&status(502)), UNAVAILABLE_TEXT);
    assert_eq!(error_text(&ApiError::Transport("offline".to_owned())), UNAVAILABLE_TEXT);
    assert_eq!(error_text(&ApiError::Decode("eof".to_owned())), UNAVAILABLE_TEXT);
}

#[test]
fn failed_exchange_appends_one_bot_bubble() {
    let mut state = ChatState { input: "hello".to_owned(), ..ChatState::default() };
    state.begin_send();
    state.finish_send(&Err(status(429)));
    assert_eq!(state.bubbles.len(), 2);
    assert_eq!(state.bubbles[1].text, RATE_LIMITED_TEXT);
}

// =============================================================
// Transcript persistence
// =============================================================

#[test]
fn bubble_markup_wraps_html_with_role_class() {
    let bubble = ChatBubble::new(ChatRole::User, "hi");
    assert_eq!(bubble.markup(), "<div class=\"chat-bubble user\"><p>hi</p>\n</div>");
}

#[test]
fn save_then_load_reproduces_markup() {
    let store = MemoryStore::default();
    let mut state = ChatState { input: "first".to_owned(), ..ChatState::default() };
    state.begin_send();
    state.finish_send(&Ok(GenAiReply::Answer("reply".to_owned())));
    let before = state.transcript_markup();
    state.save_to(&store);

    let mut reloaded = ChatState::default();
    reloaded.load_from(&store);
    assert_eq!(reloaded.transcript_markup(), before);
    assert!(reloaded.bubbles.is_empty());
}

#[test]
fn new_bubbles_append_after_restored_markup() {
    let store = MemoryStore::default();
    store.save("<div class=\"chat-bubble bot\">old</div>");
    let mut state = ChatState::default();
    state.load_from(&store);
    state.finish_send(&Ok(GenAiReply::Empty));
    assert!(state.transcript_markup().starts_with("<div class=\"chat-bubble bot\">old</div><div"));
}

#[test]
fn load_without_saved_transcript_keeps_state() {
    let store = MemoryStore::default();
    let mut state = ChatState::default();
    state.finish_send(&Ok(GenAiReply::Empty));
    state.load_from(&store);
    assert_eq!(state.bubbles.len(), 1);
}

// =============================================================
// Toggle
// =============================================================

#[test]
fn chat_starts_minimized() {
    let state = ChatState::default();
    assert!(state.minimized);
    assert_eq!(state.content_height(), MINIMIZED_HEIGHT);
}

#[test]
fn toggling_twice_restores_original_state() {
    let mut state = ChatState::default();
    state.toggle();
    assert!(!state.minimized);
    assert_eq!(state.content_height(), EXPANDED_HEIGHT);
    state.toggle();
    assert!(state.minimized);
}
