//! Chat widget state: input, transcript, and minimized/expanded toggle.
//!
//! SYSTEM CONTEXT
//! ==============
//! The transcript is persisted as rendered markup, not as structured
//! messages: saving writes the concatenated bubble HTML under one
//! `localStorage` key and loading puts that markup back verbatim. Changing
//! the bubble markup format makes older saved transcripts render with the
//! old format; there is no versioning.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::error::ApiError;
use crate::net::types::GenAiReply;
use crate::util::markdown::render_markdown_html;
use crate::util::storage::TranscriptStore;

/// `localStorage` key holding the transcript markup.
pub const TRANSCRIPT_KEY: &str = "chatMessages";

pub const NOT_FOUND_TEXT: &str = "GenAI service not found. Please check the API configuration.";
pub const SERVER_ERROR_TEXT: &str = "Server error occurred. Please try again later.";
pub const RATE_LIMITED_TEXT: &str = "Too many requests. Please wait a moment and try again.";
pub const UNAVAILABLE_TEXT: &str = "Chat is currently unavailable";

pub const EXPANDED_HEIGHT: &str = "400px";
pub const MINIMIZED_HEIGHT: &str = "40px";

/// Who a bubble belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Bot,
}

impl ChatRole {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Bot => "bot",
        }
    }
}

/// One rendered chat bubble.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatBubble {
    pub role: ChatRole,
    /// Markdown source.
    pub text: String,
    /// `text` rendered to HTML.
    pub html: String,
}

impl ChatBubble {
    pub fn new(role: ChatRole, text: &str) -> Self {
        Self { role, text: text.to_owned(), html: render_markdown_html(text) }
    }

    /// Markup stored in the transcript.
    pub fn markup(&self) -> String {
        format!("<div class=\"chat-bubble {}\">{}</div>", self.role.css_class(), self.html)
    }
}

/// Visible chat text for a failed exchange.
pub fn error_text(err: &ApiError) -> &'static str {
    match err.status() {
        Some(404) => NOT_FOUND_TEXT,
        Some(500) => SERVER_ERROR_TEXT,
        Some(429) => RATE_LIMITED_TEXT,
        _ => UNAVAILABLE_TEXT,
    }
}

/// Chat widget state.
#[derive(Clone, Debug)]
pub struct ChatState {
    /// Current contents of the input field.
    pub input: String,
    /// Markup restored from storage, shown before `bubbles`.
    pub restored: String,
    /// Bubbles appended since the widget mounted.
    pub bubbles: Vec<ChatBubble>,
    /// Questions sent and not yet answered.
    pub pending: usize,
    pub minimized: bool,
}

impl Default for ChatState {
    fn default() -> Self {
        Self { input: String::new(), restored: String::new(), bubbles: Vec::new(), pending: 0, minimized: true }
    }
}

impl ChatState {
    /// Start an exchange from the input field.
    ///
    /// Whitespace-only input is ignored and left in place. Otherwise the
    /// input is cleared, the user bubble is appended immediately, and the
    /// trimmed question to send is returned.
    pub fn begin_send(&mut self) -> Option<String> {
        let question = self.input.trim().to_owned();
        if question.is_empty() {
            return None;
        }
        self.input.clear();
        self.bubbles.push(ChatBubble::new(ChatRole::User, &question));
        self.pending += 1;
        Some(question)
    }

    /// Append exactly one bot bubble for the finished exchange.
    pub fn finish_send(&mut self, outcome: &Result<GenAiReply, ApiError>) {
        let text = match outcome {
            Ok(reply) => reply.text(),
            Err(err) => error_text(err),
        };
        self.bubbles.push(ChatBubble::new(ChatRole::Bot, text));
        self.pending = self.pending.saturating_sub(1);
    }

    /// Full transcript markup: restored history followed by new bubbles.
    pub fn transcript_markup(&self) -> String {
        let mut out = self.restored.clone();
        for bubble in &self.bubbles {
            out.push_str(&bubble.markup());
        }
        out
    }

    pub fn save_to(&self, store: &impl TranscriptStore) {
        store.save(&self.transcript_markup());
    }

    /// Replace the transcript with stored markup, if any was saved.
    pub fn load_from(&mut self, store: &impl TranscriptStore) {
        if let Some(markup) = store.load().filter(|m| !m.is_empty()) {
            self.restored = markup;
            self.bubbles.clear();
        }
    }

    pub fn toggle(&mut self) {
        self.minimized = !self.minimized;
    }

    /// Height of the chatbox content area for the current state.
    pub fn content_height(&self) -> &'static str {
        if self.minimized { MINIMIZED_HEIGHT } else { EXPANDED_HEIGHT }
    }
}
