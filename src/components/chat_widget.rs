//! Floating chat widget for the GenAI assistant.
//!
//! SYSTEM CONTEXT
//! ==============
//! The user bubble is appended and saved before the request goes out; the
//! bot bubble follows when the response (or failure) arrives. The transcript
//! is restored from `localStorage` when the widget mounts.

use leptos::prelude::*;

use crate::app::SharedApi;
use crate::state::chat::{ChatState, TRANSCRIPT_KEY};
use crate::util::storage::LocalTranscriptStore;

#[component]
pub fn ChatWidget() -> impl IntoView {
    let api = StoredValue::new(expect_context::<SharedApi>());
    let chat = RwSignal::new(ChatState::default());
    let store = LocalTranscriptStore { key: TRANSCRIPT_KEY };
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        chat.update(|c| c.load_from(&store));
    });

    Effect::new(move || {
        let _ = chat.with(|c| (c.bubbles.len(), c.restored.len()));

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        let Some(question) = chat.try_update(ChatState::begin_send).flatten() else {
            return;
        };
        chat.with_untracked(|c| c.save_to(&store));

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let api = api.get_value();
            let outcome = crate::controllers::chat::ask(&api, &question).await;
            chat.update(|c| c.finish_send(&outcome));
            chat.with_untracked(|c| c.save_to(&store));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (api, question);
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    view! {
        <div id="chatbox" class="chatbox" class:minimized=move || chat.with(|c| c.minimized)>
            <div class="chatbox-header" on:click=move |_| chat.update(ChatState::toggle)>
                "Chat with Us!"
            </div>
            <div class="chatbox-content" style:height=move || chat.with(ChatState::content_height)>
                <div
                    id="chatbox-messages"
                    class="chatbox-messages"
                    node_ref=messages_ref
                    inner_html=move || chat.with(ChatState::transcript_markup)
                ></div>
                <div class="chatbox-footer">
                    <input
                        id="chatbox-input"
                        type="text"
                        placeholder="Type a message..."
                        prop:value=move || chat.with(|c| c.input.clone())
                        on:input=move |ev| chat.update(|c| c.input = event_target_value(&ev))
                        on:keydown=on_keydown
                    />
                    <button on:click=move |_| do_send()>"Send"</button>
                </div>
            </div>
        </div>
    }
}
