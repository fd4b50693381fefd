//! Browser `localStorage` access.
//!
//! SYSTEM CONTEXT
//! ==============
//! Centralizes hydrate-only read/write behavior so components can persist
//! state without repeating web-sys glue. Outside the browser every read
//! misses and every write is dropped.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

/// Read the raw string stored under `key`.
pub fn load_string(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Store `value` under `key`, replacing any previous value.
pub fn save_string(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        if let Err(e) = storage.set_item(key, value) {
            leptos::logging::warn!("localStorage write failed for {key}: {e:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// Somewhere a chat transcript can be saved and restored.
pub trait TranscriptStore {
    fn load(&self) -> Option<String>;
    fn save(&self, markup: &str);
}

/// Transcript store backed by one `localStorage` key.
#[derive(Clone, Copy, Debug)]
pub struct LocalTranscriptStore {
    pub key: &'static str,
}

impl TranscriptStore for LocalTranscriptStore {
    fn load(&self) -> Option<String> {
        load_string(self.key)
    }

    fn save(&self, markup: &str) {
        save_string(self.key, markup);
    }
}
