//! Session storage seam.

use dashmap::DashMap;

/// Key-value session storage - the browser's session store in the web host.
///
/// Values live for the session only; nothing here is durable.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: String);
    fn remove(&self, key: &str);
}

/// In-memory store for native hosts and tests.
#[derive(Default)]
pub struct MemorySessionStore {
    values: DashMap<String, String>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).map(|entry| entry.value().clone())
    }

    fn set(&self, key: &str, value: String) {
        self.values.insert(key.to_string(), value);
    }

    fn remove(&self, key: &str) {
        self.values.remove(key);
    }
}
