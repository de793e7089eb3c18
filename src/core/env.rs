use std::env;

/// Insertion-ordered environment store owned by the session.
///
/// Keys are unique; setting an existing key overwrites its value in place.
/// The array handed to child processes is a derived snapshot, rebuilt only
/// when an entry changed since it was last materialized.
#[derive(Debug, Default)]
pub struct EnvStore {
    entries: Vec<(String, String)>,
    snapshot: Option<Vec<(String, String)>>,
    stale: bool,
}

impl EnvStore {
    pub fn new() -> Self {
        EnvStore {
            entries: Vec::new(),
            snapshot: None,
            stale: false,
        }
    }

    /// Seeds the store from the environment the shell itself was started
    /// with, preserving order.
    pub fn from_process() -> Self {
        let mut store = EnvStore::new();
        for (key, value) in env::vars() {
            store.set(&key, &value);
        }
        store
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key.as_str() == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn set(&mut self, name: &str, value: &str) {
        if let Some(entry) = self
            .entries
            .iter_mut()
            .find(|(key, _)| key.as_str() == name)
        {
            entry.1 = value.to_string();
        } else {
            self.entries.push((name.to_string(), value.to_string()));
        }
        self.stale = true;
    }

    pub fn unset(&mut self, name: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(key, _)| key.as_str() != name);
        let removed = self.entries.len() != before;
        if removed {
            self.stale = true;
        }
        removed
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Snapshot of the store for `exec`, regenerated only when an entry was
    /// added, changed, or removed since the last call.
    pub fn materialize(&mut self) -> &[(String, String)] {
        if self.stale || self.snapshot.is_none() {
            self.snapshot = Some(self.entries.clone());
            self.stale = false;
        }
        self.snapshot.as_deref().unwrap_or(&[])
    }
}
