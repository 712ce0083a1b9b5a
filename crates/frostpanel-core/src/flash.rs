//! Keyed flash messages shown above forms and lists.

/// Message severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlashKind {
    Success,
    Info,
    Warning,
    Error,
}

impl FlashKind {
    pub fn title(self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Info => "Info",
            Self::Warning => "Warning",
            Self::Error => "Error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlashMessage {
    pub id: u64,
    /// Area the message belongs to; `None` shows everywhere.
    pub key: Option<String>,
    pub kind: FlashKind,
    pub message: String,
}

/// Ordered flash messages.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FlashStore {
    messages: Vec<FlashMessage>,
    next_id: u64,
}

impl FlashStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, key: Option<&str>, kind: FlashKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(FlashMessage {
            id,
            key: key.map(str::to_string),
            kind,
            message: message.into(),
        });
        id
    }

    /// Remove the messages of `key`, or every message when `key` is `None`.
    pub fn clear(&mut self, key: Option<&str>) {
        match key {
            Some(key) => self.messages.retain(|m| m.key.as_deref() != Some(key)),
            None => self.messages.clear(),
        }
    }

    /// Replace the messages of `key` with a single error.
    pub fn clear_and_add_error(&mut self, key: Option<&str>, message: impl Into<String>) {
        self.clear(key);
        self.add(key, FlashKind::Error, message);
    }

    /// Messages shown in the area `key`: its own plus the unkeyed ones.
    pub fn for_key(&self, key: Option<&str>) -> Vec<FlashMessage> {
        self.messages
            .iter()
            .filter(|m| key.is_none() || m.key.is_none() || m.key.as_deref() == key)
            .cloned()
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_by_key() {
        let mut store = FlashStore::new();
        store.add(Some("search"), FlashKind::Error, "timeout");
        store.add(Some("auth"), FlashKind::Error, "bad password");
        store.clear(Some("search"));

        let remaining = store.for_key(None);
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].message, "bad password");

        store.clear(None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_clear_and_add_replaces() {
        let mut store = FlashStore::new();
        store.add(Some("auth"), FlashKind::Error, "first");
        store.clear_and_add_error(Some("auth"), "second");

        let auth = store.for_key(Some("auth"));
        assert_eq!(auth.len(), 1);
        assert_eq!(auth[0].message, "second");
        assert_eq!(auth[0].kind, FlashKind::Error);
    }

    #[test]
    fn test_unkeyed_messages_show_everywhere() {
        let mut store = FlashStore::new();
        store.add(None, FlashKind::Info, "maintenance tonight");
        store.add(Some("search"), FlashKind::Error, "timeout");

        assert_eq!(store.for_key(Some("auth")).len(), 1);
        assert_eq!(store.for_key(Some("search")).len(), 2);
    }

    #[test]
    fn test_ids_are_unique() {
        let mut store = FlashStore::new();
        let a = store.add(None, FlashKind::Info, "a");
        store.clear(None);
        let b = store.add(None, FlashKind::Info, "b");
        assert_ne!(a, b);
    }
}
