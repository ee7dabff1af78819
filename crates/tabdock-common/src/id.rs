use serde::{Deserialize, Serialize};
use std::fmt;

pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Identity of a tab. Hosts usually pick stable names ("commands",
/// "framebuffer"); tabs created at runtime can use a generated UUID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TabId(String);

impl TabId {
    pub fn new() -> Self {
        Self(new_id())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TabId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for TabId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for TabId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_id_is_valid_uuid() {
        let id = new_id();
        let parsed = uuid::Uuid::parse_str(&id);
        assert!(parsed.is_ok());
        assert_eq!(parsed.unwrap().get_version_num(), 4);
    }

    #[test]
    fn generated_tab_ids_are_unique() {
        assert_ne!(TabId::new(), TabId::new());
    }

    #[test]
    fn tab_id_from_str() {
        let id = TabId::from("commands");
        assert_eq!(id.as_str(), "commands");
        assert_eq!(id.to_string(), "commands");
        assert_eq!(id, TabId::from(String::from("commands")));
    }

    #[test]
    fn tab_id_serializes_as_plain_string() {
        let id = TabId::from("framebuffer");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"framebuffer\"");
        let deserialized: TabId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn tab_id_hash() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(TabId::from("a"));
        set.insert(TabId::from("b"));
        set.insert(TabId::from("a"));
        assert_eq!(set.len(), 2);
    }
}
