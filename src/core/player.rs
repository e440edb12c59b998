//! Participant identification.
//!
//! ## ParticipantId
//!
//! Participants are identified by the name they register with. Names are
//! compared by exact text equality, so `"alice"` and `"Alice"` are two
//! different participants.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Unique participant identifier.
///
/// Implements `Borrow<str>` so maps keyed by `ParticipantId` can be queried
/// with a plain `&str`.
///
/// ```
/// use herd_tally::core::ParticipantId;
///
/// let alice = ParticipantId::new("Alice");
/// assert_eq!(alice.as_str(), "Alice");
/// assert_eq!(alice, "Alice");
/// assert_eq!(format!("{}", alice), "Alice");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantId(String);

impl ParticipantId {
    /// Create a new participant ID.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the participant's name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the ID and return the underlying name.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ParticipantId {
    fn from(name: &str) -> Self {
        Self(name.to_owned())
    }
}

impl From<String> for ParticipantId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl From<&String> for ParticipantId {
    fn from(name: &String) -> Self {
        Self(name.clone())
    }
}

impl From<&ParticipantId> for ParticipantId {
    fn from(id: &ParticipantId) -> Self {
        id.clone()
    }
}

impl Borrow<str> for ParticipantId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ParticipantId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for ParticipantId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ParticipantId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl PartialEq<ParticipantId> for &str {
    fn eq(&self, other: &ParticipantId) -> bool {
        *self == other.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashMap;

    #[test]
    fn test_participant_id_basics() {
        let id = ParticipantId::new("Alice");
        assert_eq!(id.as_str(), "Alice");
        assert_eq!(format!("{}", id), "Alice");
        assert_eq!(id.clone().into_inner(), "Alice".to_string());
    }

    #[test]
    fn test_participant_id_conversions() {
        let owned = String::from("Bob");
        assert_eq!(ParticipantId::from("Bob"), ParticipantId::from(owned.clone()));
        assert_eq!(ParticipantId::from(&owned), ParticipantId::new("Bob"));
    }

    #[test]
    fn test_names_are_case_sensitive() {
        assert_ne!(ParticipantId::new("alice"), ParticipantId::new("Alice"));
    }

    #[test]
    fn test_borrowed_lookup() {
        let mut map: FxHashMap<ParticipantId, u32> = FxHashMap::default();
        map.insert(ParticipantId::new("Charlie"), 3);

        assert_eq!(map.get("Charlie"), Some(&3));
        assert_eq!(map.get("Dave"), None);
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let id = ParticipantId::new("Dave");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"Dave\"");

        let back: ParticipantId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
