//! Interned actor identifiers.
//!
//! Actor names are repeated on every step that references them, so they are
//! stored once in a global [`string_interner`] and passed around as a small
//! `Copy` handle.

use std::{
    fmt,
    sync::{Mutex, MutexGuard, OnceLock},
};

use string_interner::{DefaultStringInterner, DefaultSymbol};

static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

fn interner() -> MutexGuard<'static, DefaultStringInterner> {
    INTERNER
        .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
        .lock()
        .expect("Failed to acquire interner lock")
}

/// Identifier of an actor (participant) in a sequence.
///
/// Two identifiers compare equal exactly when their names are equal.
///
/// # Examples
///
/// ```
/// use seqline_core::identifier::Id;
///
/// let bob = Id::new("Bob");
/// assert_eq!(bob, Id::from("Bob"));
/// assert_eq!(bob, "Bob");
/// assert!(!bob.is_empty());
/// assert!(Id::new("").is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id(DefaultSymbol);

impl Id {
    /// Creates an `Id` from a name, interning it on first use.
    pub fn new(name: &str) -> Self {
        Self(interner().get_or_intern(name))
    }

    /// Returns `true` if the identifier names nothing.
    ///
    /// Empty identifiers are accepted while a sequence is being built but
    /// never become actors.
    pub fn is_empty(&self) -> bool {
        *self == ""
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let interner = interner();
        let name = interner
            .resolve(self.0)
            .expect("Symbol should exist in interner");
        f.write_str(name)
    }
}

impl From<&str> for Id {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<&String> for Id {
    fn from(name: &String) -> Self {
        Self::new(name)
    }
}

impl PartialEq<str> for Id {
    fn eq(&self, other: &str) -> bool {
        let interner = interner();
        interner.resolve(self.0) == Some(other)
    }
}

impl PartialEq<&str> for Id {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let id1 = Id::new("Alice");
        let id2 = Id::new("Alice");
        let id3 = Id::new("Bob");

        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
        assert_eq!(id1, "Alice");
    }

    #[test]
    fn test_is_empty() {
        assert!(Id::new("").is_empty());
        assert!(!Id::new(" ").is_empty());
        assert!(!Id::new("Carol").is_empty());
    }

    #[test]
    fn test_display_round_trips_name() {
        let id = Id::new("Payment Service");
        assert_eq!(id.to_string(), "Payment Service");
    }

    #[test]
    fn test_from_string_ref() {
        let name = String::from("Dave");
        assert_eq!(Id::from(&name), Id::new("Dave"));
    }

    #[test]
    fn test_names_are_case_sensitive() {
        assert_ne!(Id::new("maria"), Id::new("Maria"));
    }
}
