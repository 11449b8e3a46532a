use std::fmt;
use std::ops::Deref;

/// Validated UTF-8 text owned by the host.
///
/// Holds no reference to the foreign buffer it was copied from and offers
/// no way to mutate its contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OwnedText(Box<str>);

impl OwnedText {
    pub fn empty() -> Self {
        Self(Box::from(""))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for OwnedText {
    fn from(s: String) -> Self {
        Self(s.into_boxed_str())
    }
}

impl From<&str> for OwnedText {
    fn from(s: &str) -> Self {
        Self(Box::from(s))
    }
}

impl Deref for OwnedText {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for OwnedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OwnedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for OwnedText {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for OwnedText {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}
