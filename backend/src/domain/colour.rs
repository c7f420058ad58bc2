//! Colour value fetched from the hexbot.

use std::fmt;

/// Opaque colour value such as `#228B22`.
///
/// No format is enforced. A freshly fetched colour may be empty; the
/// persister refuses to store it in that case.
///
/// # Examples
/// ```
/// use hexbot::domain::Colour;
///
/// let colour = Colour::from("#228B22");
/// assert_eq!(colour.as_str(), "#228B22");
/// assert!(!colour.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Colour(String);

impl Colour {
    /// Wrap a raw value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the value as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Whether the value is the empty string.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume the colour and return the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for Colour {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<String> for Colour {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Colour {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}
