use crate::element::{ElementId, Kind};
use std::fmt;

/// Misuse of an element handle
///
/// Both variants are programming errors in the caller: a handle that was
/// never returned by this registry, or an operation aimed at the wrong kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiError {
    /// The handle is past the end of the registry
    OutOfRange { id: ElementId, len: usize },
    /// The operation needs a different element kind
    WrongKind {
        id: ElementId,
        expected: Kind,
        found: Kind,
    },
}

impl fmt::Display for UiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UiError::OutOfRange { id, len } => {
                write!(f, "element {} out of range (registry holds {})", id, len)
            }
            UiError::WrongKind {
                id,
                expected,
                found,
            } => write!(f, "element {} is a {:?}, expected a {:?}", id, found, expected),
        }
    }
}

impl std::error::Error for UiError {}
