// SPDX-License-Identifier: MPL-2.0
//! Toast kinds and identifiers.

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// Unique identifier for a shown toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl ToastId {
    /// Creates a new unique toast ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

/// Severity of a toast; selects the template it is rendered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Success,
    Danger,
    Warning,
    Info,
}

impl Kind {
    pub const ALL: [Kind; 4] = [Kind::Success, Kind::Danger, Kind::Warning, Kind::Info];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Success => "success",
            Kind::Danger => "danger",
            Kind::Warning => "warning",
            Kind::Info => "info",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Kind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Kind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| Error::TemplateNotFound(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_ids_are_unique() {
        assert_ne!(ToastId::new(), ToastId::new());
    }

    #[test]
    fn kinds_parse_from_their_names() {
        for kind in Kind::ALL {
            assert_eq!(kind.as_str().parse::<Kind>(), Ok(kind));
        }
    }

    #[test]
    fn unknown_kind_is_template_not_found() {
        assert_eq!(
            "nonexistent-kind".parse::<Kind>(),
            Err(Error::TemplateNotFound("nonexistent-kind".into()))
        );
        assert!("Success".parse::<Kind>().is_err());
    }
}
