//! Expense identifiers
//!
//! New records get a random UUID. Ids written by earlier versions of the app
//! (millisecond timestamps) are opaque strings and are kept verbatim.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Number of characters shown by [`ExpenseId::short`]
const SHORT_LEN: usize = 8;

/// Opaque identifier of an expense record
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(String);

impl ExpenseId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Get the id as stored
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Abbreviated form for tables
    pub fn short(&self) -> &str {
        match self.0.char_indices().nth(SHORT_LEN) {
            Some((idx, _)) => &self.0[..idx],
            None => &self.0,
        }
    }

    /// Whether `prefix` abbreviates this id
    pub fn matches_prefix(&self, prefix: &str) -> bool {
        !prefix.is_empty() && self.0.starts_with(prefix)
    }
}

impl Default for ExpenseId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Error for blank identifiers
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expense id cannot be empty")]
pub struct EmptyIdError;

impl FromStr for ExpenseId {
    type Err = EmptyIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(EmptyIdError);
        }
        Ok(Self(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ids_are_unique() {
        let ids: std::collections::HashSet<_> = (0..1000).map(|_| ExpenseId::new()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_short() {
        let id: ExpenseId = "550e8400-e29b-41d4-a716-446655440000".parse().unwrap();
        assert_eq!(id.short(), "550e8400");

        let legacy: ExpenseId = "1714".parse().unwrap();
        assert_eq!(legacy.short(), "1714");
    }

    #[test]
    fn test_legacy_id_round_trip() {
        let json = r#""1714564800000""#;
        let id: ExpenseId = serde_json::from_str(json).unwrap();
        assert_eq!(id.as_str(), "1714564800000");
        assert_eq!(serde_json::to_string(&id).unwrap(), json);
    }

    #[test]
    fn test_matches_prefix() {
        let id: ExpenseId = "abcdef12-0000".parse().unwrap();
        assert!(id.matches_prefix("abcd"));
        assert!(!id.matches_prefix("bcd"));
        assert!(!id.matches_prefix(""));
    }

    #[test]
    fn test_parse_rejects_blank() {
        assert_eq!("  ".parse::<ExpenseId>(), Err(EmptyIdError));
    }
}
