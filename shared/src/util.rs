//! Small shared utilities

use chrono::{DateTime, Utc};

/// Current UTC timestamp in milliseconds
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Current UTC timestamp
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Generate a prefixed resource id, e.g. `ord-550e8400-e29b-...`
///
/// Used by the stores and the session layer for all generated ids.
pub fn prefixed_id(prefix: &str) -> String {
    format!("{}-{}", prefix, uuid::Uuid::new_v4())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefixed_id_format() {
        let id = prefixed_id("ord");
        assert!(id.starts_with("ord-"));
        assert_eq!(id.len(), "ord-".len() + 36);
    }

    #[test]
    fn test_prefixed_id_unique() {
        assert_ne!(prefixed_id("x"), prefixed_id("x"));
    }
}
