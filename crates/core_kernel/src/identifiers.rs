//! Identifier helpers
//!
//! Repositories key entities by opaque strings and never inspect identifier
//! structure. The helper here exists for the callers that mint new ids:
//! a short entity prefix followed by a random UUID, so an id is readable in
//! logs without giving up uniqueness.

use uuid::Uuid;

/// Returns a fresh identifier of the form `PREFIX-uuid`, e.g.
/// `FLT-67e55044-10b1-426f-9247-bb680e5fe0c8`.
pub fn prefixed_id(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefixed_id_format() {
        let id = prefixed_id("FLT");
        assert!(id.starts_with("FLT-"));

        let uuid_part = id.strip_prefix("FLT-").unwrap();
        assert!(Uuid::parse_str(uuid_part).is_ok());
    }

    #[test]
    fn test_prefixed_ids_are_unique() {
        let a = prefixed_id("CMD");
        let b = prefixed_id("CMD");
        assert_ne!(a, b);
    }
}
