use serde::de::DeserializeOwned;
use serde::Serialize;

/// Server-assigned record identifier
pub type EntityId = i64;

/// Trait for a record kept in a remote REST collection
///
/// Records are flat value objects. The `id` is assigned by the remote system
/// and never sent by the client: create and update requests carry the
/// `Payload` type, which has no `id` field.
pub trait Entity: Clone + Serialize + DeserializeOwned + 'static {
    /// Body sent on create and on full-replace update
    type Payload: Clone + Serialize + DeserializeOwned + 'static;

    // ============================================================================
    // Instance data
    // ============================================================================

    /// Server-assigned id
    fn id(&self) -> EntityId;

    /// Human readable name of the record (used in confirmations)
    fn display_name(&self) -> &str;

    /// Copy the editable fields out of the record
    fn to_payload(&self) -> Self::Payload;

    // ============================================================================
    // Class metadata
    // ============================================================================

    /// REST collection segment, e.g. "products"
    fn collection_name() -> &'static str;

    /// UI name, singular (e.g. "Product")
    fn element_name() -> &'static str;

    /// UI name, plural (e.g. "Products")
    fn list_name() -> &'static str;
}

/// `true` when an optional text field is present and non-empty
pub fn has_text(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

/// Trim a text field and turn an empty result into `None`
pub fn normalize_optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_text() {
        assert!(has_text(&Some("a".into())));
        assert!(has_text(&Some("   ".into())));
        assert!(!has_text(&Some(String::new())));
        assert!(!has_text(&None));
    }

    #[test]
    fn test_normalize_optional() {
        assert_eq!(normalize_optional("  x "), Some("x".to_string()));
        assert_eq!(normalize_optional("   "), None);
    }
}
