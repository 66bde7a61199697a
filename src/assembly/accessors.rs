#![deny(missing_docs)]

//! # Lazy Accessors
//!
//! Fetch-or-create accessors for the substructure a discovery pass needs
//! before it can attach data. Each accessor is idempotent: it creates an
//! empty container on first access, never overwrites an existing one, and
//! never mutates sibling state.

use crate::model::{ApiResponses, Components, Document, Operation, Paths};

/// The document's shared components, created empty if absent.
pub fn components(document: &mut Document) -> &mut Components {
    document.components.get_or_insert_with(Components::new)
}

/// The document's path collection, created empty if absent.
pub fn paths(document: &mut Document) -> &mut Paths {
    document.paths.get_or_insert_with(Paths::new)
}

/// The operation's response collection, created empty if absent.
pub fn responses(operation: &mut Operation) -> &mut ApiResponses {
    operation.responses.get_or_insert_with(ApiResponses::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ApiResponse, Info, Schema};

    #[test]
    fn test_components_created_once() {
        // Case: two accesses on a document without components.
        // Expect: the same live instance both times.
        let mut doc = Document::new();
        assert!(doc.components.is_none());

        let first = components(&mut doc) as *const Components;
        let second = components(&mut doc) as *const Components;
        assert_eq!(first, second);
    }

    #[test]
    fn test_components_accessor_keeps_existing_value() {
        let mut doc = Document::new();
        components(&mut doc).add_schema("User", Schema::typed("object"));

        // A manually set value is returned unchanged by a later access.
        assert!(components(&mut doc)
            .schemas
            .as_ref()
            .unwrap()
            .contains_key("User"));
    }

    #[test]
    fn test_accessors_do_not_touch_siblings() {
        let mut doc = Document::new();
        doc.info = Some(Info::new("Example API", "1.0.0"));

        paths(&mut doc);
        components(&mut doc);

        assert_eq!(
            doc.info.as_ref().unwrap().title.as_deref(),
            Some("Example API")
        );
        assert!(doc.tags.is_none());
    }

    #[test]
    fn test_responses_created_once() {
        let mut operation = Operation::new();
        responses(&mut operation).add_response("200", ApiResponse::new("ok"));

        // The container created by the first access is still the live one.
        assert!(responses(&mut operation).response("200").is_some());

        let first = responses(&mut operation) as *const ApiResponses;
        let second = responses(&mut operation) as *const ApiResponses;
        assert_eq!(first, second);
    }
}
