#![deny(missing_docs)]

//! # Tag Merge Engine
//!
//! Keeps the document's ordered tag sequence free of duplicate names no
//! matter which discovery pass a tag arrives from. A colliding tag is
//! merged into the existing entry in place; the sequence order and length
//! are preserved.

use crate::assembly::merge::Merge;
use crate::model::{collections, Document, Tag};

/// Adds `tag` to the document, merging attributes into an existing tag of
/// the same name via the default [`Merge`] policy.
pub fn add_tag(document: &mut Document, tag: Tag) {
    add_tag_with(document, tag, Tag::merge);
}

/// Adds `tag` to the document with an explicit merge collaborator.
///
/// An absent or empty sequence gets the tag appended. Otherwise the first
/// existing tag whose name equals the new tag's name (exact, case-sensitive)
/// is replaced in its original position by `merge(existing, new)`; the
/// sequence never grows on a merge. Without a name match the tag is
/// appended at the end.
pub fn add_tag_with(
    document: &mut Document,
    tag: Tag,
    merge: impl FnOnce(&Tag, &Tag) -> Tag,
) {
    if document.tags.as_ref().map_or(true, |tags| tags.is_empty()) {
        collections::add_item(&mut document.tags, Some(tag));
        return;
    }

    if let Some(tags) = document.tags.as_mut() {
        match tags.iter().position(|existing| existing.name == tag.name) {
            Some(index) => {
                tracing::debug!(name = %tag.name, index, "merging duplicate tag");
                tags[index] = merge(&tags[index], &tag);
            }
            None => tags.push(tag),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_to_absent_sequence() {
        let mut doc = Document::new();
        add_tag(&mut doc, Tag::new("c"));

        let tags = doc.tags.as_ref().unwrap();
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].name, "c");
    }

    #[test]
    fn test_append_to_empty_sequence() {
        let mut doc = Document::new();
        doc.tags = Some(Vec::new());
        add_tag(&mut doc, Tag::new("c"));
        assert_eq!(doc.tags.as_ref().unwrap().len(), 1);
    }

    #[test]
    fn test_append_new_name_at_end() {
        let mut doc = Document::new();
        add_tag(&mut doc, Tag::new("a"));
        add_tag(&mut doc, Tag::new("b"));
        add_tag(&mut doc, Tag::new("c"));

        let names: Vec<&str> = doc
            .tags
            .as_ref()
            .unwrap()
            .iter()
            .map(|tag| tag.name.as_str())
            .collect();
        assert_eq!(names, ["a", "b", "c"]);
    }

    #[test]
    fn test_merge_preserves_order_and_count() {
        // Case: [a, b] plus a richer "a".
        // Expect: length 2, position 0 merged, position 1 untouched.
        let mut doc = Document::new();
        add_tag(&mut doc, Tag::new("a"));
        add_tag(&mut doc, Tag::new("b"));
        add_tag(&mut doc, Tag::new("a").description("x"));

        let tags = doc.tags.as_ref().unwrap();
        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0].name, "a");
        assert_eq!(tags[0].description.as_deref(), Some("x"));
        assert_eq!(tags[1].name, "b");
        assert!(tags[1].description.is_none());
    }

    #[test]
    fn test_names_match_case_sensitively() {
        let mut doc = Document::new();
        add_tag(&mut doc, Tag::new("Accounts"));
        add_tag(&mut doc, Tag::new("accounts"));
        assert_eq!(doc.tags.as_ref().unwrap().len(), 2);
    }

    #[test]
    fn test_first_match_is_merged() {
        let mut doc = Document::new();
        doc.tags = Some(vec![
            Tag::new("a").description("first"),
            Tag::new("b"),
            Tag::new("a").description("second"),
        ]);

        add_tag(&mut doc, Tag::new("a").description("merged"));

        let tags = doc.tags.as_ref().unwrap();
        assert_eq!(tags.len(), 3);
        assert_eq!(tags[0].description.as_deref(), Some("merged"));
        assert_eq!(tags[2].description.as_deref(), Some("second"));
    }

    #[test]
    fn test_custom_merge_collaborator() {
        let mut doc = Document::new();
        add_tag(&mut doc, Tag::new("a").description("existing"));

        // A collaborator that keeps the base's fields entirely.
        add_tag_with(&mut doc, Tag::new("a").description("incoming"), |base, _| {
            base.clone()
        });

        let tags = doc.tags.as_ref().unwrap();
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].description.as_deref(), Some("existing"));
    }
}
