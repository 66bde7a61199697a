#![deny(missing_docs)]

//! # Merge Collaborator
//!
//! The field-level combine contract used when two fragments describe the
//! same entity: the overlay's set fields win, the base fills the gaps. The
//! deep per-field policy is an external contract; this crate ships only the
//! shallow implementations the tag merge needs, and
//! [`add_tag_with`](crate::assembly::tags::add_tag_with) accepts any
//! replacement.

use crate::model::{Extensible, Extensions, ExternalDocumentation, Tag};

/// Combines two same-identity values field by field.
pub trait Merge: Sized {
    /// Produces the merged value; `overlay`'s set fields win on conflict and
    /// `base` fills the gaps.
    fn merge(base: &Self, overlay: &Self) -> Self;
}

impl Merge for Tag {
    fn merge(base: &Self, overlay: &Self) -> Self {
        Self {
            name: overlay.name.clone(),
            description: overlay_option(&base.description, &overlay.description),
            external_docs: match (&base.external_docs, &overlay.external_docs) {
                (Some(base_docs), Some(overlay_docs)) => {
                    Some(ExternalDocumentation::merge(base_docs, overlay_docs))
                }
                (base_docs, overlay_docs) => overlay_docs.clone().or_else(|| base_docs.clone()),
            },
            extensions: merge_extensions(base, overlay),
        }
    }
}

impl Merge for ExternalDocumentation {
    fn merge(base: &Self, overlay: &Self) -> Self {
        Self {
            url: overlay_option(&base.url, &overlay.url),
            description: overlay_option(&base.description, &overlay.description),
            extensions: merge_extensions(base, overlay),
        }
    }
}

/// Overlay-wins combine for a single optional field.
fn overlay_option<T: Clone>(base: &Option<T>, overlay: &Option<T>) -> Option<T> {
    overlay.clone().or_else(|| base.clone())
}

/// Union of the extension maps; overlay entries win, base order first.
fn merge_extensions<E: Extensible>(base: &E, overlay: &E) -> Option<Extensions> {
    match (base.extensions(), overlay.extensions()) {
        (None, None) => None,
        (base_map, overlay_map) => {
            let mut merged = base_map.cloned().unwrap_or_default();
            if let Some(overlay_map) = overlay_map {
                for (name, value) in overlay_map {
                    merged.insert(name.clone(), value.clone());
                }
            }
            Some(merged)
        }
    }
}
