#![deny(missing_docs)]

//! # Content and Media Types
//!
//! The content map holds one slot per media-type name, in insertion order. A
//! slot may be *declared* before its media-type object exists — discovery
//! passes can register names first and attach the objects later — so a slot
//! is `Option<MediaType>` and the reconciler treats a still-absent slot as a
//! shape error rather than silently skipping it.

use crate::model::extensions::impl_extensible;
use crate::model::Extensions;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Ordered mapping from media-type name to its (possibly still absent) slot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Content {
    media_types: IndexMap<String, Option<MediaType>>,
}

impl Content {
    /// Creates an empty content map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of declared media-type names, populated or not.
    pub fn len(&self) -> usize {
        self.media_types.len()
    }

    /// Whether no media-type name has been declared.
    pub fn is_empty(&self) -> bool {
        self.media_types.is_empty()
    }

    /// Inserts or overwrites the media type under `name`.
    pub fn add_media_type(&mut self, name: impl Into<String>, media_type: MediaType) {
        self.media_types.insert(name.into(), Some(media_type));
    }

    /// Registers `name` without a media-type object. An already populated
    /// slot is left untouched.
    pub fn declare_media_type(&mut self, name: impl Into<String>) {
        self.media_types.entry(name.into()).or_insert(None);
    }

    /// Removes the slot under `name`, preserving the order of the rest.
    pub fn remove_media_type(&mut self, name: &str) {
        self.media_types.shift_remove(name);
    }

    /// The populated media type under `name`, if any.
    pub fn media_type(&self, name: &str) -> Option<&MediaType> {
        self.media_types.get(name).and_then(Option::as_ref)
    }

    /// Mutable access to the populated media type under `name`, if any.
    pub fn media_type_mut(&mut self, name: &str) -> Option<&mut MediaType> {
        self.media_types.get_mut(name).and_then(Option::as_mut)
    }

    /// Declared media-type names in insertion order.
    pub fn media_type_names(&self) -> impl Iterator<Item = &str> {
        self.media_types.keys().map(String::as_str)
    }

    /// All slots in insertion order, absent ones included.
    pub fn slots(&self) -> impl Iterator<Item = (&str, Option<&MediaType>)> {
        self.media_types
            .iter()
            .map(|(name, slot)| (name.as_str(), slot.as_ref()))
    }

    /// Mutable slot iteration in insertion order.
    pub fn slots_mut(&mut self) -> impl Iterator<Item = (&str, &mut Option<MediaType>)> {
        self.media_types
            .iter_mut()
            .map(|(name, slot)| (name.as_str(), slot))
    }
}

/// A single content representation, optionally carrying a schema.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaType {
    /// Value description for this representation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<Schema>,
    /// Example value for this representation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,
    /// Open extension map.
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Extensions>,
}

impl MediaType {
    /// Creates an empty media type.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a media type already carrying `schema`.
    pub fn with_schema(schema: Schema) -> Self {
        Self {
            schema: Some(schema),
            ..Self::default()
        }
    }
}

/// The value/type description attached to a parameter or media type.
///
/// Opaque to the assembly engine beyond presence; the fields exist so
/// fragments from different passes stay distinguishable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    /// JSON Schema `type` keyword.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<String>,
    /// Format modifier (e.g. `int64`, `date-time`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Schema title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Schema description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Reference to a shared definition instead of an inline shape.
    #[serde(rename = "$ref", skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Open extension map.
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Extensions>,
}

impl Schema {
    /// Creates an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a schema with the given `type` keyword.
    pub fn typed(schema_type: impl Into<String>) -> Self {
        Self {
            schema_type: Some(schema_type.into()),
            ..Self::default()
        }
    }

    /// Creates a schema referencing a shared definition.
    pub fn reference_to(reference: impl Into<String>) -> Self {
        Self {
            reference: Some(reference.into()),
            ..Self::default()
        }
    }
}

impl_extensible!(MediaType, Schema);
