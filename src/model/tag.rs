#![deny(missing_docs)]

//! # Tags
//!
//! Tag entries attached to the document root. A tag's `name` is its identity
//! key within the document's ordered tag sequence.

use crate::model::extensions::impl_extensible;
use crate::model::Extensions;
use serde::{Deserialize, Serialize};

/// A named grouping for operations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    /// Unique name within the document's tag sequence.
    pub name: String,
    /// Short description of the tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Additional external documentation for the tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_docs: Option<ExternalDocumentation>,
    /// Open extension map.
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Extensions>,
}

impl Tag {
    /// Creates a tag with the given identity name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the description, builder-style.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A link to documentation hosted outside the document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalDocumentation {
    /// Target URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Short description of the target.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Open extension map.
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Extensions>,
}

impl ExternalDocumentation {
    /// Creates a link pointing at `url`.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::default()
        }
    }
}

impl_extensible!(Tag, ExternalDocumentation);
