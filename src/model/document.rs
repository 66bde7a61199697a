#![deny(missing_docs)]

//! # Document Root
//!
//! The root node of the assembled tree, plus the shared `components`
//! definitions. `components` and `paths` start absent and are created on
//! first access by [`assembly::accessors`](crate::assembly::accessors)
//! without disturbing any sibling field.

use crate::model::extensions::impl_extensible;
use crate::model::{
    collections, ApiResponse, Extensions, ExternalDocumentation, Parameter, Paths, RequestBody,
    Schema, Tag,
};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Specification version stamped on newly created documents.
pub const OPENAPI_VERSION: &str = "3.0.3";

/// Root node of an assembled API-description tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Specification version of the document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub openapi: Option<String>,
    /// Descriptive metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<Info>,
    /// Document-level external documentation link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_docs: Option<ExternalDocumentation>,
    /// Ordered tag sequence; tag names are unique (see
    /// [`assembly::tags`](crate::assembly::tags)).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    /// Shared definitions, created on first access.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<Components>,
    /// Path collection, created on first access.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paths: Option<Paths>,
    /// Open extension map.
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Extensions>,
}

impl Document {
    /// Creates an empty document stamped with [`OPENAPI_VERSION`].
    pub fn new() -> Self {
        Self {
            openapi: Some(OPENAPI_VERSION.to_string()),
            ..Self::default()
        }
    }
}

/// Descriptive document metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Info {
    /// Document title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Document version (of the described API, not of the specification).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Longer description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Open extension map.
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Extensions>,
}

impl Info {
    /// Creates metadata with a title and version.
    pub fn new(title: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            version: Some(version.into()),
            ..Self::default()
        }
    }
}

/// Shared definitions referenced from elsewhere in the tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Components {
    /// Named schema definitions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schemas: Option<IndexMap<String, Schema>>,
    /// Named response definitions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responses: Option<IndexMap<String, ApiResponse>>,
    /// Named parameter definitions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<IndexMap<String, Parameter>>,
    /// Named request body definitions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_bodies: Option<IndexMap<String, RequestBody>>,
    /// Open extension map.
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Extensions>,
}

impl Components {
    /// Creates an empty components section.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a named schema, creating the map on first use.
    pub fn add_schema(&mut self, name: impl Into<String>, schema: Schema) {
        collections::add_entry(&mut self.schemas, name, Some(schema));
    }

    /// Removes a named schema, if present.
    pub fn remove_schema(&mut self, name: &str) {
        collections::remove_entry(&mut self.schemas, name);
    }

    /// Registers a named response, creating the map on first use.
    pub fn add_response(&mut self, name: impl Into<String>, response: ApiResponse) {
        collections::add_entry(&mut self.responses, name, Some(response));
    }

    /// Registers a named parameter, creating the map on first use.
    pub fn add_parameter(&mut self, name: impl Into<String>, parameter: Parameter) {
        collections::add_entry(&mut self.parameters, name, Some(parameter));
    }

    /// Registers a named request body, creating the map on first use.
    pub fn add_request_body(&mut self, name: impl Into<String>, request_body: RequestBody) {
        collections::add_entry(&mut self.request_bodies, name, Some(request_body));
    }
}

impl_extensible!(Document, Info, Components);
