#![deny(missing_docs)]

//! # Parameters and Request Bodies
//!
//! A parameter may describe its value either through a standalone `schema`
//! or through a `content` map of media types. Storage permits both fields to
//! be set at once; keeping exactly one channel authoritative is the job of
//! the reconciler in [`assembly::reconcile`](crate::assembly::reconcile).
//! Request bodies have no standalone schema field — a schema always lives
//! inside a media type.

use crate::model::extensions::impl_extensible;
use crate::model::{Content, Extensions, Schema};
use serde::{Deserialize, Serialize};

/// The location a parameter is taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterIn {
    /// Path template segment.
    Path,
    /// Query string.
    #[default]
    Query,
    /// HTTP header.
    Header,
    /// Cookie.
    Cookie,
}

/// A single operation parameter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    /// Parameter name.
    pub name: String,
    /// Location of the parameter.
    #[serde(rename = "in")]
    pub parameter_in: ParameterIn,
    /// Short description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the parameter must be supplied.
    #[serde(default)]
    pub required: bool,
    /// Whether the parameter is deprecated.
    #[serde(default)]
    pub deprecated: bool,
    /// Standalone value description. Mutually exclusive with `content` at
    /// the specification level.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<Schema>,
    /// Per-media-type value descriptions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Content>,
    /// Open extension map.
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Extensions>,
}

impl Parameter {
    /// Creates a parameter at the given location.
    pub fn new(name: impl Into<String>, parameter_in: ParameterIn) -> Self {
        Self {
            name: name.into(),
            parameter_in,
            ..Self::default()
        }
    }
}

/// The request payload of an operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestBody {
    /// Short description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether a body must be supplied.
    #[serde(default)]
    pub required: bool,
    /// Per-media-type payload descriptions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Content>,
    /// Open extension map.
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Extensions>,
}

impl RequestBody {
    /// Creates an empty request body.
    pub fn new() -> Self {
        Self::default()
    }
}

impl_extensible!(Parameter, RequestBody);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_defaults() {
        let param = Parameter::new("limit", ParameterIn::Query);
        assert_eq!(param.name, "limit");
        assert_eq!(param.parameter_in, ParameterIn::Query);
        assert!(!param.required);
        assert!(param.schema.is_none());
        assert!(param.content.is_none());
    }

    #[test]
    fn test_request_body_has_no_standalone_schema_channel() {
        let body = RequestBody::new();
        assert!(body.content.is_none());
    }
}
