#![deny(missing_docs)]

//! # Operations and Responses
//!
//! One HTTP operation inside a path item, plus its response collection. The
//! responses container is created lazily on first access and never replaced
//! once present (see [`assembly::accessors`](crate::assembly::accessors)).

use crate::model::extensions::impl_extensible;
use crate::model::{collections, Content, Extensions, Parameter, RequestBody};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One HTTP operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    /// Names of the tags this operation belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Short summary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Longer description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Unique operation identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_id: Option<String>,
    /// Operation parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<Parameter>>,
    /// Request payload description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_body: Option<RequestBody>,
    /// Response collection, created on first access.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responses: Option<ApiResponses>,
    /// Whether the operation is deprecated.
    #[serde(default)]
    pub deprecated: bool,
    /// Open extension map.
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Extensions>,
}

impl Operation {
    /// Creates an empty operation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a parameter, creating the list on first use.
    pub fn add_parameter(&mut self, parameter: Parameter) {
        collections::add_item(&mut self.parameters, Some(parameter));
    }
}

/// Mapping from status code (or the reserved `default` key) to response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponses {
    /// Responses keyed by status code string, in insertion order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responses: Option<IndexMap<String, ApiResponse>>,
    /// Open extension map.
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Extensions>,
}

impl ApiResponses {
    /// Key of the catch-all response entry.
    pub const DEFAULT: &'static str = "default";

    /// Creates an empty response collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites the response for `status`.
    pub fn add_response(&mut self, status: impl Into<String>, response: ApiResponse) {
        collections::add_entry(&mut self.responses, status, Some(response));
    }

    /// Removes the response for `status`, if present.
    pub fn remove_response(&mut self, status: &str) {
        collections::remove_entry(&mut self.responses, status);
    }

    /// The response registered for `status`.
    pub fn response(&self, status: &str) -> Option<&ApiResponse> {
        self.responses.as_ref().and_then(|map| map.get(status))
    }

    /// The catch-all `default` response, if registered.
    pub fn default_response(&self) -> Option<&ApiResponse> {
        self.response(Self::DEFAULT)
    }

    /// Registers the catch-all `default` response.
    pub fn set_default_response(&mut self, response: ApiResponse) {
        self.add_response(Self::DEFAULT, response);
    }
}

/// A single response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    /// Short description of the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Per-media-type payload descriptions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Content>,
    /// Open extension map.
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Extensions>,
}

impl ApiResponse {
    /// Creates a response with the given description.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
            ..Self::default()
        }
    }
}

impl_extensible!(Operation, ApiResponses, ApiResponse);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_responses_default_key() {
        let mut responses = ApiResponses::new();
        responses.add_response("200", ApiResponse::new("ok"));
        responses.set_default_response(ApiResponse::new("fallback"));

        assert_eq!(
            responses.default_response().unwrap().description.as_deref(),
            Some("fallback")
        );
        assert_eq!(
            responses.response("200").unwrap().description.as_deref(),
            Some("ok")
        );
    }

    #[test]
    fn test_responses_preserve_insertion_order() {
        let mut responses = ApiResponses::new();
        responses.add_response("404", ApiResponse::new("missing"));
        responses.add_response("200", ApiResponse::new("ok"));

        let codes: Vec<&str> = responses
            .responses
            .as_ref()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(codes, ["404", "200"]);
    }

    #[test]
    fn test_remove_response_absent_map_is_noop() {
        let mut responses = ApiResponses::new();
        responses.remove_response("200");
        assert!(responses.responses.is_none());
    }

    #[test]
    fn test_add_parameter_creates_list() {
        let mut operation = Operation::new();
        assert!(operation.parameters.is_none());

        operation.add_parameter(Parameter::new("limit", crate::model::ParameterIn::Query));
        assert_eq!(operation.parameters.as_ref().unwrap().len(), 1);
    }
}
