#![deny(missing_docs)]

//! # Paths
//!
//! The path collection maps path templates to path items, each holding at
//! most one operation per HTTP method.

use crate::model::extensions::impl_extensible;
use crate::model::{collections, Extensions, Operation, Parameter};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// HTTP methods addressable on a path item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// GET
    Get,
    /// PUT
    Put,
    /// POST
    Post,
    /// DELETE
    Delete,
    /// OPTIONS
    Options,
    /// HEAD
    Head,
    /// PATCH
    Patch,
    /// TRACE
    Trace,
}

impl HttpMethod {
    /// All methods in canonical declaration order.
    pub const ALL: [HttpMethod; 8] = [
        HttpMethod::Get,
        HttpMethod::Put,
        HttpMethod::Post,
        HttpMethod::Delete,
        HttpMethod::Options,
        HttpMethod::Head,
        HttpMethod::Patch,
        HttpMethod::Trace,
    ];
}

/// Mapping from path template to path item, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paths {
    /// Path items keyed by path template.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path_items: Option<IndexMap<String, PathItem>>,
    /// Open extension map.
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Extensions>,
}

impl Paths {
    /// Creates an empty path collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites the path item under `path`.
    pub fn add_path_item(&mut self, path: impl Into<String>, item: PathItem) {
        collections::add_entry(&mut self.path_items, path, Some(item));
    }

    /// Removes the path item under `path`, if present.
    pub fn remove_path_item(&mut self, path: &str) {
        collections::remove_entry(&mut self.path_items, path);
    }

    /// The path item under `path`.
    pub fn path_item(&self, path: &str) -> Option<&PathItem> {
        self.path_items.as_ref().and_then(|map| map.get(path))
    }

    /// Mutable access to the path item under `path`.
    pub fn path_item_mut(&mut self, path: &str) -> Option<&mut PathItem> {
        self.path_items.as_mut().and_then(|map| map.get_mut(path))
    }
}

/// Operations available on a single path template.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathItem {
    /// Short summary for the whole path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Longer description for the whole path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// GET operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub get: Option<Operation>,
    /// PUT operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub put: Option<Operation>,
    /// POST operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post: Option<Operation>,
    /// DELETE operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete: Option<Operation>,
    /// OPTIONS operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Operation>,
    /// HEAD operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub head: Option<Operation>,
    /// PATCH operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patch: Option<Operation>,
    /// TRACE operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<Operation>,
    /// Parameters shared by every operation on this path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<Parameter>>,
    /// Open extension map.
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Extensions>,
}

impl PathItem {
    /// Creates an empty path item.
    pub fn new() -> Self {
        Self::default()
    }

    /// The operation registered for `method`.
    pub fn operation(&self, method: HttpMethod) -> Option<&Operation> {
        self.slot(method).as_ref()
    }

    /// Mutable access to the operation registered for `method`.
    pub fn operation_mut(&mut self, method: HttpMethod) -> Option<&mut Operation> {
        self.slot_mut(method).as_mut()
    }

    /// Registers `operation` under `method`, replacing any previous one.
    pub fn set_operation(&mut self, method: HttpMethod, operation: Operation) {
        *self.slot_mut(method) = Some(operation);
    }

    /// Registered operations in canonical method order.
    pub fn operations(&self) -> impl Iterator<Item = (HttpMethod, &Operation)> {
        HttpMethod::ALL
            .iter()
            .filter_map(move |&method| self.operation(method).map(|op| (method, op)))
    }

    fn slot(&self, method: HttpMethod) -> &Option<Operation> {
        match method {
            HttpMethod::Get => &self.get,
            HttpMethod::Put => &self.put,
            HttpMethod::Post => &self.post,
            HttpMethod::Delete => &self.delete,
            HttpMethod::Options => &self.options,
            HttpMethod::Head => &self.head,
            HttpMethod::Patch => &self.patch,
            HttpMethod::Trace => &self.trace,
        }
    }

    fn slot_mut(&mut self, method: HttpMethod) -> &mut Option<Operation> {
        match method {
            HttpMethod::Get => &mut self.get,
            HttpMethod::Put => &mut self.put,
            HttpMethod::Post => &mut self.post,
            HttpMethod::Delete => &mut self.delete,
            HttpMethod::Options => &mut self.options,
            HttpMethod::Head => &mut self.head,
            HttpMethod::Patch => &mut self.patch,
            HttpMethod::Trace => &mut self.trace,
        }
    }
}

impl_extensible!(Paths, PathItem);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get_operation() {
        let mut item = PathItem::new();
        let mut op = Operation::new();
        op.operation_id = Some("listUsers".into());
        item.set_operation(HttpMethod::Get, op);

        assert_eq!(
            item.operation(HttpMethod::Get)
                .unwrap()
                .operation_id
                .as_deref(),
            Some("listUsers")
        );
        assert!(item.operation(HttpMethod::Post).is_none());
    }

    #[test]
    fn test_operations_follow_canonical_order() {
        let mut item = PathItem::new();
        item.set_operation(HttpMethod::Delete, Operation::new());
        item.set_operation(HttpMethod::Get, Operation::new());

        let methods: Vec<HttpMethod> = item.operations().map(|(method, _)| method).collect();
        assert_eq!(methods, [HttpMethod::Get, HttpMethod::Delete]);
    }

    #[test]
    fn test_paths_preserve_insertion_order() {
        let mut paths = Paths::new();
        paths.add_path_item("/users/{id}", PathItem::new());
        paths.add_path_item("/users", PathItem::new());

        let templates: Vec<&str> = paths
            .path_items
            .as_ref()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(templates, ["/users/{id}", "/users"]);
    }
}
