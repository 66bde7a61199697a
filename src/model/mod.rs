#![deny(missing_docs)]

//! # Document Model
//!
//! The in-memory node types of the API-description tree and their
//! containment relationships. Every node is a plain mutable value with a
//! single owner; optional substructure is `Option`, collections preserve
//! insertion order, and the open extension map is available on every node
//! through [`Extensible`].

pub mod collections;
pub mod document;
pub mod extensions;
pub mod media;
pub mod operation;
pub mod parameter;
pub mod paths;
pub mod tag;

pub use collections::{FrozenList, FrozenMap};
pub use document::{Components, Document, Info, OPENAPI_VERSION};
pub use extensions::{Extensible, Extensions};
pub use media::{Content, MediaType, Schema};
pub use operation::{ApiResponse, ApiResponses, Operation};
pub use parameter::{Parameter, ParameterIn, RequestBody};
pub use paths::{HttpMethod, PathItem, Paths};
pub use tag::{ExternalDocumentation, Tag};
