#![deny(missing_docs)]

//! # OAS Assembly
//!
//! Document-model assembly and reconciliation for API-description trees.
//!
//! The crate builds and repairs an in-memory document populated
//! incrementally from overlapping sources: static descriptor fragments,
//! programmatic discovery passes, fragment merges. The tree itself lives in
//! [`model`]; the reconciliation rules — lazy creation of missing
//! substructure, schema-channel exclusivity, default media-type expansion,
//! and merge-by-name tag handling — live in [`assembly`]. Encoding and
//! decoding of the finished document belong to external layers; the engine
//! only guarantees the tree they consume is consistent.

/// Shared error types.
pub mod error;

/// Injected assembly configuration.
pub mod config;

/// The document tree node types.
pub mod model;

/// Reconciliation operations over the tree.
pub mod assembly;

pub use assembly::{
    add_tag, add_tag_with, components, name_from_ref, parameter_has_schema, parameter_schemas,
    paths, request_body_has_schema, responses, set_parameter_schema, set_request_body_schema,
    Merge,
};
pub use config::DefaultMediaTypes;
pub use error::{ModelError, ModelResult};
pub use model::{
    ApiResponse, ApiResponses, Components, Content, Document, Extensible, Extensions,
    ExternalDocumentation, FrozenList, FrozenMap, HttpMethod, Info, MediaType, Operation,
    Parameter, ParameterIn, PathItem, Paths, RequestBody, Schema, Tag, OPENAPI_VERSION,
};
