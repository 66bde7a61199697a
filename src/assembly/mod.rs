#![deny(missing_docs)]

//! # Assembly Engine
//!
//! The reconciliation operations an external discovery/merge producer calls
//! while populating a document tree:
//!
//! - **accessors**: fetch-or-create substructure on the root and operations.
//! - **reconcile**: schema-channel exclusivity and default media-type expansion.
//! - **tags**: merge-by-name for the document's ordered tag sequence.
//! - **merge**: the field-level combine contract for same-identity entities.
//! - **refs**: trailing name extraction from `$ref` strings.

pub mod accessors;
pub mod merge;
pub mod reconcile;
pub mod refs;
pub mod tags;

pub use accessors::{components, paths, responses};
pub use merge::Merge;
pub use reconcile::{
    parameter_has_schema, parameter_schemas, request_body_has_schema, set_parameter_schema,
    set_request_body_schema,
};
pub use refs::name_from_ref;
pub use tags::{add_tag, add_tag_with};
