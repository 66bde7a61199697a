#![deny(missing_docs)]

//! # Extensible Capability
//!
//! Open extension storage shared by every node type: an ordered mapping from
//! extension name to an opaque JSON value, exposed through a small trait
//! instead of a base-type hierarchy.

use indexmap::IndexMap;
use serde_json::Value;

/// Ordered mapping from extension name to opaque value.
pub type Extensions = IndexMap<String, Value>;

/// Uniform access to a node's open extension map.
///
/// Implementors only wire up the two storage accessors; the get/set/remove
/// operations are provided and obey the collection laws in
/// [`collections`](crate::model::collections): a read never materializes the
/// map and only a successful set may create it.
pub trait Extensible {
    /// The node's extension map, if any extensions have been set.
    fn extensions(&self) -> Option<&Extensions>;

    /// Mutable access to the node's extension storage.
    fn extensions_mut(&mut self) -> &mut Option<Extensions>;

    /// Looks up a single extension value by name.
    fn get_extension(&self, name: &str) -> Option<&Value> {
        self.extensions().and_then(|map| map.get(name))
    }

    /// Sets an extension, creating the map on first use.
    fn set_extension(&mut self, name: impl Into<String>, value: Value) {
        crate::model::collections::add_entry(self.extensions_mut(), name, Some(value));
    }

    /// Removes an extension; a no-op when the map or the name is absent.
    fn remove_extension(&mut self, name: &str) {
        crate::model::collections::remove_entry(self.extensions_mut(), name);
    }
}

/// Wires [`Extensible`] up for node types carrying an `extensions` field.
macro_rules! impl_extensible {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::model::Extensible for $ty {
                fn extensions(&self) -> Option<&$crate::model::Extensions> {
                    self.extensions.as_ref()
                }

                fn extensions_mut(&mut self) -> &mut Option<$crate::model::Extensions> {
                    &mut self.extensions
                }
            }
        )+
    };
}

pub(crate) use impl_extensible;
