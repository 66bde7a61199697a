//! # Assembly Configuration
//!
//! Explicit configuration consumed by the reconciler, injected by the
//! embedding system rather than read from ambient global state.

/// The ordered list of media-type names used when a content map must be
/// populated and the caller supplied no names of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultMediaTypes {
    names: Vec<String>,
}

impl DefaultMediaTypes {
    /// Creates a default list from explicit media-type names.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// The configured media-type names, in population order.
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

impl Default for DefaultMediaTypes {
    fn default() -> Self {
        Self::new(["application/json"])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_media_types() {
        let defaults = DefaultMediaTypes::default();
        assert_eq!(defaults.names(), ["application/json"]);
    }

    #[test]
    fn test_explicit_media_types_keep_order() {
        let defaults = DefaultMediaTypes::new(["application/xml", "text/plain"]);
        assert_eq!(defaults.names(), ["application/xml", "text/plain"]);
    }
}
