#![deny(missing_docs)]

//! # Reference Names
//!
//! Extracts the trailing name component of a `$ref` string. The component is
//! JSON-Pointer-unescaped (`~1`, `~0`) and percent-decoded, so a name that
//! was escaped for pointer syntax round-trips back to its component key.

use crate::error::{ModelError, ModelResult};
use percent_encoding::percent_decode_str;

/// The name component after the last `/` of `reference`.
///
/// Fails with [`ModelError::MalformedReference`] for an empty string, a
/// string with no `/` separator, or a reference ending in `/`.
pub fn name_from_ref(reference: &str) -> ModelResult<String> {
    if reference.is_empty() {
        return Err(ModelError::MalformedReference("empty reference".into()));
    }

    let Some((_, segment)) = reference.rsplit_once('/') else {
        return Err(ModelError::MalformedReference(format!(
            "no '/' separator in '{}'",
            reference
        )));
    };

    let name = decode_pointer_segment(segment);
    if name.is_empty() {
        return Err(ModelError::MalformedReference(format!(
            "no name component in '{}'",
            reference
        )));
    }
    Ok(name)
}

/// Decodes a JSON Pointer segment (handles `~1` and `~0`).
fn decode_pointer_segment(segment: &str) -> String {
    let decoded = segment.replace("~1", "/").replace("~0", "~");
    percent_decode_str(&decoded)
        .decode_utf8_lossy()
        .into_owned()
}
