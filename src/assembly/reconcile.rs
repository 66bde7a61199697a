#![deny(missing_docs)]

//! # Schema Reconciler
//!
//! Parameters and request bodies discovered across multiple passes may first
//! get a bare schema, then later gain explicit per-media-type content, or
//! the other way around. The operations here make "set schema" land
//! correctly no matter which shape exists already, keeping exactly one
//! schema channel authoritative: either the standalone `schema` field or
//! the schemas inside `content`, never sensibly both.

use crate::config::DefaultMediaTypes;
use crate::error::{ModelError, ModelResult};
use crate::model::{Content, MediaType, Parameter, RequestBody, Schema};

/// Whether the parameter has a schema through either channel: the standalone
/// `schema` field, or any populated content slot carrying one.
pub fn parameter_has_schema(parameter: &Parameter) -> bool {
    if parameter.schema.is_some() {
        return true;
    }
    content_has_schema(parameter.content.as_ref())
}

/// Every schema defined for the parameter.
///
/// A standalone `schema` short-circuits as a single-element result;
/// otherwise the content slots are scanned in insertion order and every
/// schema found is collected. Empty when neither channel has one.
pub fn parameter_schemas(parameter: &Parameter) -> Vec<&Schema> {
    if let Some(schema) = parameter.schema.as_ref() {
        return vec![schema];
    }

    match parameter.content.as_ref() {
        Some(content) => content
            .slots()
            .filter_map(|(_, slot)| slot.and_then(|media_type| media_type.schema.as_ref()))
            .collect(),
        None => Vec::new(),
    }
}

/// Sets `schema` on the parameter through whichever channel the current
/// shape dictates.
///
/// - `None` is a no-op; an existing schema is never cleared this way.
/// - Without `content`, the standalone `schema` field is set directly.
/// - With `content` present but holding no entries, one populated slot is
///   created per configured default media type.
/// - With `content` entries present, the schema lands on every existing
///   slot and the set of media-type names is left unchanged.
///
/// Fails with [`ModelError::InvalidDocumentShape`] when an existing content
/// entry is declared but absent; nothing is mutated in that case.
pub fn set_parameter_schema(
    parameter: &mut Parameter,
    schema: Option<Schema>,
    defaults: &DefaultMediaTypes,
) -> ModelResult<()> {
    let Some(schema) = schema else {
        return Ok(());
    };

    match parameter.content.as_mut() {
        None => {
            parameter.schema = Some(schema);
            Ok(())
        }
        Some(content) => populate_content(content, &parameter.name, schema, defaults.names()),
    }
}

/// Whether any populated content slot of the request body carries a schema.
/// Request bodies have no standalone schema field.
pub fn request_body_has_schema(request_body: &RequestBody) -> bool {
    content_has_schema(request_body.content.as_ref())
}

/// Sets `schema` on the request body, creating its content map first if the
/// body has none at all.
///
/// Population follows [`set_parameter_schema`], except the caller may pass
/// explicit `media_types` names to use when the content map is empty; an
/// empty list falls back to the configured defaults.
pub fn set_request_body_schema(
    request_body: &mut RequestBody,
    schema: Option<Schema>,
    media_types: &[String],
    defaults: &DefaultMediaTypes,
) -> ModelResult<()> {
    let Some(schema) = schema else {
        return Ok(());
    };

    let content = request_body.content.get_or_insert_with(Content::new);
    let names = if media_types.is_empty() {
        defaults.names()
    } else {
        media_types
    };
    populate_content(content, "request body", schema, names)
}

fn content_has_schema(content: Option<&Content>) -> bool {
    content.is_some_and(|content| {
        content
            .slots()
            .any(|(_, slot)| slot.is_some_and(|media_type| media_type.schema.is_some()))
    })
}

/// Expands an empty content map into one populated slot per name, or sets
/// the schema on every existing slot. Declared-but-absent slots fail the
/// whole operation before any slot is touched, so the caller's schema is
/// never half-applied.
fn populate_content(
    content: &mut Content,
    owner: &str,
    schema: Schema,
    names: &[String],
) -> ModelResult<()> {
    if content.is_empty() {
        tracing::debug!(owner, count = names.len(), "expanding default media types");
        for name in names {
            content.add_media_type(name.clone(), MediaType::with_schema(schema.clone()));
        }
        return Ok(());
    }

    if let Some((name, _)) = content.slots().find(|(_, slot)| slot.is_none()) {
        return Err(ModelError::InvalidDocumentShape(format!(
            "content of '{}' declares media type '{}' without a definition",
            owner, name
        )));
    }

    for (_, slot) in content.slots_mut() {
        // Checked above; every slot is populated.
        if let Some(media_type) = slot.as_mut() {
            media_type.schema = Some(schema.clone());
        }
    }
    Ok(())
}
