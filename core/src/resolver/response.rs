#![deny(missing_docs)]

//! # Response Resolution
//!
//! Turns an `@ApiResponse`-shaped record into a `Response`.

use crate::annotation::{AnnotationRecord, RecordAccessor};
use crate::defaults::{self, field};
use crate::error::{AppError, AppResult};
use crate::model::{ContentType, Response};

/// Resolves one response record.
///
/// * `responseCode` defaults to `"default"` (also when blank).
/// * `description` is trimmed and dropped when empty.
/// * Every `content` entry must name a type; see [`resolve_content_type`].
pub fn resolve_response(record: &AnnotationRecord) -> AppResult<Response> {
    let acc = RecordAccessor::new(record);

    let code = acc.string(field::RESPONSE_CODE, defaults::RESPONSE_CODE)?;
    let code = if code.trim().is_empty() {
        defaults::RESPONSE_CODE.to_string()
    } else {
        code
    };
    let description = acc.text(field::DESCRIPTION, defaults::TEXT)?;

    let content_types = acc
        .nested_list(field::CONTENT)?
        .into_iter()
        .map(resolve_content_type)
        .collect::<AppResult<Vec<_>>>()?;

    Ok(Response {
        code,
        description,
        content_types,
    })
}

/// Resolves one `@Content` record into a payload type.
///
/// With an `array` attribute the element type comes from `array.schema`
/// and `array.uniqueItems` selects `Set` over `List`. Otherwise the type is
/// read from `schema` directly.
pub fn resolve_content_type(content: &AnnotationRecord) -> AppResult<ContentType> {
    let acc = RecordAccessor::new(content);

    if let Some(array) = acc.nested(field::ARRAY)? {
        let array_acc = RecordAccessor::new(array);
        let unique = array_acc.boolean(field::UNIQUE_ITEMS, defaults::UNIQUE_ITEMS)?;
        let schema = array_acc.nested(field::SCHEMA)?.ok_or_else(|| {
            AppError::malformed(format!("@{}.{}: missing schema", content.kind, field::ARRAY))
        })?;
        let name = implementation(schema)?;
        return Ok(if unique {
            ContentType::Set(name)
        } else {
            ContentType::List(name)
        });
    }

    match acc.nested(field::SCHEMA)? {
        Some(schema) => Ok(ContentType::Named(implementation(schema)?)),
        None => Err(AppError::malformed(format!(
            "@{}: neither array nor schema is present",
            content.kind
        ))),
    }
}

fn implementation(schema: &AnnotationRecord) -> AppResult<String> {
    RecordAccessor::new(schema)
        .type_ref(field::IMPLEMENTATION)?
        .map(|t| t.class_name())
        .ok_or_else(|| {
            AppError::malformed(format!(
                "@{}: missing {}",
                schema.kind,
                field::IMPLEMENTATION
            ))
        })
}
