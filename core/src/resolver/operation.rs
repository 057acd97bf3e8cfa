#![deny(missing_docs)]

//! # Operation Resolution
//!
//! Applies `@Operation`, `@ApiResponses` and `@ApiResponse` records found on a
//! routine to an `Operation`.
//!
//! Responses follow a fixed precedence, independent of declaration order:
//! 1. grouped `@ApiResponses(value = {...})`
//! 2. the first standalone `@ApiResponse`
//! 3. inline `@Operation(responses = {...})`

use crate::annotation::{find_by_kind, find_first_by_kind, AnnotationRecord, RecordAccessor};
use crate::defaults::{self, field};
use crate::error::AppResult;
use crate::model::{Operation, Response};
use crate::resolver::config::ResolverConfig;
use crate::resolver::response::resolve_response;
use tracing::{debug, trace};

/// Which declaration ended up supplying the operation's responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseTier {
    /// Responses came from `@ApiResponses` groups.
    Grouped,
    /// A single standalone `@ApiResponse` was used.
    Standalone,
    /// Nothing overrode the inline `@Operation` responses (if any).
    Inline,
}

/// Resolves operation metadata from annotation records.
#[derive(Debug, Clone, Default)]
pub struct OperationResolver {
    config: ResolverConfig,
}

impl OperationResolver {
    /// Creates a resolver with custom kind names.
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    /// Populates `operation` from the records attached to one routine.
    ///
    /// A malformed response aborts resolution; fields applied before the
    /// failure stay on `operation`.
    ///
    /// # Examples
    /// ```
    /// use cdd_annotations::annotation::{AnnotationRecord, TypeRef};
    /// use cdd_annotations::{Operation, OperationResolver};
    ///
    /// let records = vec![
    ///     AnnotationRecord::new("Operation").with("operationId", "getUser"),
    ///     AnnotationRecord::new("ApiResponse").with("responseCode", "200").with(
    ///         "content",
    ///         AnnotationRecord::new("Content").with(
    ///             "schema",
    ///             AnnotationRecord::new("Schema").with("implementation", TypeRef::new("User")),
    ///         ),
    ///     ),
    /// ];
    /// let mut op = Operation::default();
    /// OperationResolver::default().resolve(&records, &mut op).unwrap();
    /// assert_eq!(op.operation_id.as_deref(), Some("getUser"));
    /// assert_eq!(op.responses["200"].content_types[0].to_string(), "User");
    /// ```
    pub fn resolve(
        &self,
        records: &[AnnotationRecord],
        operation: &mut Operation,
    ) -> AppResult<()> {
        let operations = find_by_kind(records, &self.config.operation_kinds);
        if operations.len() > 1 {
            debug!(
                "{} @Operation records found, only the first is applied",
                operations.len()
            );
        }
        if let Some(record) = operations.first() {
            apply_operation(record, operation)?;
        }

        let tier = self.apply_response_precedence(records, operation)?;
        debug!(
            operation_id = operation.operation_id.as_deref().unwrap_or(""),
            ?tier,
            responses = operation.responses.len(),
            "resolved operation"
        );
        Ok(())
    }

    /// Installs grouped or standalone responses over whatever is on `operation`.
    ///
    /// The standalone form is only looked at when no grouped response exists.
    pub fn apply_response_precedence(
        &self,
        records: &[AnnotationRecord],
        operation: &mut Operation,
    ) -> AppResult<ResponseTier> {
        let grouped = self.grouped_responses(records)?;
        if !grouped.is_empty() {
            operation.set_responses(grouped);
            return Ok(ResponseTier::Grouped);
        }

        if let Some(response) = self.standalone_response(records)? {
            operation.set_responses([response]);
            return Ok(ResponseTier::Standalone);
        }

        Ok(ResponseTier::Inline)
    }

    /// Resolves the `value` entries of every `@ApiResponses` record, in order.
    pub fn grouped_responses(&self, records: &[AnnotationRecord]) -> AppResult<Vec<Response>> {
        let mut responses = Vec::new();
        for group in find_by_kind(records, &self.config.api_responses_kinds) {
            for record in RecordAccessor::new(group).nested_list(field::VALUE)? {
                responses.push(resolve_response(record)?);
            }
        }
        Ok(responses)
    }

    /// Resolves the first standalone `@ApiResponse`, if any.
    pub fn standalone_response(&self, records: &[AnnotationRecord]) -> AppResult<Option<Response>> {
        find_first_by_kind(records, &self.config.api_response_kinds)
            .map(resolve_response)
            .transpose()
    }
}

/// Resolves `records` into `operation` using the default kind names.
pub fn resolve_operation(records: &[AnnotationRecord], operation: &mut Operation) -> AppResult<()> {
    OperationResolver::default().resolve(records, operation)
}

/// Applies the attributes of one `@Operation` record, including its inline responses.
fn apply_operation(record: &AnnotationRecord, operation: &mut Operation) -> AppResult<()> {
    let acc = RecordAccessor::new(record);

    if let Some(id) = acc.text(field::OPERATION_ID, defaults::TEXT)? {
        operation.operation_id = Some(id);
    }
    if acc.boolean(field::DEPRECATED, defaults::DEPRECATED)? {
        operation.deprecated = true;
    }
    operation.hidden = acc.boolean(field::HIDDEN, defaults::HIDDEN)?;
    if let Some(summary) = acc.text(field::SUMMARY, defaults::TEXT)? {
        operation.summary = Some(summary);
    }
    if let Some(description) = acc.text(field::DESCRIPTION, defaults::TEXT)? {
        operation.description = Some(description);
    }
    for tag in acc.string_list(field::TAGS)? {
        operation.add_tag(tag);
    }

    let inline = inline_responses(&acc)?;
    if !inline.is_empty() {
        trace!("{} inline responses on @Operation", inline.len());
        operation.set_responses(inline);
    }
    Ok(())
}

fn inline_responses(acc: &RecordAccessor<'_>) -> AppResult<Vec<Response>> {
    acc.nested_list(field::RESPONSES)?
        .into_iter()
        .map(resolve_response)
        .collect()
}
