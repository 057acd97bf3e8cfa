#![deny(missing_docs)]

//! # CDD Annotations
//!
//! Resolves OpenAPI operation metadata (`@Operation`, `@ApiResponses`,
//! `@ApiResponse`) from generic annotation records attached to request
//! handlers into a typed `Operation`.

/// Shared error types.
pub mod error;

/// Declared attribute defaults, attribute names and annotation kinds.
pub mod defaults;

/// Generic annotation records and helpers to read them.
pub mod annotation;

/// Operation and response models.
pub mod model;

/// Record-to-model resolution.
pub mod resolver;

/// JSON record dump loading.
pub mod loader;

pub use annotation::{AnnotationRecord, RecordAccessor, Scalar, TypeRef, Value};
pub use error::{AppError, AppResult};
pub use loader::{parse_annotation_records, read_annotation_records};
pub use model::{ContentType, Operation, Response};
pub use resolver::operation::ResponseTier;
pub use resolver::{
    resolve_content_type, resolve_operation, resolve_response, OperationResolver,
    ResolverConfig,
};
