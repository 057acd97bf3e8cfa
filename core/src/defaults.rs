//! # Field Defaults
//!
//! Declared defaults for annotation fields and the field names they belong to.
//! An absent field always resolves to the constant listed here.

/// Default for `@ApiResponse.responseCode`.
pub const RESPONSE_CODE: &str = "default";

/// Default for `@Operation.hidden`.
pub const HIDDEN: bool = false;

/// Default for `@Operation.deprecated`.
pub const DEPRECATED: bool = false;

/// Default for `@ArraySchema.uniqueItems`.
pub const UNIQUE_ITEMS: bool = false;

/// Default for every free-text attribute (`operationId`, `summary`, `description`).
pub const TEXT: &str = "";

/// Attribute names as they appear in annotation records.
pub mod field {
    /// `@Operation.operationId`
    pub const OPERATION_ID: &str = "operationId";
    /// `@Operation.deprecated`
    pub const DEPRECATED: &str = "deprecated";
    /// `@Operation.hidden`
    pub const HIDDEN: &str = "hidden";
    /// `@Operation.summary`
    pub const SUMMARY: &str = "summary";
    /// `@Operation.description` and `@ApiResponse.description`
    pub const DESCRIPTION: &str = "description";
    /// `@Operation.tags`
    pub const TAGS: &str = "tags";
    /// `@Operation.responses`
    pub const RESPONSES: &str = "responses";
    /// `@ApiResponses.value`
    pub const VALUE: &str = "value";
    /// `@ApiResponse.responseCode`
    pub const RESPONSE_CODE: &str = "responseCode";
    /// `@ApiResponse.content`
    pub const CONTENT: &str = "content";
    /// `@Content.array`
    pub const ARRAY: &str = "array";
    /// `@Content.schema` and `@ArraySchema.schema`
    pub const SCHEMA: &str = "schema";
    /// `@ArraySchema.uniqueItems`
    pub const UNIQUE_ITEMS: &str = "uniqueItems";
    /// `@Schema.implementation`
    pub const IMPLEMENTATION: &str = "implementation";
}

/// Annotation kind names recognised by default.
pub mod kind {
    /// Fully-qualified `@Operation` class name.
    pub const OPERATION: &str = "io.swagger.v3.oas.annotations.Operation";
    /// Fully-qualified `@ApiResponses` class name.
    pub const API_RESPONSES: &str = "io.swagger.v3.oas.annotations.responses.ApiResponses";
    /// Fully-qualified `@ApiResponse` class name.
    pub const API_RESPONSE: &str = "io.swagger.v3.oas.annotations.responses.ApiResponse";
}
