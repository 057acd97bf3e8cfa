#![deny(missing_docs)]

//! # Operation Models
//!
//! Typed description of one documented endpoint, produced by the resolvers
//! and handed to the document-assembly stage.

use crate::defaults;
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

/// Payload type of a response, optionally wrapped in a collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub enum ContentType {
    /// A bare type, e.g. `com.acme.User`.
    Named(String),
    /// `java.util.List<T>`
    List(String),
    /// `java.util.Set<T>`, used when the array schema declares unique items.
    Set(String),
}

impl ContentType {
    /// The element type name, without any container.
    pub fn type_name(&self) -> &str {
        match self {
            ContentType::Named(t) | ContentType::List(t) | ContentType::Set(t) => t,
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentType::Named(t) => write!(f, "{}", t),
            ContentType::List(t) => write!(f, "java.util.List<{}>", t),
            ContentType::Set(t) => write!(f, "java.util.Set<{}>", t),
        }
    }
}

impl From<ContentType> for String {
    fn from(c: ContentType) -> Self {
        c.to_string()
    }
}

/// One possible reply of an operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    /// Status code or `"default"`.
    pub code: String,
    /// Trimmed, non-empty description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Payload types in declaration order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub content_types: Vec<ContentType>,
}

impl Response {
    /// Creates a response for `code` with no description or content.
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            description: None,
            content_types: Vec::new(),
        }
    }
}

impl Default for Response {
    fn default() -> Self {
        Self::new(defaults::RESPONSE_CODE)
    }
}

/// Documentation metadata of one endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    /// Unique operation identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_id: Option<String>,
    /// Whether the operation is deprecated.
    pub deprecated: bool,
    /// Whether the operation is excluded from the published document.
    pub hidden: bool,
    /// Short summary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Long description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Tags in declaration order. Duplicates are kept.
    pub tags: Vec<String>,
    /// Responses keyed by status code.
    pub responses: IndexMap<String, Response>,
}

impl Operation {
    /// Appends a tag.
    pub fn add_tag(&mut self, tag: impl Into<String>) {
        self.tags.push(tag.into());
    }

    /// Replaces all responses with `responses`.
    ///
    /// A later response with an already seen code overwrites the earlier one.
    pub fn set_responses(&mut self, responses: impl IntoIterator<Item = Response>) {
        let mut map = IndexMap::new();
        for response in responses {
            map.insert(response.code.clone(), response);
        }
        self.responses = map;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_display() {
        assert_eq!(ContentType::Named("User".into()).to_string(), "User");
        assert_eq!(
            ContentType::List("User".into()).to_string(),
            "java.util.List<User>"
        );
        assert_eq!(
            ContentType::Set("User".into()).to_string(),
            "java.util.Set<User>"
        );
        assert_eq!(ContentType::Set("User".into()).type_name(), "User");
    }

    #[test]
    fn test_set_responses_replaces_and_dedups() {
        let mut op = Operation::default();
        op.set_responses(vec![Response::new("500")]);

        let mut first = Response::new("200");
        first.description = Some("first".into());
        let mut second = Response::new("200");
        second.description = Some("second".into());
        op.set_responses(vec![first, Response::new("404"), second]);

        let codes: Vec<&str> = op.responses.keys().map(String::as_str).collect();
        assert_eq!(codes, vec!["200", "404"]);
        assert_eq!(op.responses["200"].description.as_deref(), Some("second"));
    }

    #[test]
    fn test_default_response_code() {
        assert_eq!(Response::default().code, "default");
    }

    #[test]
    fn test_operation_json_shape() {
        let mut op = Operation::default();
        op.operation_id = Some("getUser".into());
        let mut resp = Response::new("200");
        resp.content_types.push(ContentType::List("User".into()));
        op.set_responses(vec![resp]);

        let json = serde_json::to_value(&op).unwrap();
        assert_eq!(json["operationId"], "getUser");
        assert_eq!(json["hidden"], false);
        assert_eq!(json["responses"]["200"]["contentTypes"][0], "java.util.List<User>");
        assert!(json.get("summary").is_none());
    }
}
