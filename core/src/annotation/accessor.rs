//! # Record Accessor
//!
//! Typed, default-aware reads over an `AnnotationRecord`.
//!
//! A missing attribute is never an error: callers pass the declared default.
//! An attribute present with the wrong shape is reported as
//! `AppError::MalformedAnnotation`.

use crate::annotation::record::AnnotationRecord;
use crate::annotation::value::{Scalar, TypeRef, Value};
use crate::error::{AppError, AppResult};

/// Read-only view over one annotation record.
#[derive(Debug, Clone, Copy)]
pub struct RecordAccessor<'a> {
    record: &'a AnnotationRecord,
}

impl<'a> RecordAccessor<'a> {
    /// Wraps a record.
    pub fn new(record: &'a AnnotationRecord) -> Self {
        Self { record }
    }

    /// Returns the attribute value, or `default` when it was not written.
    pub fn get(&self, name: &str, default: Value) -> Value {
        self.record.get(name).cloned().unwrap_or(default)
    }

    /// Returns the attribute coerced to a sequence.
    ///
    /// Arrays are returned as-is, a lone value becomes a singleton and a
    /// missing attribute an empty sequence.
    pub fn get_list(&self, name: &str) -> Vec<&'a Value> {
        match self.record.get(name) {
            None => Vec::new(),
            Some(Value::List(items)) => items.iter().collect(),
            Some(single) => vec![single],
        }
    }

    /// Reads a string attribute.
    pub fn string(&self, name: &str, default: &str) -> AppResult<String> {
        match self.record.get(name) {
            None => Ok(default.to_string()),
            Some(Value::Scalar(Scalar::Str(s))) => Ok(s.clone()),
            Some(other) => Err(self.mismatch(name, "string", other)),
        }
    }

    /// Reads a string attribute, trimmed. Blank values come back as `None`.
    pub fn text(&self, name: &str, default: &str) -> AppResult<Option<String>> {
        let value = self.string(name, default)?;
        let trimmed = value.trim();
        Ok((!trimmed.is_empty()).then(|| trimmed.to_string()))
    }

    /// Reads a boolean attribute.
    pub fn boolean(&self, name: &str, default: bool) -> AppResult<bool> {
        match self.record.get(name) {
            None => Ok(default),
            Some(Value::Scalar(Scalar::Bool(b))) => Ok(*b),
            Some(other) => Err(self.mismatch(name, "boolean", other)),
        }
    }

    /// Reads a `Class<?>` attribute.
    pub fn type_ref(&self, name: &str) -> AppResult<Option<&'a TypeRef>> {
        match self.record.get(name) {
            None => Ok(None),
            Some(Value::TypeRef(t)) => Ok(Some(t)),
            Some(other) => Err(self.mismatch(name, "type reference", other)),
        }
    }

    /// Reads a nested annotation attribute.
    pub fn nested(&self, name: &str) -> AppResult<Option<&'a AnnotationRecord>> {
        match self.record.get(name) {
            None => Ok(None),
            Some(Value::Record(r)) => Ok(Some(r)),
            Some(other) => Err(self.mismatch(name, "annotation", other)),
        }
    }

    /// Reads an array-of-annotations attribute (a lone annotation counts as one).
    pub fn nested_list(&self, name: &str) -> AppResult<Vec<&'a AnnotationRecord>> {
        self.get_list(name)
            .into_iter()
            .map(|item| match item {
                Value::Record(r) => Ok(r),
                other => Err(self.mismatch(name, "annotation", other)),
            })
            .collect()
    }

    /// Reads an array-of-strings attribute (a lone string counts as one).
    pub fn string_list(&self, name: &str) -> AppResult<Vec<String>> {
        self.get_list(name)
            .into_iter()
            .map(|item| match item {
                Value::Scalar(Scalar::Str(s)) => Ok(s.clone()),
                other => Err(self.mismatch(name, "string", other)),
            })
            .collect()
    }

    fn mismatch(&self, name: &str, expected: &str, found: &Value) -> AppError {
        AppError::malformed(format!(
            "@{}.{}: expected {}, found {}",
            self.record.kind,
            name,
            expected,
            found.shape()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AnnotationRecord {
        AnnotationRecord::new("Operation")
            .with("summary", "  Find user  ")
            .with("hidden", true)
            .with("tags", vec!["a", "b"])
            .with("single", "only")
            .with("blank", "   ")
    }

    #[test]
    fn test_get_with_default() {
        let rec = sample();
        let acc = RecordAccessor::new(&rec);
        assert_eq!(acc.get("hidden", Value::from(false)), Value::from(true));
        assert_eq!(acc.get("deprecated", Value::from(false)), Value::from(false));
    }

    #[test]
    fn test_get_list_shapes() {
        let rec = sample();
        let acc = RecordAccessor::new(&rec);
        assert_eq!(acc.get_list("tags").len(), 2);
        assert_eq!(acc.get_list("single"), vec![&Value::from("only")]);
        assert!(acc.get_list("missing").is_empty());
    }

    #[test]
    fn test_text_trims_and_drops_blank() {
        let rec = sample();
        let acc = RecordAccessor::new(&rec);
        assert_eq!(acc.text("summary", "").unwrap().as_deref(), Some("Find user"));
        assert_eq!(acc.text("blank", "").unwrap(), None);
        assert_eq!(acc.text("missing", "").unwrap(), None);
    }

    #[test]
    fn test_boolean_default_and_mismatch() {
        let rec = sample();
        let acc = RecordAccessor::new(&rec);
        assert!(!acc.boolean("deprecated", false).unwrap());
        let err = acc.boolean("summary", false).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Malformed Annotation: @Operation.summary: expected boolean, found string"
        );
    }

    #[test]
    fn test_string_list_rejects_records() {
        let rec = AnnotationRecord::new("Operation")
            .with("tags", vec![Value::from(AnnotationRecord::new("Tag"))]);
        let acc = RecordAccessor::new(&rec);
        assert!(acc.string_list("tags").is_err());
    }

    #[test]
    fn test_nested_list_accepts_lone_record() {
        let rec =
            AnnotationRecord::new("ApiResponse").with("content", AnnotationRecord::new("Content"));
        let acc = RecordAccessor::new(&rec);
        let nested = acc.nested_list("content").unwrap();
        assert_eq!(nested.len(), 1);
        assert_eq!(nested[0].kind, "Content");
    }
}
