//! # Annotation Record
//!
//! One annotation instance: its kind plus an ordered attribute map.

use crate::annotation::value::{class_name_of, Scalar, Value};
use crate::error::{AppError, AppResult};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A parsed annotation instance attached to a routine (or nested in another one).
///
/// Only explicitly written attributes are present in `fields`; anything else
/// takes the declared default of the annotation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnnotationRecord {
    /// The annotation type, as a class name or JVM descriptor.
    pub kind: String,
    /// Attribute name to value, in declaration order.
    #[serde(default)]
    pub fields: IndexMap<String, Value>,
}

impl AnnotationRecord {
    /// Creates an empty record of the given kind.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            fields: IndexMap::new(),
        }
    }

    /// Builder style attribute setter.
    ///
    /// # Examples
    /// ```
    /// use cdd_annotations::annotation::{AnnotationRecord, Value};
    ///
    /// let op = AnnotationRecord::new("Operation")
    ///     .with("operationId", "getUser")
    ///     .with("tags", vec!["users"]);
    /// assert_eq!(op.get("operationId"), Some(&Value::from("getUser")));
    /// ```
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Returns the raw value of an attribute, if it was written.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// The kind as a dotted class name, whatever form the loader used.
    pub fn class_name(&self) -> String {
        class_name_of(&self.kind)
    }

    /// Builds a record from the alternating `[name, value, name, value, ...]`
    /// list that bytecode readers expose for annotation attributes.
    pub fn from_pairs(kind: impl Into<String>, values: Vec<Value>) -> AppResult<Self> {
        let kind = kind.into();
        if values.len() % 2 != 0 {
            return Err(AppError::malformed(format!(
                "@{}: attribute list has odd length {}",
                kind,
                values.len()
            )));
        }

        let mut fields = IndexMap::with_capacity(values.len() / 2);
        let mut iter = values.into_iter();
        while let (Some(name), Some(value)) = (iter.next(), iter.next()) {
            match name {
                Value::Scalar(Scalar::Str(name)) => {
                    fields.insert(name, value);
                }
                other => {
                    return Err(AppError::malformed(format!(
                        "@{}: attribute name must be a string, found {}",
                        kind,
                        other.shape()
                    )))
                }
            }
        }

        Ok(Self { kind, fields })
    }
}
