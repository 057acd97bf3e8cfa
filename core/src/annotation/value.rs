//! # Annotation Values
//!
//! Closed set of value shapes an annotation attribute can hold.

use crate::annotation::record::AnnotationRecord;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A primitive attribute value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// `boolean` attribute.
    Bool(bool),
    /// Integral attribute (`int`, `long`, `short`, `byte`).
    Int(i64),
    /// Floating point attribute (`float`, `double`).
    Float(f64),
    /// `String` attribute.
    Str(String),
}

/// A reference to a type, as stored in `Class<?>` attributes.
///
/// The raw form may be a JVM descriptor (`Lcom/acme/User;`), an internal
/// name (`com/acme/User`) or an already dotted class name.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeRef(String);

impl TypeRef {
    /// Creates a new TypeRef from its raw form.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Returns the Java class name (`com.acme.User`, `int[]`, ...).
    pub fn class_name(&self) -> String {
        class_name_of(&self.0)
    }
}

impl fmt::Debug for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeRef({:?})", self.0)
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One attribute value inside an annotation record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Value {
    /// Primitive or string value.
    Scalar(Scalar),
    /// `Class<?>` value.
    TypeRef(TypeRef),
    /// Nested annotation.
    Record(AnnotationRecord),
    /// Array attribute.
    List(Vec<Value>),
}

impl Value {
    /// Short human readable name of the variant, used in error messages.
    pub fn shape(&self) -> &'static str {
        match self {
            Value::Scalar(Scalar::Bool(_)) => "boolean",
            Value::Scalar(Scalar::Int(_)) => "integer",
            Value::Scalar(Scalar::Float(_)) => "float",
            Value::Scalar(Scalar::Str(_)) => "string",
            Value::TypeRef(_) => "type reference",
            Value::Record(_) => "annotation",
            Value::List(_) => "array",
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Scalar(Scalar::Str(s.to_string()))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Scalar(Scalar::Str(s))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Scalar(Scalar::Bool(b))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Scalar(Scalar::Int(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Scalar(Scalar::Float(n))
    }
}

impl From<TypeRef> for Value {
    fn from(t: TypeRef) -> Self {
        Value::TypeRef(t)
    }
}

impl From<AnnotationRecord> for Value {
    fn from(r: AnnotationRecord) -> Self {
        Value::Record(r)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

/// Converts a descriptor or internal name into a dotted Java class name.
///
/// Array dimensions become trailing `[]` pairs. Single letter element codes
/// of array descriptors map to primitive keywords; outside an array a single
/// letter is taken as a class name.
pub(crate) fn class_name_of(raw: &str) -> String {
    let dims = raw.chars().take_while(|c| *c == '[').count();
    let elem = &raw[dims..];

    let primitive = if dims > 0 { primitive_name(elem) } else { None };
    let mut name = match primitive {
        Some(p) => p.to_string(),
        None => {
            let inner = elem
                .strip_prefix('L')
                .and_then(|s| s.strip_suffix(';'))
                .unwrap_or(elem);
            inner.replace('/', ".")
        }
    };

    for _ in 0..dims {
        name.push_str("[]");
    }
    name
}

fn primitive_name(code: &str) -> Option<&'static str> {
    match code {
        "I" => Some("int"),
        "J" => Some("long"),
        "Z" => Some("boolean"),
        "B" => Some("byte"),
        "C" => Some("char"),
        "S" => Some("short"),
        "F" => Some("float"),
        "D" => Some("double"),
        "V" => Some("void"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_name_from_descriptor() {
        assert_eq!(TypeRef::new("Lcom/acme/User;").class_name(), "com.acme.User");
        assert_eq!(TypeRef::new("com/acme/User").class_name(), "com.acme.User");
        assert_eq!(TypeRef::new("com.acme.User").class_name(), "com.acme.User");
        assert_eq!(TypeRef::new("User").class_name(), "User");
    }

    #[test]
    fn test_class_name_arrays_and_primitives() {
        assert_eq!(TypeRef::new("[I").class_name(), "int[]");
        assert_eq!(TypeRef::new("[J").class_name(), "long[]");
        assert_eq!(
            TypeRef::new("[[Ljava/lang/String;").class_name(),
            "java.lang.String[][]"
        );
    }

    #[test]
    fn test_single_letter_class_name_unchanged() {
        for name in ["B", "D", "I", "S", "Z"] {
            assert_eq!(TypeRef::new(name).class_name(), name);
        }
        assert_eq!(TypeRef::new("[LB;").class_name(), "B[]");
    }

    #[test]
    fn test_value_json_encoding() {
        let v: Value = serde_json::from_str(r#"{"scalar": true}"#).unwrap();
        assert_eq!(v, Value::from(true));

        let v: Value = serde_json::from_str(r#"{"type_ref": "com.acme.User"}"#).unwrap();
        assert_eq!(v, Value::TypeRef(TypeRef::new("com.acme.User")));

        let v: Value =
            serde_json::from_str(r#"{"list": [{"scalar": "a"}, {"scalar": 2}]}"#).unwrap();
        assert_eq!(v, Value::List(vec![Value::from("a"), Value::from(2i64)]));
    }

    #[test]
    fn test_shape_names() {
        assert_eq!(Value::from("x").shape(), "string");
        assert_eq!(Value::from(vec!["x"]).shape(), "array");
        assert_eq!(Value::TypeRef(TypeRef::new("I")).shape(), "type reference");
    }
}
