//! # Annotation Records
//!
//! Generic, loosely-typed representation of annotation instances as handed
//! over by a bytecode loader, plus the helpers used to read them.

pub mod accessor;
pub mod finder;
pub mod record;
pub mod value;

pub use accessor::RecordAccessor;
pub use finder::{find_by_kind, find_first_by_kind};
pub use record::AnnotationRecord;
pub use value::{Scalar, TypeRef, Value};
