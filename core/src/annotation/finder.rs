//! # Annotation Finder
//!
//! Selects annotation records by kind.

use crate::annotation::record::AnnotationRecord;

/// Returns every record whose kind is one of `kinds`, in input order.
///
/// Kinds are compared in class-name form, so descriptor kinds such as
/// `Lio/swagger/v3/oas/annotations/Operation;` match
/// `io.swagger.v3.oas.annotations.Operation`.
pub fn find_by_kind<'a, S: AsRef<str>>(
    records: &'a [AnnotationRecord],
    kinds: &[S],
) -> Vec<&'a AnnotationRecord> {
    records
        .iter()
        .filter(|record| matches_kind(record, kinds))
        .collect()
}

/// Returns the first record whose kind is one of `kinds`.
pub fn find_first_by_kind<'a, S: AsRef<str>>(
    records: &'a [AnnotationRecord],
    kinds: &[S],
) -> Option<&'a AnnotationRecord> {
    records.iter().find(|record| matches_kind(record, kinds))
}

fn matches_kind<S: AsRef<str>>(record: &AnnotationRecord, kinds: &[S]) -> bool {
    let name = record.class_name();
    kinds.iter().any(|k| k.as_ref() == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::value::Value;

    #[test]
    fn test_find_preserves_order() {
        let records = vec![
            AnnotationRecord::new("ApiResponse").with("responseCode", "200"),
            AnnotationRecord::new("Operation"),
            AnnotationRecord::new("ApiResponse").with("responseCode", "404"),
        ];
        let found = find_by_kind(&records, &["ApiResponse"]);
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].fields["responseCode"], Value::from("200"));
        assert_eq!(found[1].fields["responseCode"], Value::from("404"));
    }

    #[test]
    fn test_find_no_match_or_empty() {
        let records = vec![AnnotationRecord::new("Deprecated")];
        assert!(find_by_kind(&records, &["Operation"]).is_empty());
        assert!(find_by_kind::<&str>(&[], &["Operation"]).is_empty());
        assert!(find_first_by_kind::<&str>(&records, &[]).is_none());
    }

    #[test]
    fn test_find_matches_descriptor_kind() {
        let records = vec![AnnotationRecord::new(
            "Lio/swagger/v3/oas/annotations/Operation;",
        )];
        let found = find_first_by_kind(&records, &["io.swagger.v3.oas.annotations.Operation"]);
        assert!(found.is_some());
    }
}
