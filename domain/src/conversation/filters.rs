//! Academic filters for student-mode queries

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Batch choices offered to students. "ALL" searches every batch.
pub const BATCHES: [&str; 5] = ["ALL", "2022-2026", "2023-2027", "2024-2028", "2025-2029"];

/// Branch choices. There is no "ALL" here; the first branch is the default.
pub const BRANCHES: [&str; 5] = [
    "Computer Engineering",
    "Information Technology",
    "Mechanical Engineering",
    "Electrical & Communication",
    "Electrical Engineering",
];

pub const SEMESTERS: [&str; 9] = [
    "ALL",
    "Semester 1",
    "Semester 2",
    "Semester 3",
    "Semester 4",
    "Semester 5",
    "Semester 6",
    "Semester 7",
    "Semester 8",
];

pub const DOC_TYPES: [&str; 10] = [
    "ALL",
    "ExamForm",
    "FeesNotice",
    "ExamTimetable",
    "Circular",
    "EventInformation",
    "ClassTimeTable",
    "SeminarInformation",
    "GeneralNotice",
    "GeneralInformation",
];

/// Academic context sent along with every student-mode dispatch (Value Object)
///
/// Defaults are the permissive "ALL" values (first branch for the branch
/// axis), so a dispatch is always possible without explicit selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentFilters {
    pub batch: String,
    pub branch: String,
    pub semester: String,
    pub doc_type: String,
}

impl Default for StudentFilters {
    fn default() -> Self {
        Self {
            batch: "ALL".to_string(),
            branch: BRANCHES[0].to_string(),
            semester: "ALL".to_string(),
            doc_type: "ALL".to_string(),
        }
    }
}

impl StudentFilters {
    pub fn set_batch(&mut self, value: impl Into<String>) -> Result<(), DomainError> {
        self.batch = validated("batch", value.into(), &BATCHES)?;
        Ok(())
    }

    pub fn set_branch(&mut self, value: impl Into<String>) -> Result<(), DomainError> {
        self.branch = validated("branch", value.into(), &BRANCHES)?;
        Ok(())
    }

    pub fn set_semester(&mut self, value: impl Into<String>) -> Result<(), DomainError> {
        self.semester = validated("semester", value.into(), &SEMESTERS)?;
        Ok(())
    }

    pub fn set_doc_type(&mut self, value: impl Into<String>) -> Result<(), DomainError> {
        self.doc_type = validated("document type", value.into(), &DOC_TYPES)?;
        Ok(())
    }
}

fn validated(
    field: &'static str,
    value: String,
    catalog: &[&str],
) -> Result<String, DomainError> {
    if catalog.contains(&value.as_str()) {
        Ok(value)
    } else {
        Err(DomainError::UnknownFilterValue { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_permissive() {
        let filters = StudentFilters::default();
        assert_eq!(filters.batch, "ALL");
        assert_eq!(filters.branch, "Computer Engineering");
        assert_eq!(filters.semester, "ALL");
        assert_eq!(filters.doc_type, "ALL");
    }

    #[test]
    fn test_setters_validate_against_catalog() {
        let mut filters = StudentFilters::default();
        filters.set_batch("2023-2027").unwrap();
        assert_eq!(filters.batch, "2023-2027");

        let err = filters.set_batch("1999-2003").unwrap_err();
        assert!(matches!(err, DomainError::UnknownFilterValue { field: "batch", .. }));
        // Value unchanged after a rejected set
        assert_eq!(filters.batch, "2023-2027");

        filters.set_semester("Semester 3").unwrap();
        assert!(filters.set_semester("Semester 9").is_err());

        filters.set_doc_type("Circular").unwrap();
        assert!(filters.set_doc_type("Syllabus").is_err());
    }
}
