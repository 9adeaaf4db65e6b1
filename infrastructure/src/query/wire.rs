//! Wire types for the query service HTTP API

use serde::{Deserialize, Serialize};

/// Body of `POST /student_query`
#[derive(Debug, Serialize)]
pub struct StudentQueryBody<'a> {
    pub batch: &'a str,
    pub branch: &'a str,
    pub semester: &'a str,
    pub doc_type: &'a str,
    pub question: &'a str,
    pub target_language: &'a str,
}

/// Body of `POST /rag_query`
#[derive(Debug, Serialize)]
pub struct FreeformQueryBody<'a> {
    pub question: &'a str,
    pub target_language: &'a str,
}

/// Response body shared by both endpoints.
///
/// `answer` is nominally required but treated as optional so a malformed
/// or empty response degrades to the fallback answer instead of an error.
#[derive(Debug, Deserialize)]
pub struct QueryResponseBody {
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub sources: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_body_field_names() {
        let body = StudentQueryBody {
            batch: "ALL",
            branch: "Computer Engineering",
            semester: "Semester 3",
            doc_type: "Circular",
            question: "exam timetable",
            target_language: "en-IN",
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "batch": "ALL",
                "branch": "Computer Engineering",
                "semester": "Semester 3",
                "doc_type": "Circular",
                "question": "exam timetable",
                "target_language": "en-IN",
            })
        );
    }

    #[test]
    fn test_freeform_body_field_names() {
        let body = FreeformQueryBody {
            question: "placement record",
            target_language: "hi-IN",
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "question": "placement record",
                "target_language": "hi-IN",
            })
        );
    }

    #[test]
    fn test_response_parses_with_sources() {
        let body: QueryResponseBody = serde_json::from_str(
            r#"{"answer": "9 AM to 5 PM", "sources": ["timings.pdf", "handbook.pdf"]}"#,
        )
        .unwrap();
        assert_eq!(body.answer.as_deref(), Some("9 AM to 5 PM"));
        assert_eq!(body.sources, vec!["timings.pdf", "handbook.pdf"]);
    }

    #[test]
    fn test_response_tolerates_missing_fields() {
        let body: QueryResponseBody = serde_json::from_str("{}").unwrap();
        assert!(body.answer.is_none());
        assert!(body.sources.is_empty());
    }
}
