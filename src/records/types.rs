//! Record kinds and wire types for form submissions

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The two kinds of form submissions the site accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    /// Onboarding assessment form
    Assessment,
    /// Contact form
    Contact,
}

impl RecordKind {
    /// Id prefix, e.g. `assessment_1700000000000`
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Assessment => "assessment",
            RecordKind::Contact => "contact",
        }
    }

    /// Directory holding one JSON file per record of this kind
    pub fn dir_name(&self) -> &'static str {
        match self {
            RecordKind::Assessment => "assessments",
            RecordKind::Contact => "contacts",
        }
    }

    /// File name of this kind's append-only summary index
    pub fn summary_file(&self) -> &'static str {
        match self {
            RecordKind::Assessment => "assessment-summary.jsonl",
            RecordKind::Contact => "contact-summary.jsonl",
        }
    }

    /// Fields projected from a record into its summary line.
    ///
    /// `id` and `submittedAt` are always included and not listed here.
    pub fn summary_fields(&self) -> &'static [&'static str] {
        match self {
            RecordKind::Assessment => &["name", "email", "phone", "devices", "helpMethod"],
            RecordKind::Contact => &["name", "email", "phone", "subject"],
        }
    }

    /// Index for per-kind locks
    pub(crate) fn index(&self) -> usize {
        match self {
            RecordKind::Assessment => 0,
            RecordKind::Contact => 1,
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single form field value: free text or an ordered multi-select
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Single text value
    Text(String),
    /// Ordered multi-select values
    Multi(Vec<String>),
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

/// Kind-specific form fields, keyed by form field name.
///
/// No schema is enforced: any field may be absent or empty.
pub type FieldMap = BTreeMap<String, FieldValue>;

/// One durable, immutable form submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmittedRecord {
    /// Server-generated id: `<kind>_<submission-epoch-millis>`
    pub id: String,

    /// Server-assigned submission timestamp (RFC 3339, UTC)
    #[serde(rename = "submittedAt")]
    pub submitted_at: String,

    /// All submitted form fields
    #[serde(flatten)]
    pub fields: FieldMap,
}

/// One line of a kind's summary index: a fixed projection of record fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryEntry {
    /// Id of the record this entry was projected from
    pub id: String,

    /// Submission timestamp copied from the record
    #[serde(rename = "submittedAt")]
    pub submitted_at: String,

    /// Projected fields; fields absent from the record are omitted
    #[serde(flatten)]
    pub fields: FieldMap,
}

impl SummaryEntry {
    /// Project a record into its summary entry for the given kind
    pub fn project(kind: RecordKind, record: &SubmittedRecord) -> Self {
        let fields = kind
            .summary_fields()
            .iter()
            .filter_map(|name| {
                record
                    .fields
                    .get(*name)
                    .map(|value| (name.to_string(), value.clone()))
            })
            .collect();

        Self {
            id: record.id.clone(),
            submitted_at: record.submitted_at.clone(),
            fields,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record(kind: RecordKind) -> SubmittedRecord {
        let mut fields = FieldMap::new();
        fields.insert("name".to_string(), "Edna Krabappel".into());
        fields.insert("email".to_string(), "edna@example.com".into());
        fields.insert(
            "devices".to_string(),
            FieldValue::Multi(vec!["tablet".to_string(), "smartphone".to_string()]),
        );
        fields.insert("notes".to_string(), "prefers large print".into());

        SubmittedRecord {
            id: format!("{}_1700000000000", kind.as_str()),
            submitted_at: "2023-11-14T22:13:20.000Z".to_string(),
            fields,
        }
    }

    #[test]
    fn test_field_value_untagged_round_trip() {
        let text: FieldValue = serde_json::from_str("\"hello\"").unwrap();
        assert_eq!(text, FieldValue::Text("hello".to_string()));

        let multi: FieldValue = serde_json::from_str("[\"a\",\"b\"]").unwrap();
        assert_eq!(
            multi,
            FieldValue::Multi(vec!["a".to_string(), "b".to_string()])
        );
    }

    #[test]
    fn test_record_serializes_fields_at_top_level() {
        let record = sample_record(RecordKind::Assessment);
        let json: serde_json::Value = serde_json::to_value(&record).unwrap();

        assert_eq!(json["id"], "assessment_1700000000000");
        assert_eq!(json["submittedAt"], "2023-11-14T22:13:20.000Z");
        assert_eq!(json["name"], "Edna Krabappel");
        assert_eq!(json["devices"][1], "smartphone");
    }

    #[test]
    fn test_projection_keeps_only_summary_fields() {
        let record = sample_record(RecordKind::Assessment);
        let entry = SummaryEntry::project(RecordKind::Assessment, &record);

        assert_eq!(entry.id, record.id);
        assert_eq!(entry.submitted_at, record.submitted_at);
        assert!(entry.fields.contains_key("name"));
        assert!(entry.fields.contains_key("devices"));
        // Not part of the assessment projection
        assert!(!entry.fields.contains_key("notes"));
        // Absent in the record, so absent in the projection
        assert!(!entry.fields.contains_key("phone"));
    }

    #[test]
    fn test_contact_projection_fields() {
        let mut record = sample_record(RecordKind::Contact);
        record
            .fields
            .insert("subject".to_string(), "Tablet lessons".into());

        let entry = SummaryEntry::project(RecordKind::Contact, &record);
        assert!(entry.fields.contains_key("subject"));
        assert!(!entry.fields.contains_key("devices"));
    }
}
