// ==========================================
// Skill Assessment Suite - backup document shapes
// ==========================================
// Responsibility: field-exact (de)serialization of the four backup
// document forms, with format detection at the boundary.
// Detection order: bare JSON array -> legacy all-hospitals; object with
// a known "type" tag -> typed document; anything else -> malformed.
// ==========================================

use crate::backup::error::{BackupError, BackupResult};
use crate::domain::{AttachmentRecord, Department, Hospital};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Origin of a department-scope document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentContext {
    pub hospital_id: String,
    #[serde(default)]
    pub hospital_name: String,
}

/// A parsed backup document.
#[derive(Debug, Clone, PartialEq)]
pub enum BackupDocument {
    /// `{ "type": "department", "data": ..., "context": ... }`
    Department {
        data: Department,
        context: DepartmentContext,
    },
    /// `{ "type": "hospital", "data": ..., "dbData": [...] }`
    Hospital {
        data: Hospital,
        db_data: Option<Vec<AttachmentRecord>>,
    },
    /// `{ "type": "all_hospitals", "data": [...], "dbData": [...] }`.
    /// A missing `dbData` list means the attachment payloads are still
    /// inline in the records (legacy sub-format).
    AllHospitals {
        data: Vec<Hospital>,
        db_data: Option<Vec<AttachmentRecord>>,
    },
    /// Bare array of hospitals with attachment payloads inlined in the
    /// material records. Produced by old application versions.
    LegacyAllHospitals { data: Vec<Hospital> },
}

// Serde mirrors for the typed forms (the `type` tag is handled here).

#[derive(Serialize, Deserialize)]
struct DepartmentDoc {
    data: Department,
    context: DepartmentContext,
}

#[derive(Serialize, Deserialize)]
struct HospitalDoc {
    data: Hospital,
    #[serde(rename = "dbData", default, skip_serializing_if = "Option::is_none")]
    db_data: Option<Vec<AttachmentRecord>>,
}

#[derive(Serialize, Deserialize)]
struct AllHospitalsDoc {
    data: Vec<Hospital>,
    #[serde(rename = "dbData", default, skip_serializing_if = "Option::is_none")]
    db_data: Option<Vec<AttachmentRecord>>,
}

impl BackupDocument {
    /// Parse raw file bytes into a document.
    ///
    /// Invalid JSON is a `Parse` error; valid JSON that matches none of
    /// the known shapes is `Malformed`.
    pub fn parse(bytes: &[u8]) -> BackupResult<Self> {
        let value: Value =
            serde_json::from_slice(bytes).map_err(|e| BackupError::Parse(e.to_string()))?;

        // Legacy format: no type tag, top-level value is an array.
        if value.is_array() {
            let data: Vec<Hospital> = serde_json::from_value(value)
                .map_err(|e| BackupError::Malformed(e.to_string()))?;
            return Ok(BackupDocument::LegacyAllHospitals { data });
        }

        let doc_type = value
            .get("type")
            .and_then(Value::as_str)
            .map(str::to_owned)
            .ok_or_else(|| BackupError::Malformed("missing \"type\" tag".to_string()))?;

        match doc_type.as_str() {
            "department" => {
                let doc: DepartmentDoc = serde_json::from_value(value)
                    .map_err(|e| BackupError::Malformed(e.to_string()))?;
                Ok(BackupDocument::Department {
                    data: doc.data,
                    context: doc.context,
                })
            }
            "hospital" => {
                let doc: HospitalDoc = serde_json::from_value(value)
                    .map_err(|e| BackupError::Malformed(e.to_string()))?;
                Ok(BackupDocument::Hospital {
                    data: doc.data,
                    db_data: doc.db_data,
                })
            }
            "all_hospitals" => {
                let doc: AllHospitalsDoc = serde_json::from_value(value)
                    .map_err(|e| BackupError::Malformed(e.to_string()))?;
                Ok(BackupDocument::AllHospitals {
                    data: doc.data,
                    db_data: doc.db_data,
                })
            }
            other => Err(BackupError::Malformed(format!(
                "unknown document type \"{other}\""
            ))),
        }
    }

    /// Serialize to the on-disk JSON form (pretty-printed, like the
    /// original exports).
    pub fn to_json_pretty(&self) -> BackupResult<String> {
        let value = match self {
            BackupDocument::Department { data, context } => tagged_value(
                "department",
                DepartmentDoc {
                    data: data.clone(),
                    context: context.clone(),
                },
            )?,
            BackupDocument::Hospital { data, db_data } => tagged_value(
                "hospital",
                HospitalDoc {
                    data: data.clone(),
                    db_data: db_data.clone(),
                },
            )?,
            BackupDocument::AllHospitals { data, db_data } => tagged_value(
                "all_hospitals",
                AllHospitalsDoc {
                    data: data.clone(),
                    db_data: db_data.clone(),
                },
            )?,
            BackupDocument::LegacyAllHospitals { data } => serde_json::to_value(data)
                .map_err(|e| BackupError::Malformed(e.to_string()))?,
        };
        serde_json::to_string_pretty(&value).map_err(|e| BackupError::Malformed(e.to_string()))
    }
}

fn tagged_value<T: Serialize>(tag: &str, doc: T) -> BackupResult<Value> {
    let mut value = serde_json::to_value(doc).map_err(|e| BackupError::Malformed(e.to_string()))?;
    match value.as_object_mut() {
        Some(map) => {
            map.insert("type".to_string(), Value::String(tag.to_string()));
            Ok(value)
        }
        None => Err(BackupError::Malformed(
            "document body did not serialize to an object".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rejects_invalid_json() {
        let err = BackupDocument::parse(b"{ not json").unwrap_err();
        assert!(matches!(err, BackupError::Parse(_)));
    }

    #[test]
    fn test_parse_detects_legacy_array() {
        let json = r#"[{"id":"h1","name":"Test","province":"","city":"","departments":[]}]"#;
        let doc = BackupDocument::parse(json.as_bytes()).unwrap();
        match doc {
            BackupDocument::LegacyAllHospitals { data } => {
                assert_eq!(data.len(), 1);
                assert_eq!(data[0].id, "h1");
            }
            other => panic!("expected legacy document, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_detects_typed_hospital() {
        let json = r#"{"type":"hospital","data":{"id":"h1","name":"Test","province":"","city":"","departments":[]},"dbData":[]}"#;
        let doc = BackupDocument::parse(json.as_bytes()).unwrap();
        match doc {
            BackupDocument::Hospital { data, db_data } => {
                assert_eq!(data.id, "h1");
                assert_eq!(db_data.unwrap().len(), 0);
            }
            other => panic!("expected hospital document, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_type() {
        let err = BackupDocument::parse(br#"{"type":"wards","data":[]}"#).unwrap_err();
        assert!(matches!(err, BackupError::Malformed(_)));
    }

    #[test]
    fn test_parse_rejects_untyped_object() {
        let err = BackupDocument::parse(br#"{"data":[]}"#).unwrap_err();
        assert!(matches!(err, BackupError::Malformed(_)));
    }

    #[test]
    fn test_parse_rejects_all_hospitals_with_non_array_data() {
        let json = r#"{"type":"all_hospitals","data":{"id":"h1"}}"#;
        let err = BackupDocument::parse(json.as_bytes()).unwrap_err();
        assert!(matches!(err, BackupError::Malformed(_)));
    }

    #[test]
    fn test_serialized_document_carries_type_tag() {
        let doc = BackupDocument::AllHospitals {
            data: vec![],
            db_data: Some(vec![]),
        };
        let json = doc.to_json_pretty().unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["type"], "all_hospitals");
        assert!(value["data"].is_array());
        assert!(value["dbData"].is_array());
    }

    #[test]
    fn test_typed_round_trip() {
        let doc = BackupDocument::Department {
            data: Department {
                id: "d1".to_string(),
                name: "ICU".to_string(),
                manager_name: "Manager".to_string(),
                manager_national_id: "001".to_string(),
                manager_password: "pw".to_string(),
                staff_count: 12,
                bed_count: 8,
                staff: vec![],
                patient_education_materials: None,
                patients: None,
            },
            context: DepartmentContext {
                hospital_id: "h1".to_string(),
                hospital_name: "Hope".to_string(),
            },
        };
        let json = doc.to_json_pretty().unwrap();
        assert_eq!(BackupDocument::parse(json.as_bytes()).unwrap(), doc);
    }
}
