// ==========================================
// Skill Assessment Suite - training material entities
// ==========================================
// Red line: attachment payloads are never kept inside the record tree;
// records carry the attachment id, the bytes live in the Attachment Store.
// The `data` field on TrainingMaterial only appears in legacy backup
// documents and is stripped during migration.
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// TrainingMaterial - a single material record
// ==========================================
// Used for monthly training, accreditation archives and
// department-level patient-education materials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingMaterial {
    pub id: String,

    #[serde(default)]
    pub name: String,

    /// Mime type of the underlying payload.
    #[serde(rename = "type", default)]
    pub mime_type: String,

    /// Legacy inline payload slot (base64 data URL). Current-format
    /// trees never carry it; see the legacy all-hospitals migration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// One bucket of training materials per (Persian) month name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTraining {
    pub month: String,
    #[serde(default)]
    pub materials: Vec<TrainingMaterial>,
}

// ==========================================
// AttachmentRecord - Attachment Store row
// ==========================================
// `data` is a self-describing payload (data URL), opaque to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttachmentRecord {
    pub id: String,
    pub data: String,
}
