// ==========================================
// Skill Assessment Suite - checklist template entities
// ==========================================
// Templates are owned at hospital level and snapshotted into
// assessments at evaluation time (templateId + score range).
// ==========================================

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistItemTemplate {
    pub id: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistCategoryTemplate {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub items: Vec<ChecklistItemTemplate>,
}

/// A named skill checklist with an optional score range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamedChecklistTemplate {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub categories: Vec<ChecklistCategoryTemplate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_score: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_score: Option<i32>,
}
