// ==========================================
// Skill Assessment Suite - department & patient entities
// ==========================================

use crate::domain::material::TrainingMaterial;
use crate::domain::staff::StaffMember;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatSender {
    Patient,
    Manager,
}

/// One message in a patient's chat with the department manager.
/// File payloads live in the Attachment Store; only the id travels here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub sender: ChatSender,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<crate::domain::hospital::MessageFile>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub national_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat_history: Option<Vec<ChatMessage>>,
}

/// A hospital department. `id` is the stable join key used by
/// department-scope backup import.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub manager_name: String,
    #[serde(default)]
    pub manager_national_id: String,
    #[serde(default)]
    pub manager_password: String,
    #[serde(default)]
    pub staff_count: i32,
    #[serde(default)]
    pub bed_count: i32,
    #[serde(default)]
    pub staff: Vec<StaffMember>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient_education_materials: Option<Vec<TrainingMaterial>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patients: Option<Vec<Patient>>,
}
