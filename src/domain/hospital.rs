// ==========================================
// Skill Assessment Suite - hospital entities
// ==========================================
// The hospital is the root of the record tree. Its `id` is the stable
// join key for hospital-scope and all-scope backup reconciliation.
// ==========================================

use crate::domain::department::Department;
use crate::domain::exam::ExamTemplate;
use crate::domain::material::{MonthlyTraining, TrainingMaterial};
use crate::domain::template::NamedChecklistTemplate;
use serde::{Deserialize, Serialize};

/// Reference to a file stored in the Attachment Store, carried inside
/// chat / admin messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageFile {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub mime_type: String,
}

/// Home-screen news banner. `imageId` references the Attachment Store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsBanner {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub image_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdminSender {
    Hospital,
    Admin,
}

/// Hospital-to-admin communication message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminMessage {
    pub id: String,
    pub sender: AdminSender,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<MessageFile>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hospital {
    // ===== identity =====
    pub id: String,
    pub name: String,

    // ===== location =====
    #[serde(default)]
    pub province: String,
    #[serde(default)]
    pub city: String,

    // ===== supervisor credentials =====
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supervisor_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supervisor_national_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supervisor_password: Option<String>,

    // ===== owned collections =====
    #[serde(default)]
    pub departments: Vec<Department>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checklist_templates: Option<Vec<NamedChecklistTemplate>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exam_templates: Option<Vec<ExamTemplate>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub training_materials: Option<Vec<MonthlyTraining>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accreditation_materials: Option<Vec<TrainingMaterial>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub news_banners: Option<Vec<NewsBanner>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_messages: Option<Vec<AdminMessage>>,
}

impl Hospital {
    pub fn find_department(&self, department_id: &str) -> Option<&Department> {
        self.departments.iter().find(|d| d.id == department_id)
    }

    pub fn find_department_mut(&mut self, department_id: &str) -> Option<&mut Department> {
        self.departments.iter_mut().find(|d| d.id == department_id)
    }
}

/// Look up a hospital by id in the record tree.
pub fn find_hospital<'a>(hospitals: &'a [Hospital], id: &str) -> Option<&'a Hospital> {
    hospitals.iter().find(|h| h.id == id)
}
