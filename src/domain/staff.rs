// ==========================================
// Skill Assessment Suite - staff & assessment entities
// ==========================================
// Invariant: exactly one Assessment per (StaffMember, month).
// `upsert_assessment` is the only sanctioned way to write one.
// ==========================================

use crate::domain::exam::ExamSubmission;
use crate::domain::template::NamedChecklistTemplate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillItem {
    pub description: String,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillCategory {
    pub name: String,
    #[serde(default)]
    pub items: Vec<SkillItem>,
}

/// One month's skill evaluation for a staff member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub id: String,
    pub month: String,
    #[serde(default)]
    pub skill_categories: Vec<SkillCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supervisor_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager_message: Option<String>,
    /// Template used for this evaluation, with the score range
    /// snapshotted at assessment time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_score: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_score: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exam_submissions: Option<Vec<ExamSubmission>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyWorkLog {
    pub month: String,
    #[serde(default)]
    pub overtime_hours: f64,
    #[serde(default)]
    pub required_hours: f64,
    #[serde(default)]
    pub quarterly_leave_remaining: f64,
    #[serde(default)]
    pub annual_leave_remaining: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffMember {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub national_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default)]
    pub assessments: Vec<Assessment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_logs: Option<Vec<MonthlyWorkLog>>,
}

impl StaffMember {
    /// Replace the same-month assessment or append a new one.
    ///
    /// Carries over the existing assessment's id, supervisor/manager
    /// messages and exam submissions when the month already exists, so a
    /// re-evaluation never duplicates the month or loses feedback.
    pub fn upsert_assessment(
        &mut self,
        month: &str,
        skills: Vec<SkillCategory>,
        template: Option<&NamedChecklistTemplate>,
    ) -> &Assessment {
        let existing = self.assessments.iter().position(|a| a.month == month);

        let assessment = Assessment {
            id: match existing {
                Some(i) => self.assessments[i].id.clone(),
                None => Uuid::new_v4().to_string(),
            },
            month: month.to_string(),
            skill_categories: skills,
            supervisor_message: existing.and_then(|i| self.assessments[i].supervisor_message.clone()),
            manager_message: existing.and_then(|i| self.assessments[i].manager_message.clone()),
            template_id: template.map(|t| t.id.clone()),
            min_score: template.and_then(|t| t.min_score),
            max_score: template.and_then(|t| t.max_score),
            exam_submissions: existing.and_then(|i| self.assessments[i].exam_submissions.clone()),
        };

        match existing {
            Some(i) => {
                self.assessments[i] = assessment;
                &self.assessments[i]
            }
            None => {
                self.assessments.push(assessment);
                self.assessments.last().unwrap()
            }
        }
    }
}
