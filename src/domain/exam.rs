// ==========================================
// Skill Assessment Suite - exam entities
// ==========================================

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestionType {
    #[serde(rename = "multiple-choice")]
    MultipleChoice,
    #[serde(rename = "descriptive")]
    Descriptive,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub text: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    /// For multiple-choice this is the option text, for descriptive
    /// questions the model answer.
    pub correct_answer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamTemplate {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamAnswer {
    pub question_id: String,
    pub answer: String,
}

/// A staff member's submission for one exam template. Questions are
/// snapshotted so later template edits do not rewrite history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamSubmission {
    pub id: String,
    pub exam_template_id: String,
    /// Denormalized for display.
    #[serde(default)]
    pub exam_name: String,
    #[serde(default)]
    pub answers: Vec<ExamAnswer>,
    /// Count of correct multiple-choice answers.
    #[serde(default)]
    pub score: i32,
    #[serde(default)]
    pub total_correctable_questions: i32,
    #[serde(default)]
    pub submission_date: String,
    #[serde(default)]
    pub questions: Vec<Question>,
}
