// ==========================================
// Skill Assessment Suite - domain model layer
// ==========================================
// Responsibility: entities, enums, navigation types
// Red line: no data access logic, no backup-engine logic
// ==========================================

pub mod department;
pub mod exam;
pub mod hospital;
pub mod material;
pub mod staff;
pub mod template;
pub mod types;

// Re-export core types
pub use department::{ChatMessage, ChatSender, Department, Patient};
pub use exam::{ExamAnswer, ExamSubmission, ExamTemplate, Question, QuestionType};
pub use hospital::{AdminMessage, AdminSender, Hospital, MessageFile, NewsBanner};
pub use material::{AttachmentRecord, MonthlyTraining, TrainingMaterial};
pub use staff::{Assessment, MonthlyWorkLog, SkillCategory, SkillItem, StaffMember};
pub use template::{ChecklistCategoryTemplate, ChecklistItemTemplate, NamedChecklistTemplate};
pub use types::{NavState, View};
