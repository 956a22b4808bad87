// ==========================================
// Skill Assessment Suite - navigation types
// ==========================================
// The backup scope is derived from these; they mirror the screens of
// the management frontend.
// ==========================================

use serde::{Deserialize, Serialize};

/// The screen currently shown by the frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum View {
    DepartmentList,
    DepartmentView,
    StaffMemberView,
    ChecklistManager,
    ExamManager,
    TrainingManager,
    AccreditationManager,
    NewsBannerManager,
    PatientEducationManager,
    PatientPortal,
    HospitalCommunication,
    AdminCommunication,
}

/// Current navigation state. The scope resolver reads this fresh on
/// every export/import attempt; it is never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavState {
    pub selected_hospital_id: Option<String>,
    pub selected_department_id: Option<String>,
    pub current_view: View,
}

impl NavState {
    /// Top-level hospital list, nothing selected.
    pub fn hospital_list() -> Self {
        Self {
            selected_hospital_id: None,
            selected_department_id: None,
            current_view: View::DepartmentList,
        }
    }

    pub fn in_hospital(hospital_id: impl Into<String>) -> Self {
        Self {
            selected_hospital_id: Some(hospital_id.into()),
            selected_department_id: None,
            current_view: View::DepartmentList,
        }
    }

    pub fn in_department(hospital_id: impl Into<String>, department_id: impl Into<String>) -> Self {
        Self {
            selected_hospital_id: Some(hospital_id.into()),
            selected_department_id: Some(department_id.into()),
            current_view: View::DepartmentView,
        }
    }
}

impl Default for NavState {
    fn default() -> Self {
        Self::hospital_list()
    }
}
