// ==========================================
// Skill Assessment Suite - scope resolver
// ==========================================
// Responsibility: map the current navigation state onto one of the
// three export/import scopes (department / hospital / all).
// Red line: pure function, no side effects, resolved fresh on every
// export and import attempt - navigation can change in between.
// ==========================================

use crate::domain::hospital::find_hospital;
use crate::domain::{Hospital, NavState, View};

/// The three mutually exclusive backup scopes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeKind {
    Department,
    Hospital,
    All,
}

/// A resolved scope with the identities it binds to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedScope {
    pub kind: ScopeKind,
    pub hospital_id: Option<String>,
    pub department_id: Option<String>,
    /// Name of the scoped entity, for prompts and filenames.
    pub display_name: Option<String>,
}

/// Views that pin the scope to the selected department.
fn is_department_view(view: View) -> bool {
    matches!(
        view,
        View::DepartmentView | View::StaffMemberView | View::PatientEducationManager
    )
}

/// Views that pin the scope to the selected hospital.
fn is_hospital_view(view: View) -> bool {
    matches!(
        view,
        View::DepartmentList
            | View::ChecklistManager
            | View::ExamManager
            | View::TrainingManager
            | View::AccreditationManager
            | View::NewsBannerManager
            | View::HospitalCommunication
    )
}

/// Resolve the backup scope from the current navigation state.
///
/// Falls back to `All` whenever no hospital is selected or the current
/// view is not bound to a narrower scope (hospital list, admin-wide
/// communication, patient portal).
pub fn resolve_scope(hospitals: &[Hospital], nav: &NavState) -> ResolvedScope {
    let hospital = nav
        .selected_hospital_id
        .as_deref()
        .and_then(|id| find_hospital(hospitals, id));
    let department = hospital.and_then(|h| {
        nav.selected_department_id
            .as_deref()
            .and_then(|id| h.find_department(id))
    });

    if let (Some(h), Some(d)) = (hospital, department) {
        if is_department_view(nav.current_view) {
            return ResolvedScope {
                kind: ScopeKind::Department,
                hospital_id: Some(h.id.clone()),
                department_id: Some(d.id.clone()),
                display_name: Some(d.name.clone()),
            };
        }
    }

    if let Some(h) = hospital {
        if is_hospital_view(nav.current_view) {
            return ResolvedScope {
                kind: ScopeKind::Hospital,
                hospital_id: Some(h.id.clone()),
                department_id: None,
                display_name: Some(h.name.clone()),
            };
        }
    }

    ResolvedScope {
        kind: ScopeKind::All,
        hospital_id: None,
        department_id: None,
        display_name: None,
    }
}
