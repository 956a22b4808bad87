// ==========================================
// Skill Assessment Suite - export serializer
// ==========================================
// Responsibility: produce the in-scope snapshot as a self-describing
// JSON document plus a descriptive filename.
// Red line: export only reads; any failure aborts with no partial
// output and no store mutation.
// ==========================================

use crate::backup::closure::hospital_attachment_ids;
use crate::backup::document::{BackupDocument, DepartmentContext};
use crate::backup::error::{BackupError, BackupResult};
use crate::backup::scope::{resolve_scope, ScopeKind};
use crate::domain::{Hospital, NavState};
use crate::repository::{AttachmentStore, RepositoryError};

/// A ready-to-download backup: file name + JSON body.
#[derive(Debug, Clone)]
pub struct ExportBundle {
    pub file_name: String,
    pub json: String,
}

fn sanitize_name(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join("_")
}

fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

/// Build the backup document for the scope implied by `nav`.
///
/// - department scope: the department record only. Attachments are
///   intentionally not bundled at this scope; department-level
///   materials are expected to travel with hospital-scope exports.
/// - hospital scope: the hospital record plus the closure of every
///   attachment id reachable from it (restricted to ids present in the
///   store).
/// - all scope: every hospital plus the entire attachment store.
pub async fn build_backup(
    hospitals: &[Hospital],
    nav: &NavState,
    attachments: &dyn AttachmentStore,
) -> BackupResult<ExportBundle> {
    let scope = resolve_scope(hospitals, nav);

    match scope.kind {
        ScopeKind::Department => {
            let hospital_id = scope.hospital_id.as_deref().unwrap_or_default();
            let department_id = scope.department_id.as_deref().unwrap_or_default();
            let hospital = hospitals
                .iter()
                .find(|h| h.id == hospital_id)
                .ok_or_else(|| missing("Hospital", hospital_id))?;
            let department = hospital
                .find_department(department_id)
                .ok_or_else(|| missing("Department", department_id))?;

            let document = BackupDocument::Department {
                data: department.clone(),
                context: DepartmentContext {
                    hospital_id: hospital.id.clone(),
                    hospital_name: hospital.name.clone(),
                },
            };
            Ok(ExportBundle {
                file_name: format!(
                    "skill_assessment_DEPT_{}_{}.json",
                    sanitize_name(&department.name),
                    today()
                ),
                json: document.to_json_pretty()?,
            })
        }

        ScopeKind::Hospital => {
            let hospital_id = scope.hospital_id.as_deref().unwrap_or_default();
            let hospital = hospitals
                .iter()
                .find(|h| h.id == hospital_id)
                .ok_or_else(|| missing("Hospital", hospital_id))?;

            let ids = hospital_attachment_ids(hospital);
            let db_data = attachments.get_where_id_in(&ids).await?;

            let document = BackupDocument::Hospital {
                data: hospital.clone(),
                db_data: Some(db_data),
            };
            Ok(ExportBundle {
                file_name: format!(
                    "skill_assessment_HOSPITAL_{}_{}.json",
                    sanitize_name(&hospital.name),
                    today()
                ),
                json: document.to_json_pretty()?,
            })
        }

        ScopeKind::All => {
            let db_data = attachments.get_all().await?;
            let document = BackupDocument::AllHospitals {
                data: hospitals.to_vec(),
                db_data: Some(db_data),
            };
            Ok(ExportBundle {
                file_name: format!("skill_assessment_ALL_{}.json", today()),
                json: document.to_json_pretty()?,
            })
        }
    }
}

fn missing(entity: &str, id: &str) -> BackupError {
    BackupError::Storage(RepositoryError::NotFound {
        entity: entity.to_string(),
        id: id.to_string(),
    })
}
