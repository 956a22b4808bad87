// ==========================================
// Skill Assessment Suite - import validator & merger
// ==========================================
// The accept/reject/merge state machine of the backup protocol:
//   validate(document, current scope) -> ImportPlan | BackupError
//   confirm(plan)                     -> user gate, declining is a no-op
//   apply(plan)                       -> store mutations
// Red lines:
// - validate before mutate; every rejection leaves both stores untouched
// - the record tree is only ever mutated by whole-tree replace
// - batch attachment operations are best-effort: individual failures
//   are logged and surfaced as warnings, never silently dropped, and
//   the tree replace is sequenced strictly after the batch settles
// ==========================================

use crate::backup::closure::hospital_attachment_ids;
use crate::backup::document::BackupDocument;
use crate::backup::error::{BackupError, BackupResult};
use crate::backup::scope::{resolve_scope, ScopeKind};
use crate::domain::{AttachmentRecord, Department, Hospital, NavState};
use crate::i18n::{t, t_with_args};
use crate::repository::{AttachmentStore, RecordStore, RepositoryError};
use futures::future::join_all;

// ==========================================
// Confirmation gate
// ==========================================

/// User confirmation before any accepted import mutates state.
/// The frontend shows the prompt; declining cancels the import.
pub trait ConfirmationGate: Send + Sync {
    fn confirm(&self, prompt: &str) -> bool;
}

/// Gate that accepts every prompt. Test/tooling use.
pub struct AutoConfirm;

impl ConfirmationGate for AutoConfirm {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}

/// Gate that declines every prompt. Test use.
pub struct AutoDecline;

impl ConfirmationGate for AutoDecline {
    fn confirm(&self, _prompt: &str) -> bool {
        false
    }
}

// ==========================================
// Import plan
// ==========================================

/// An accepted, not-yet-confirmed import action.
#[derive(Debug, Clone, PartialEq)]
pub enum ImportPlan {
    /// Replace the currently selected department with the loaded one.
    ReplaceDepartment {
        hospital_id: String,
        /// Id of the department being replaced (the loaded record may
        /// carry a different id).
        target_department_id: String,
        current_name: String,
        loaded: Department,
    },
    /// Replace the currently selected hospital with the loaded one.
    OverwriteSelectedHospital {
        existing_id: String,
        existing_name: String,
        loaded: Hospital,
        db_data: Option<Vec<AttachmentRecord>>,
    },
    /// All scope: a hospital with the loaded id already exists.
    OverwriteHospitalById {
        existing_id: String,
        loaded: Hospital,
        db_data: Option<Vec<AttachmentRecord>>,
    },
    /// All scope: no hospital with the loaded id, append as new.
    AddHospital {
        loaded: Hospital,
        db_data: Option<Vec<AttachmentRecord>>,
    },
    /// Replace everything (current format, separate dbData list).
    ReplaceAll {
        hospitals: Vec<Hospital>,
        db_data: Vec<AttachmentRecord>,
    },
    /// Replace everything from a legacy-format document (bare array,
    /// or tagged all-hospitals without a dbData list): inline
    /// attachment payloads are migrated into the store and stripped
    /// from the tree.
    ReplaceAllLegacy { hospitals: Vec<Hospital> },
}

impl ImportPlan {
    /// Localized confirmation prompt naming the affected entity.
    pub fn confirmation_prompt(&self) -> String {
        match self {
            ImportPlan::ReplaceDepartment {
                current_name,
                loaded,
                ..
            } => t_with_args(
                "backup.confirm.replace_department",
                &[("current", current_name), ("loaded", &loaded.name)],
            ),
            ImportPlan::OverwriteSelectedHospital {
                existing_name,
                loaded,
                ..
            } => t_with_args(
                "backup.confirm.overwrite_hospital",
                &[("current", existing_name), ("loaded", &loaded.name)],
            ),
            ImportPlan::OverwriteHospitalById { loaded, .. } => t_with_args(
                "backup.confirm.overwrite_existing_hospital",
                &[("name", &loaded.name)],
            ),
            ImportPlan::AddHospital { loaded, .. } => {
                t_with_args("backup.confirm.add_hospital", &[("name", &loaded.name)])
            }
            ImportPlan::ReplaceAll { .. } | ImportPlan::ReplaceAllLegacy { .. } => {
                t("backup.confirm.replace_all")
            }
        }
    }
}

// ==========================================
// Validation
// ==========================================

/// Validate a parsed document against the current scope.
///
/// Rules in order, first failing rule wins:
/// 1. scope/type compatibility
/// 2. ownership (department documents must belong to the selected hospital)
pub fn plan_import(
    document: BackupDocument,
    hospitals: &[Hospital],
    nav: &NavState,
) -> BackupResult<ImportPlan> {
    let scope = resolve_scope(hospitals, nav);

    match document {
        BackupDocument::Department { data, context } => {
            let (hospital_id, department_id) = match (
                scope.kind,
                scope.hospital_id.clone(),
                scope.department_id.clone(),
            ) {
                (ScopeKind::Department, Some(h), Some(d)) => (h, d),
                _ => {
                    return Err(BackupError::ScopeMismatch {
                        required: ScopeKind::Department,
                    })
                }
            };

            if context.hospital_id != hospital_id {
                return Err(BackupError::OwnershipMismatch {
                    owner_name: context.hospital_name,
                });
            }

            Ok(ImportPlan::ReplaceDepartment {
                hospital_id,
                target_department_id: department_id,
                current_name: scope.display_name.unwrap_or_default(),
                loaded: data,
            })
        }

        BackupDocument::Hospital { data, db_data } => match scope.kind {
            ScopeKind::Hospital => Ok(ImportPlan::OverwriteSelectedHospital {
                existing_id: scope.hospital_id.unwrap_or_default(),
                existing_name: scope.display_name.unwrap_or_default(),
                loaded: data,
                db_data,
            }),
            ScopeKind::All => match hospitals.iter().find(|h| h.id == data.id) {
                Some(existing) => Ok(ImportPlan::OverwriteHospitalById {
                    existing_id: existing.id.clone(),
                    loaded: data,
                    db_data,
                }),
                None => Ok(ImportPlan::AddHospital {
                    loaded: data,
                    db_data,
                }),
            },
            ScopeKind::Department => Err(BackupError::ScopeMismatch {
                required: ScopeKind::Hospital,
            }),
        },

        BackupDocument::AllHospitals { data, db_data } => match scope.kind {
            // A missing dbData list marks the legacy sub-format: the
            // payloads are inline in the records and must be migrated,
            // regardless of how the document was tagged.
            ScopeKind::All => Ok(match db_data {
                Some(db_data) => ImportPlan::ReplaceAll {
                    hospitals: data,
                    db_data,
                },
                None => ImportPlan::ReplaceAllLegacy { hospitals: data },
            }),
            _ => Err(BackupError::ScopeMismatch {
                required: ScopeKind::All,
            }),
        },

        BackupDocument::LegacyAllHospitals { data } => match scope.kind {
            ScopeKind::All => Ok(ImportPlan::ReplaceAllLegacy { hospitals: data }),
            _ => Err(BackupError::ScopeMismatch {
                required: ScopeKind::All,
            }),
        },
    }
}

// ==========================================
// Outcome
// ==========================================

/// Terminal result of a confirmed import.
#[derive(Debug, Clone, PartialEq)]
pub enum ImportOutcome {
    /// The user declined the confirmation prompt. Nothing changed.
    Cancelled,
    Applied {
        /// Localized message naming what was loaded.
        message: String,
        /// Best-effort attachment operations that failed.
        warnings: Vec<String>,
    },
}

// ==========================================
// Apply
// ==========================================

/// Execute a confirmed plan against the stores.
///
/// The tree is re-read here so the replace is a single whole-tree
/// read-modify-write even if navigation-driven edits happened between
/// planning and confirmation.
pub async fn apply_import(
    plan: ImportPlan,
    records: &dyn RecordStore,
    attachments: &dyn AttachmentStore,
    nav: &mut NavState,
) -> BackupResult<ImportOutcome> {
    match plan {
        ImportPlan::ReplaceDepartment {
            hospital_id,
            target_department_id,
            loaded,
            ..
        } => {
            let mut tree = records.read_all().await?;
            let hospital = tree
                .iter_mut()
                .find(|h| h.id == hospital_id)
                .ok_or_else(|| not_found("Hospital", &hospital_id))?;
            let slot = hospital
                .departments
                .iter_mut()
                .find(|d| d.id == target_department_id)
                .ok_or_else(|| not_found("Department", &target_department_id))?;

            let loaded_name = loaded.name.clone();
            let loaded_id = loaded.id.clone();
            *slot = loaded;
            records.replace_all(&tree).await?;

            // The loaded record may carry a different id; repoint the
            // selection so subsequent operations target it.
            nav.selected_department_id = Some(loaded_id);

            Ok(ImportOutcome::Applied {
                message: t_with_args("backup.success.department_loaded", &[("name", &loaded_name)]),
                warnings: Vec::new(),
            })
        }

        ImportPlan::OverwriteSelectedHospital {
            existing_id,
            loaded,
            db_data,
            ..
        }
        | ImportPlan::OverwriteHospitalById {
            existing_id,
            loaded,
            db_data,
        } => overwrite_hospital(existing_id, loaded, db_data, records, attachments, nav).await,

        ImportPlan::AddHospital { loaded, db_data } => {
            let mut warnings = Vec::new();
            if let Some(db_data) = &db_data {
                put_batch(db_data, attachments, &mut warnings).await;
            }

            let mut tree = records.read_all().await?;
            let loaded_name = loaded.name.clone();
            tree.push(loaded);
            records.replace_all(&tree).await?;

            Ok(ImportOutcome::Applied {
                message: t_with_args("backup.success.hospital_added", &[("name", &loaded_name)]),
                warnings,
            })
        }

        ImportPlan::ReplaceAll { hospitals, db_data } => {
            let mut warnings = Vec::new();
            attachments.clear().await?;
            put_batch(&db_data, attachments, &mut warnings).await;
            records.replace_all(&hospitals).await?;

            Ok(ImportOutcome::Applied {
                message: t("backup.success.all_loaded"),
                warnings,
            })
        }

        ImportPlan::ReplaceAllLegacy { mut hospitals } => {
            let mut warnings = Vec::new();
            attachments.clear().await?;

            // Move inline payloads into the store, stripping them from
            // the in-memory records so the tree never retains them.
            let mut migrated = Vec::new();
            for hospital in &mut hospitals {
                if let Some(monthlies) = &mut hospital.training_materials {
                    for monthly in monthlies {
                        for material in &mut monthly.materials {
                            if let Some(data) = material.data.take() {
                                migrated.push(AttachmentRecord {
                                    id: material.id.clone(),
                                    data,
                                });
                            }
                        }
                    }
                }
                if let Some(materials) = &mut hospital.accreditation_materials {
                    for material in materials {
                        if let Some(data) = material.data.take() {
                            migrated.push(AttachmentRecord {
                                id: material.id.clone(),
                                data,
                            });
                        }
                    }
                }
            }

            // All moves settle before the tree replace commits.
            put_batch(&migrated, attachments, &mut warnings).await;
            records.replace_all(&hospitals).await?;

            Ok(ImportOutcome::Applied {
                message: t("backup.success.legacy_loaded"),
                warnings,
            })
        }
    }
}

/// Shared hospital-overwrite procedure (hospital scope and all scope).
///
/// Deletes the attachment closure of the existing record, upserts the
/// loaded attachment list, then replaces the hospital in the tree.
async fn overwrite_hospital(
    existing_id: String,
    loaded: Hospital,
    db_data: Option<Vec<AttachmentRecord>>,
    records: &dyn RecordStore,
    attachments: &dyn AttachmentStore,
    nav: &mut NavState,
) -> BackupResult<ImportOutcome> {
    let mut tree = records.read_all().await?;
    let existing = tree
        .iter()
        .find(|h| h.id == existing_id)
        .ok_or_else(|| not_found("Hospital", &existing_id))?;

    let mut warnings = Vec::new();

    // Old attachments first: each deletion is independent.
    let old_ids: Vec<String> = hospital_attachment_ids(existing).into_iter().collect();
    let results = join_all(old_ids.iter().map(|id| attachments.delete(id))).await;
    for (id, result) in old_ids.iter().zip(results) {
        if let Err(err) = result {
            tracing::warn!(attachment_id = %id, error = %err, "attachment delete failed");
            warnings.push(t_with_args(
                "backup.warn.attachment_delete_failed",
                &[("id", id), ("message", &err.to_string())],
            ));
        }
    }

    if let Some(db_data) = &db_data {
        put_batch(db_data, attachments, &mut warnings).await;
    }

    let loaded_name = loaded.name.clone();
    let loaded_id = loaded.id.clone();
    if let Some(pos) = tree.iter().position(|h| h.id == existing_id) {
        tree[pos] = loaded;
    }
    records.replace_all(&tree).await?;

    // Keep the selection pointing at the record that replaced it.
    if nav.selected_hospital_id.as_deref() == Some(existing_id.as_str()) {
        nav.selected_hospital_id = Some(loaded_id);
    }

    Ok(ImportOutcome::Applied {
        message: t_with_args("backup.success.hospital_overwritten", &[("name", &loaded_name)]),
        warnings,
    })
}

/// Upsert a batch of attachment records, best-effort.
async fn put_batch(
    db_data: &[AttachmentRecord],
    attachments: &dyn AttachmentStore,
    warnings: &mut Vec<String>,
) {
    let results = join_all(db_data.iter().map(|record| attachments.put(record))).await;
    for (record, result) in db_data.iter().zip(results) {
        if let Err(err) = result {
            tracing::warn!(attachment_id = %record.id, error = %err, "attachment insert failed");
            warnings.push(t_with_args(
                "backup.warn.attachment_put_failed",
                &[("id", &record.id), ("message", &err.to_string())],
            ));
        }
    }
}

fn not_found(entity: &str, id: &str) -> BackupError {
    BackupError::Storage(RepositoryError::NotFound {
        entity: entity.to_string(),
        id: id.to_string(),
    })
}
