// ==========================================
// Skill Assessment Suite - backup/restore engine
// ==========================================
// Responsibility: scoped export/import of the record tree and its
// referenced attachments (the backup protocol)
// ==========================================

pub mod closure;
pub mod document;
pub mod engine;
pub mod error;
pub mod export;
pub mod import;
pub mod scope;

pub use closure::{department_attachment_ids, hospital_attachment_ids};
pub use document::{BackupDocument, DepartmentContext};
pub use engine::BackupEngine;
pub use error::{BackupError, BackupResult};
pub use export::{build_backup, ExportBundle};
pub use import::{
    apply_import, plan_import, AutoConfirm, AutoDecline, ConfirmationGate, ImportOutcome,
    ImportPlan,
};
pub use scope::{resolve_scope, ResolvedScope, ScopeKind};
