// ==========================================
// Skill Assessment Suite - backup engine error types
// ==========================================
// Taxonomy: every rejection leaves both stores untouched; none of
// these are fatal to the application, the user may retry or cancel.
// Tool: thiserror derive macro
// ==========================================

use crate::backup::scope::ScopeKind;
use crate::i18n::{t, t_with_args};
use crate::repository::RepositoryError;
use thiserror::Error;

/// Backup/restore engine errors.
#[derive(Error, Debug)]
pub enum BackupError {
    // ===== document errors =====
    #[error("backup file is not valid JSON: {0}")]
    Parse(String),

    #[error("backup document shape is not recognized: {0}")]
    Malformed(String),

    // ===== validation errors =====
    #[error("document requires {required:?} scope")]
    ScopeMismatch { required: ScopeKind },

    #[error("department document belongs to a different hospital: {owner_name}")]
    OwnershipMismatch { owner_name: String },

    // ===== store errors =====
    #[error(transparent)]
    Storage(#[from] RepositoryError),
}

impl BackupError {
    /// Human-readable message in the current locale.
    pub fn user_message(&self) -> String {
        match self {
            BackupError::Parse(_) => t("backup.error.parse"),
            BackupError::Malformed(_) => t("backup.error.malformed"),
            BackupError::ScopeMismatch { required } => match required {
                ScopeKind::Department => t("backup.error.department_scope_required"),
                ScopeKind::Hospital => t("backup.error.hospital_scope_required"),
                ScopeKind::All => t("backup.error.all_scope_required"),
            },
            BackupError::OwnershipMismatch { owner_name } => {
                t_with_args("backup.error.foreign_hospital", &[("name", owner_name)])
            }
            BackupError::Storage(err) => {
                t_with_args("backup.error.storage", &[("message", &err.to_string())])
            }
        }
    }
}

/// Result type alias.
pub type BackupResult<T> = Result<T, BackupError>;
