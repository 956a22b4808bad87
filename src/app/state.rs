// ==========================================
// Skill Assessment Suite - application state
// ==========================================
// Responsibility: wire the stores, the record API and the backup
// engine together, and hold the current navigation state. The file
// boundary here stands in for the frontend's file-picker / download
// trigger: it only moves raw bytes in and out.
// ==========================================

use crate::api::HospitalApi;
use crate::backup::{BackupEngine, BackupResult, ConfirmationGate, ExportBundle, ImportOutcome};
use crate::domain::NavState;
use crate::repository::{
    open_stores, AttachmentStore, RecordStore, RepositoryError, RepositoryResult,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub struct AppState {
    pub db_path: String,
    pub records: Arc<dyn RecordStore>,
    pub attachments: Arc<dyn AttachmentStore>,
    pub hospital_api: Arc<HospitalApi>,
    pub backup: Arc<BackupEngine>,
    pub nav: NavState,
}

impl AppState {
    pub fn new(db_path: String) -> RepositoryResult<Self> {
        let (records, attachments) = open_stores(&db_path)?;
        let records: Arc<dyn RecordStore> = Arc::new(records);
        let attachments: Arc<dyn AttachmentStore> = Arc::new(attachments);

        Ok(Self {
            db_path,
            hospital_api: Arc::new(HospitalApi::new(records.clone(), attachments.clone())),
            backup: Arc::new(BackupEngine::new(records.clone(), attachments.clone())),
            records,
            attachments,
            nav: NavState::default(),
        })
    }

    /// Export the current scope and write the bundle into `dir`.
    /// Returns the path of the written file.
    pub async fn save_backup_to_dir(&self, dir: &Path) -> BackupResult<PathBuf> {
        let ExportBundle { file_name, json } = self.backup.export(&self.nav).await?;
        let path = dir.join(file_name);
        std::fs::write(&path, json)
            .map_err(|e| RepositoryError::InternalError(e.to_string()))?;
        tracing::info!(path = %path.display(), "backup written");
        Ok(path)
    }

    /// Read a backup file and run the import protocol against the
    /// current scope.
    pub async fn load_backup_from_file(
        &mut self,
        path: &Path,
        gate: &dyn ConfirmationGate,
    ) -> BackupResult<ImportOutcome> {
        let bytes = std::fs::read(path)
            .map_err(|e| RepositoryError::InternalError(e.to_string()))?;
        let mut nav = self.nav.clone();
        let outcome = self.backup.import(&bytes, &mut nav, gate).await?;
        self.nav = nav;
        Ok(outcome)
    }
}
