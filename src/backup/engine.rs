// ==========================================
// Skill Assessment Suite - backup engine facade
// ==========================================
// Wires scope resolution, export serialization and the import state
// machine over the two stores. This is what the app layer talks to.
// ==========================================

use crate::backup::document::BackupDocument;
use crate::backup::error::BackupResult;
use crate::backup::export::{build_backup, ExportBundle};
use crate::backup::import::{apply_import, plan_import, ConfirmationGate, ImportOutcome};
use crate::domain::NavState;
use crate::repository::{AttachmentStore, RecordStore};
use std::sync::Arc;

pub struct BackupEngine {
    records: Arc<dyn RecordStore>,
    attachments: Arc<dyn AttachmentStore>,
}

impl BackupEngine {
    pub fn new(records: Arc<dyn RecordStore>, attachments: Arc<dyn AttachmentStore>) -> Self {
        Self {
            records,
            attachments,
        }
    }

    /// Export the snapshot for the scope implied by `nav`.
    pub async fn export(&self, nav: &NavState) -> BackupResult<ExportBundle> {
        let hospitals = self.records.read_all().await?;
        build_backup(&hospitals, nav, self.attachments.as_ref()).await
    }

    /// Run the full import protocol on raw file bytes:
    /// parse -> validate -> confirm -> apply.
    ///
    /// A declined confirmation returns `ImportOutcome::Cancelled` with
    /// no state change; every rejection is a `BackupError` with no
    /// state change.
    pub async fn import(
        &self,
        bytes: &[u8],
        nav: &mut NavState,
        gate: &dyn ConfirmationGate,
    ) -> BackupResult<ImportOutcome> {
        let document = BackupDocument::parse(bytes)?;

        let hospitals = self.records.read_all().await?;
        let plan = plan_import(document, &hospitals, nav)?;

        if !gate.confirm(&plan.confirmation_prompt()) {
            tracing::info!("import cancelled at confirmation gate");
            return Ok(ImportOutcome::Cancelled);
        }

        apply_import(plan, self.records.as_ref(), self.attachments.as_ref(), nav).await
    }
}
