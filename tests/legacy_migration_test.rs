// ==========================================
// Legacy document migration tests
// ==========================================
// Old exports are a bare array of hospitals with attachment payloads
// inlined in the material records. Importing one must move every
// inline payload into the attachment store and strip it from the tree.
// ==========================================

mod test_helpers;

use skill_assessment::backup::{AutoConfirm, BackupDocument, BackupEngine, BackupError, ImportOutcome};
use skill_assessment::domain::NavState;
use skill_assessment::repository::{
    AttachmentStore, MemoryAttachmentStore, MemoryRecordStore, RecordStore,
};
use std::sync::Arc;
use test_helpers::*;

const LEGACY_DOC: &str = r#"[
  {
    "id": "h1",
    "name": "بیمارستان قدیمی",
    "province": "تهران",
    "city": "تهران",
    "departments": [],
    "trainingMaterials": [
      {
        "month": "فروردین",
        "materials": [
          {"id": "m-train", "name": "جزوه", "type": "application/pdf", "data": "data:application/pdf;base64,TRAIN"}
        ]
      }
    ],
    "accreditationMaterials": [
      {"id": "m-accr", "name": "مدرک", "type": "image/png", "data": "data:image/png;base64,ACCR"}
    ]
  }
]"#;

#[tokio::test]
async fn test_bare_array_parses_as_legacy_document() {
    let document = BackupDocument::parse(LEGACY_DOC.as_bytes()).unwrap();
    match document {
        BackupDocument::LegacyAllHospitals { data } => {
            assert_eq!(data.len(), 1);
            assert_eq!(data[0].id, "h1");
        }
        other => panic!("expected legacy document, got {other:?}"),
    }
}

#[tokio::test]
async fn test_legacy_import_moves_inline_payloads_into_store() {
    let records = Arc::new(MemoryRecordStore::new());
    let attachments = Arc::new(MemoryAttachmentStore::new());
    // Pre-existing attachment from the data being replaced.
    attachments.put(&attachment("stale")).await.unwrap();

    let engine = BackupEngine::new(records.clone(), attachments.clone());
    let mut nav = NavState::hospital_list();

    let outcome = engine
        .import(LEGACY_DOC.as_bytes(), &mut nav, &AutoConfirm)
        .await
        .unwrap();
    match outcome {
        ImportOutcome::Applied { warnings, .. } => assert!(warnings.is_empty()),
        ImportOutcome::Cancelled => panic!("unexpected cancellation"),
    }

    // The store holds exactly the migrated payloads; the old content
    // was cleared first.
    let stored = stored_attachment_ids(attachments.as_ref()).await;
    let expected: std::collections::HashSet<String> =
        ["m-train", "m-accr"].into_iter().map(String::from).collect();
    assert_eq!(stored, expected);

    let train = attachments.get("m-train").await.unwrap().unwrap();
    assert_eq!(train.data, "data:application/pdf;base64,TRAIN");
    let accr = attachments.get("m-accr").await.unwrap().unwrap();
    assert_eq!(accr.data, "data:image/png;base64,ACCR");

    // The stored tree no longer carries inline payloads.
    let tree = records.read_all().await.unwrap();
    assert_eq!(tree.len(), 1);
    let monthlies = tree[0].training_materials.as_ref().unwrap();
    assert_eq!(monthlies[0].materials[0].data, None);
    let accreditation = tree[0].accreditation_materials.as_ref().unwrap();
    assert_eq!(accreditation[0].data, None);
}

#[tokio::test]
async fn test_typed_document_without_db_data_migrates_inline_payloads() {
    // Same old-format content, but wrapped in the tagged object form.
    // The missing dbData list, not the tag, marks it as legacy.
    let doc = format!(r#"{{"type":"all_hospitals","data":{LEGACY_DOC}}}"#);

    let records = Arc::new(MemoryRecordStore::new());
    let attachments = Arc::new(MemoryAttachmentStore::new());
    attachments.put(&attachment("stale")).await.unwrap();

    let engine = BackupEngine::new(records.clone(), attachments.clone());
    let mut nav = NavState::hospital_list();

    let outcome = engine
        .import(doc.as_bytes(), &mut nav, &AutoConfirm)
        .await
        .unwrap();
    assert!(matches!(outcome, ImportOutcome::Applied { .. }));

    let stored = stored_attachment_ids(attachments.as_ref()).await;
    let expected: std::collections::HashSet<String> =
        ["m-train", "m-accr"].into_iter().map(String::from).collect();
    assert_eq!(stored, expected);
    let train = attachments.get("m-train").await.unwrap().unwrap();
    assert_eq!(train.data, "data:application/pdf;base64,TRAIN");

    let tree = records.read_all().await.unwrap();
    assert_eq!(tree[0].training_materials.as_ref().unwrap()[0].materials[0].data, None);
    assert_eq!(tree[0].accreditation_materials.as_ref().unwrap()[0].data, None);
}

#[tokio::test]
async fn test_legacy_document_requires_all_scope() {
    let records = Arc::new(MemoryRecordStore::with_hospitals(vec![bare_hospital(
        "h1", "امید",
    )]));
    let attachments = Arc::new(MemoryAttachmentStore::new());
    let engine = BackupEngine::new(records.clone(), attachments);
    let mut nav = NavState::in_hospital("h1");

    let err = engine
        .import(LEGACY_DOC.as_bytes(), &mut nav, &AutoConfirm)
        .await
        .unwrap_err();
    assert!(matches!(err, BackupError::ScopeMismatch { .. }));

    let tree = records.read_all().await.unwrap();
    assert_eq!(tree[0].name, "امید");
}
