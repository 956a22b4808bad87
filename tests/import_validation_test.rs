// ==========================================
// Import validation & merge tests
// ==========================================
// Target: the accept/reject/merge rules of the restore protocol.
// Every rejection and every declined confirmation must leave both
// stores untouched.
// ==========================================

mod test_helpers;

use skill_assessment::backup::{
    AutoConfirm, AutoDecline, BackupEngine, BackupError, ImportOutcome,
};
use skill_assessment::domain::NavState;
use skill_assessment::repository::{
    AttachmentStore, MemoryAttachmentStore, MemoryRecordStore, RecordStore,
};
use std::sync::Arc;
use test_helpers::*;

struct Fixture {
    records: Arc<MemoryRecordStore>,
    attachments: Arc<MemoryAttachmentStore>,
    engine: BackupEngine,
}

fn fixture(hospitals: Vec<skill_assessment::domain::Hospital>) -> Fixture {
    let records = Arc::new(MemoryRecordStore::with_hospitals(hospitals));
    let attachments = Arc::new(MemoryAttachmentStore::new());
    let engine = BackupEngine::new(records.clone(), attachments.clone());
    Fixture {
        records,
        attachments,
        engine,
    }
}

fn hospital_doc(id: &str, name: &str, db_data: &str) -> String {
    format!(
        r#"{{"type":"hospital","data":{{"id":"{id}","name":"{name}","province":"","city":"","departments":[]}},"dbData":{db_data}}}"#
    )
}

// ===== rejection paths =====

#[tokio::test]
async fn test_hospital_document_rejected_in_department_scope() {
    let f = fixture(vec![hospital_with_attachments("h1", "امید", "a")]);
    let mut nav = NavState::in_department("h1", "h1-d1");

    let err = f
        .engine
        .import(hospital_doc("hx", "Test", "[]").as_bytes(), &mut nav, &AutoConfirm)
        .await
        .unwrap_err();
    assert!(matches!(err, BackupError::ScopeMismatch { .. }));
    assert!(!err.user_message().is_empty());
}

#[tokio::test]
async fn test_department_document_rejected_outside_department_scope() {
    let f = fixture(vec![hospital_with_attachments("h1", "امید", "a")]);
    let mut nav = NavState::hospital_list();

    let doc = r#"{"type":"department","data":{"id":"d9","name":"CCU","staff":[]},"context":{"hospitalId":"h1","hospitalName":"امید"}}"#;
    let err = f
        .engine
        .import(doc.as_bytes(), &mut nav, &AutoConfirm)
        .await
        .unwrap_err();
    assert!(matches!(err, BackupError::ScopeMismatch { .. }));
}

#[tokio::test]
async fn test_department_document_from_foreign_hospital_rejected() {
    let f = fixture(vec![hospital_with_attachments("h1", "امید", "a")]);
    let before = f.records.read_all().await.unwrap();
    let mut nav = NavState::in_department("h1", "h1-d1");

    let doc = r#"{"type":"department","data":{"id":"d9","name":"CCU","staff":[]},"context":{"hospitalId":"h-other","hospitalName":"مهر"}}"#;
    let err = f
        .engine
        .import(doc.as_bytes(), &mut nav, &AutoConfirm)
        .await
        .unwrap_err();

    match err {
        BackupError::OwnershipMismatch { ref owner_name } => assert_eq!(owner_name, "مهر"),
        ref other => panic!("expected ownership mismatch, got {other:?}"),
    }
    // The foreign hospital's name appears in the user message.
    assert!(err.user_message().contains("مهر"));
    // Rejection never mutates the tree.
    assert_eq!(f.records.read_all().await.unwrap(), before);
}

#[tokio::test]
async fn test_all_hospitals_document_rejected_in_hospital_scope() {
    let f = fixture(vec![hospital_with_attachments("h1", "امید", "a")]);
    let mut nav = NavState::in_hospital("h1");

    let err = f
        .engine
        .import(br#"{"type":"all_hospitals","data":[]}"#, &mut nav, &AutoConfirm)
        .await
        .unwrap_err();
    assert!(matches!(err, BackupError::ScopeMismatch { .. }));
}

#[tokio::test]
async fn test_malformed_all_hospitals_data_rejected() {
    let f = fixture(vec![]);
    let mut nav = NavState::hospital_list();

    let err = f
        .engine
        .import(
            br#"{"type":"all_hospitals","data":{"id":"h1"}}"#,
            &mut nav,
            &AutoConfirm,
        )
        .await
        .unwrap_err();
    assert!(matches!(err, BackupError::Malformed(_)));
}

#[tokio::test]
async fn test_invalid_json_rejected_as_parse_error() {
    let f = fixture(vec![]);
    let mut nav = NavState::hospital_list();

    let err = f
        .engine
        .import(b"{ this is not json", &mut nav, &AutoConfirm)
        .await
        .unwrap_err();
    assert!(matches!(err, BackupError::Parse(_)));
}

// ===== confirmation gate =====

#[tokio::test]
async fn test_declined_confirmation_is_a_noop() {
    let f = fixture(vec![bare_hospital("h1", "Old")]);
    let before = f.records.read_all().await.unwrap();
    let mut nav = NavState::hospital_list();

    let outcome = f
        .engine
        .import(hospital_doc("h1", "New", "[]").as_bytes(), &mut nav, &AutoDecline)
        .await
        .unwrap();
    assert_eq!(outcome, ImportOutcome::Cancelled);
    assert_eq!(f.records.read_all().await.unwrap(), before);
}

// ===== accepted paths =====

#[tokio::test]
async fn test_hospital_document_added_as_new_at_all_scope() {
    let f = fixture(vec![]);
    let mut nav = NavState::hospital_list();

    let outcome = f
        .engine
        .import(hospital_doc("h1", "Test", "[]").as_bytes(), &mut nav, &AutoConfirm)
        .await
        .unwrap();
    assert!(matches!(outcome, ImportOutcome::Applied { .. }));

    let tree = f.records.read_all().await.unwrap();
    assert_eq!(tree.len(), 1);
    assert_eq!(tree[0].id, "h1");
    assert_eq!(tree[0].name, "Test");
}

#[tokio::test]
async fn test_hospital_document_overwrites_matching_id_at_all_scope() {
    let f = fixture(vec![bare_hospital("h1", "Old")]);
    let mut nav = NavState::hospital_list();

    let outcome = f
        .engine
        .import(hospital_doc("h1", "New", "[]").as_bytes(), &mut nav, &AutoConfirm)
        .await
        .unwrap();
    assert!(matches!(outcome, ImportOutcome::Applied { .. }));

    let tree = f.records.read_all().await.unwrap();
    assert_eq!(tree.len(), 1);
    assert_eq!(tree[0].name, "New");
}

#[tokio::test]
async fn test_hospital_overwrite_replaces_attachment_closure() {
    let hospital = hospital_with_attachments("h1", "امید", "a");
    let f = fixture(vec![hospital]);
    for id in prefix_ids("a") {
        f.attachments.put(&attachment(&id)).await.unwrap();
    }

    let mut nav = NavState::in_hospital("h1");
    let db_data = r#"[{"id":"b1","data":"data:x,1"},{"id":"b2","data":"data:x,2"}]"#;
    let outcome = f
        .engine
        .import(
            hospital_doc("h1", "امید ۲", db_data).as_bytes(),
            &mut nav,
            &AutoConfirm,
        )
        .await
        .unwrap();
    match outcome {
        ImportOutcome::Applied { warnings, .. } => assert!(warnings.is_empty()),
        ImportOutcome::Cancelled => panic!("unexpected cancellation"),
    }

    // Old closure gone, new dbData present, nothing else.
    let stored = stored_attachment_ids(f.attachments.as_ref()).await;
    let expected: std::collections::HashSet<String> =
        ["b1", "b2"].into_iter().map(String::from).collect();
    assert_eq!(stored, expected);

    let tree = f.records.read_all().await.unwrap();
    assert_eq!(tree[0].name, "امید ۲");
    assert!(tree[0].departments.is_empty());
}

#[tokio::test]
async fn test_overwriting_selected_hospital_repoints_selection() {
    let f = fixture(vec![bare_hospital("h1", "Old")]);
    let mut nav = NavState::in_hospital("h1");

    // The loaded record carries a different id than the selected one.
    let outcome = f
        .engine
        .import(
            hospital_doc("h-new", "New", "[]").as_bytes(),
            &mut nav,
            &AutoConfirm,
        )
        .await
        .unwrap();
    assert!(matches!(outcome, ImportOutcome::Applied { .. }));

    assert_eq!(nav.selected_hospital_id.as_deref(), Some("h-new"));
    let tree = f.records.read_all().await.unwrap();
    assert_eq!(tree.len(), 1);
    assert_eq!(tree[0].id, "h-new");
}

#[tokio::test]
async fn test_all_hospitals_replace_clears_previous_attachments() {
    let f = fixture(vec![hospital_with_attachments("h1", "امید", "a")]);
    for id in prefix_ids("a") {
        f.attachments.put(&attachment(&id)).await.unwrap();
    }
    let mut nav = NavState::hospital_list();

    let doc = r#"{"type":"all_hospitals","data":[{"id":"h9","name":"فقط","province":"","city":"","departments":[]}],"dbData":[{"id":"c1","data":"data:x,c"}]}"#;
    let outcome = f
        .engine
        .import(doc.as_bytes(), &mut nav, &AutoConfirm)
        .await
        .unwrap();
    assert!(matches!(outcome, ImportOutcome::Applied { .. }));

    let stored = stored_attachment_ids(f.attachments.as_ref()).await;
    assert_eq!(stored, ["c1".to_string()].into_iter().collect());
    let tree = f.records.read_all().await.unwrap();
    assert_eq!(tree.len(), 1);
    assert_eq!(tree[0].id, "h9");
}
