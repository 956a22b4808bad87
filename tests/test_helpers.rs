// ==========================================
// Test helpers
// ==========================================
// Shared fixtures: tempfile-backed stores and a sample hospital tree
// whose records reference attachments of every kind.
// ==========================================
#![allow(dead_code)]

use skill_assessment::domain::{
    AdminMessage, AdminSender, AttachmentRecord, ChatMessage, ChatSender, Department, Hospital,
    MessageFile, MonthlyTraining, NewsBanner, Patient, SkillCategory, SkillItem, StaffMember,
    TrainingMaterial,
};
use skill_assessment::repository::{
    open_stores, AttachmentStore, RecordStore, SqliteAttachmentStore, SqliteRecordStore,
};
use std::collections::HashSet;
use tempfile::NamedTempFile;

/// Open both stores on a fresh temporary database.
/// The NamedTempFile must be kept alive by the caller.
pub fn create_test_stores() -> (NamedTempFile, SqliteRecordStore, SqliteAttachmentStore) {
    let temp_file = NamedTempFile::new().expect("temp db file");
    let db_path = temp_file.path().to_str().unwrap().to_string();
    let (records, attachments) = open_stores(&db_path).expect("open stores");
    (temp_file, records, attachments)
}

pub fn material(id: &str) -> TrainingMaterial {
    TrainingMaterial {
        id: id.to_string(),
        name: format!("material {id}"),
        mime_type: "application/pdf".to_string(),
        data: None,
        description: None,
    }
}

pub fn attachment(id: &str) -> AttachmentRecord {
    AttachmentRecord {
        id: id.to_string(),
        data: format!("data:application/pdf;base64,{id}"),
    }
}

pub fn staff_member(id: &str, name: &str) -> StaffMember {
    StaffMember {
        id: id.to_string(),
        name: name.to_string(),
        title: "پرستار".to_string(),
        national_id: None,
        password: None,
        assessments: vec![],
        work_logs: None,
    }
}

pub fn skill_category(name: &str) -> SkillCategory {
    SkillCategory {
        name: name.to_string(),
        items: vec![SkillItem {
            description: "IV insertion".to_string(),
            score: 4.0,
        }],
    }
}

pub fn department(id: &str, name: &str) -> Department {
    Department {
        id: id.to_string(),
        name: name.to_string(),
        manager_name: "مدیر".to_string(),
        manager_national_id: "0011223344".to_string(),
        manager_password: "secret".to_string(),
        staff_count: 10,
        bed_count: 6,
        staff: vec![staff_member(&format!("{id}-s1"), "Staff One")],
        patient_education_materials: None,
        patients: None,
    }
}

pub fn bare_hospital(id: &str, name: &str) -> Hospital {
    Hospital {
        id: id.to_string(),
        name: name.to_string(),
        province: "تهران".to_string(),
        city: "تهران".to_string(),
        supervisor_name: None,
        supervisor_national_id: None,
        supervisor_password: None,
        departments: vec![],
        checklist_templates: None,
        exam_templates: None,
        training_materials: None,
        accreditation_materials: None,
        news_banners: None,
        admin_messages: None,
    }
}

/// Hospital whose records reference the attachment ids
/// `{prefix}-train`, `{prefix}-accr`, `{prefix}-img`, `{prefix}-admin`,
/// `{prefix}-edu` and `{prefix}-chat`.
pub fn hospital_with_attachments(id: &str, name: &str, prefix: &str) -> Hospital {
    let mut hospital = bare_hospital(id, name);

    let mut dept = department(&format!("{id}-d1"), "ICU");
    dept.patient_education_materials = Some(vec![material(&format!("{prefix}-edu"))]);
    dept.patients = Some(vec![Patient {
        id: format!("{id}-p1"),
        name: "Patient".to_string(),
        national_id: "123".to_string(),
        password: None,
        chat_history: Some(vec![ChatMessage {
            id: format!("{id}-m1"),
            sender: ChatSender::Patient,
            timestamp: "2024-01-01T10:00:00Z".to_string(),
            text: None,
            file: Some(MessageFile {
                id: format!("{prefix}-chat"),
                name: "scan.pdf".to_string(),
                mime_type: "application/pdf".to_string(),
            }),
        }]),
    }]);
    hospital.departments = vec![dept];

    hospital.training_materials = Some(vec![MonthlyTraining {
        month: "فروردین".to_string(),
        materials: vec![material(&format!("{prefix}-train"))],
    }]);
    hospital.accreditation_materials = Some(vec![material(&format!("{prefix}-accr"))]);
    hospital.news_banners = Some(vec![NewsBanner {
        id: format!("{id}-b1"),
        title: "اطلاعیه".to_string(),
        description: String::new(),
        image_id: format!("{prefix}-img"),
    }]);
    hospital.admin_messages = Some(vec![AdminMessage {
        id: format!("{id}-am1"),
        sender: AdminSender::Hospital,
        timestamp: "2024-01-02T08:00:00Z".to_string(),
        text: Some("سلام".to_string()),
        file: Some(MessageFile {
            id: format!("{prefix}-admin"),
            name: "report.pdf".to_string(),
            mime_type: "application/pdf".to_string(),
        }),
    }]);

    hospital
}

pub fn prefix_ids(prefix: &str) -> HashSet<String> {
    ["train", "accr", "img", "admin", "edu", "chat"]
        .into_iter()
        .map(|kind| format!("{prefix}-{kind}"))
        .collect()
}

/// Store the hospital tree and one attachment per referenced id.
pub async fn seed(
    records: &dyn RecordStore,
    attachments: &dyn AttachmentStore,
    hospitals: Vec<Hospital>,
    attachment_ids: &HashSet<String>,
) {
    records.replace_all(&hospitals).await.expect("seed tree");
    for id in attachment_ids {
        attachments.put(&attachment(id)).await.expect("seed attachment");
    }
}

pub async fn stored_attachment_ids(attachments: &dyn AttachmentStore) -> HashSet<String> {
    attachments
        .get_all()
        .await
        .expect("get_all")
        .into_iter()
        .map(|record| record.id)
        .collect()
}
