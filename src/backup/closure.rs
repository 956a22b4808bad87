// ==========================================
// Skill Assessment Suite - attachment reference closure
// ==========================================
// Responsibility: the single definition of "every attachment id
// reachable from a record". Shared by export, overwrite cleanup and
// the delete cascade, so the rule cannot drift between them.
// ==========================================

use crate::domain::{Department, Hospital};
use std::collections::HashSet;

/// Attachment ids reachable from one department: patient-education
/// materials and patient chat-message files.
pub fn department_attachment_ids(department: &Department) -> HashSet<String> {
    let mut ids = HashSet::new();
    collect_department_ids(department, &mut ids);
    ids
}

/// Attachment ids reachable from one hospital: monthly training
/// materials, accreditation materials, news banner images, admin
/// message files, plus every department's closure.
pub fn hospital_attachment_ids(hospital: &Hospital) -> HashSet<String> {
    let mut ids = HashSet::new();

    if let Some(monthlies) = &hospital.training_materials {
        for monthly in monthlies {
            for material in &monthly.materials {
                ids.insert(material.id.clone());
            }
        }
    }
    if let Some(materials) = &hospital.accreditation_materials {
        for material in materials {
            ids.insert(material.id.clone());
        }
    }
    if let Some(banners) = &hospital.news_banners {
        for banner in banners {
            ids.insert(banner.image_id.clone());
        }
    }
    if let Some(messages) = &hospital.admin_messages {
        for message in messages {
            if let Some(file) = &message.file {
                ids.insert(file.id.clone());
            }
        }
    }
    for department in &hospital.departments {
        collect_department_ids(department, &mut ids);
    }

    ids
}

fn collect_department_ids(department: &Department, ids: &mut HashSet<String>) {
    if let Some(materials) = &department.patient_education_materials {
        for material in materials {
            ids.insert(material.id.clone());
        }
    }
    if let Some(patients) = &department.patients {
        for patient in patients {
            if let Some(history) = &patient.chat_history {
                for message in history {
                    if let Some(file) = &message.file {
                        ids.insert(file.id.clone());
                    }
                }
            }
        }
    }
}
