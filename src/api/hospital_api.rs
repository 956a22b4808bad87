// ==========================================
// Skill Assessment Suite - record operations API
// ==========================================
// Responsibility: CRUD on the hospital tree. Every mutation is a
// whole-tree read-modify-write through the Record Store, and every
// delete cascades through the shared attachment closure so orphaned
// payloads do not accumulate in the Attachment Store.
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::backup::closure::{department_attachment_ids, hospital_attachment_ids};
use crate::domain::{Department, Hospital, SkillCategory, NamedChecklistTemplate};
use crate::repository::{AttachmentStore, RecordStore};
use futures::future::join_all;
use std::collections::HashSet;
use std::sync::Arc;
use uuid::Uuid;

pub struct HospitalApi {
    records: Arc<dyn RecordStore>,
    attachments: Arc<dyn AttachmentStore>,
}

impl HospitalApi {
    pub fn new(records: Arc<dyn RecordStore>, attachments: Arc<dyn AttachmentStore>) -> Self {
        Self {
            records,
            attachments,
        }
    }

    /// Create a hospital with empty collections. Returns the new id.
    pub async fn add_hospital(
        &self,
        name: &str,
        province: &str,
        city: &str,
    ) -> ApiResult<String> {
        if name.trim().is_empty() {
            return Err(ApiError::InvalidArgument("hospital name is empty".to_string()));
        }

        let hospital = Hospital {
            id: Uuid::new_v4().to_string(),
            name: name.trim().to_string(),
            province: province.trim().to_string(),
            city: city.trim().to_string(),
            supervisor_name: None,
            supervisor_national_id: None,
            supervisor_password: None,
            departments: Vec::new(),
            checklist_templates: Some(Vec::new()),
            exam_templates: Some(Vec::new()),
            training_materials: Some(Vec::new()),
            accreditation_materials: Some(Vec::new()),
            news_banners: Some(Vec::new()),
            admin_messages: None,
        };
        let id = hospital.id.clone();

        let mut tree = self.records.read_all().await?;
        tree.push(hospital);
        self.records.replace_all(&tree).await?;
        Ok(id)
    }

    /// Update a hospital's basic fields.
    pub async fn update_hospital(
        &self,
        hospital_id: &str,
        name: &str,
        province: &str,
        city: &str,
    ) -> ApiResult<()> {
        if name.trim().is_empty() {
            return Err(ApiError::InvalidArgument("hospital name is empty".to_string()));
        }

        let mut tree = self.records.read_all().await?;
        let hospital = find_hospital_mut(&mut tree, hospital_id)?;
        hospital.name = name.trim().to_string();
        hospital.province = province.trim().to_string();
        hospital.city = city.trim().to_string();
        self.records.replace_all(&tree).await?;
        Ok(())
    }

    /// Delete a hospital and every attachment reachable from it.
    pub async fn delete_hospital(&self, hospital_id: &str) -> ApiResult<()> {
        let tree = self.records.read_all().await?;
        let hospital = tree
            .iter()
            .find(|h| h.id == hospital_id)
            .ok_or_else(|| ApiError::NotFound {
                entity: "Hospital".to_string(),
                id: hospital_id.to_string(),
            })?;

        self.cascade_delete(hospital_attachment_ids(hospital)).await;

        let remaining: Vec<Hospital> =
            tree.iter().filter(|h| h.id != hospital_id).cloned().collect();
        self.records.replace_all(&remaining).await?;
        Ok(())
    }

    /// Create a department inside a hospital. Returns the new id.
    pub async fn add_department(
        &self,
        hospital_id: &str,
        name: &str,
        manager_name: &str,
        manager_national_id: &str,
        manager_password: &str,
        staff_count: i32,
        bed_count: i32,
    ) -> ApiResult<String> {
        let department = Department {
            id: Uuid::new_v4().to_string(),
            name: name.trim().to_string(),
            manager_name: manager_name.to_string(),
            manager_national_id: manager_national_id.to_string(),
            manager_password: manager_password.to_string(),
            staff_count,
            bed_count,
            staff: Vec::new(),
            patient_education_materials: None,
            patients: None,
        };
        let id = department.id.clone();

        let mut tree = self.records.read_all().await?;
        let hospital = find_hospital_mut(&mut tree, hospital_id)?;
        hospital.departments.push(department);
        self.records.replace_all(&tree).await?;
        Ok(id)
    }

    /// Update a department's basic fields.
    pub async fn update_department(
        &self,
        hospital_id: &str,
        department_id: &str,
        name: &str,
        manager_name: &str,
        manager_national_id: &str,
        manager_password: &str,
        staff_count: i32,
        bed_count: i32,
    ) -> ApiResult<()> {
        let mut tree = self.records.read_all().await?;
        let hospital = find_hospital_mut(&mut tree, hospital_id)?;
        let department =
            hospital
                .find_department_mut(department_id)
                .ok_or_else(|| ApiError::NotFound {
                    entity: "Department".to_string(),
                    id: department_id.to_string(),
                })?;

        department.name = name.trim().to_string();
        department.manager_name = manager_name.to_string();
        department.manager_national_id = manager_national_id.to_string();
        department.manager_password = manager_password.to_string();
        department.staff_count = staff_count;
        department.bed_count = bed_count;
        self.records.replace_all(&tree).await?;
        Ok(())
    }

    /// Delete a department and every attachment reachable from it
    /// (patient-education materials, patient chat files).
    pub async fn delete_department(&self, hospital_id: &str, department_id: &str) -> ApiResult<()> {
        let mut tree = self.records.read_all().await?;
        let hospital = find_hospital_mut(&mut tree, hospital_id)?;
        let department =
            hospital
                .find_department(department_id)
                .ok_or_else(|| ApiError::NotFound {
                    entity: "Department".to_string(),
                    id: department_id.to_string(),
                })?;

        self.cascade_delete(department_attachment_ids(department)).await;

        hospital.departments.retain(|d| d.id != department_id);
        self.records.replace_all(&tree).await?;
        Ok(())
    }

    /// Record a month's skill evaluation for a staff member, replacing
    /// any existing assessment for that month.
    pub async fn upsert_assessment(
        &self,
        hospital_id: &str,
        department_id: &str,
        staff_id: &str,
        month: &str,
        skills: Vec<SkillCategory>,
        template: Option<&NamedChecklistTemplate>,
    ) -> ApiResult<()> {
        let mut tree = self.records.read_all().await?;
        let hospital = find_hospital_mut(&mut tree, hospital_id)?;
        let department =
            hospital
                .find_department_mut(department_id)
                .ok_or_else(|| ApiError::NotFound {
                    entity: "Department".to_string(),
                    id: department_id.to_string(),
                })?;
        let staff = department
            .staff
            .iter_mut()
            .find(|s| s.id == staff_id)
            .ok_or_else(|| ApiError::NotFound {
                entity: "StaffMember".to_string(),
                id: staff_id.to_string(),
            })?;

        staff.upsert_assessment(month, skills, template);
        self.records.replace_all(&tree).await?;
        Ok(())
    }

    /// Best-effort attachment cleanup: each delete is independent,
    /// failures are logged and do not block the others.
    async fn cascade_delete(&self, ids: HashSet<String>) {
        let ids: Vec<String> = ids.into_iter().collect();
        let results = join_all(ids.iter().map(|id| self.attachments.delete(id))).await;
        for (id, result) in ids.iter().zip(results) {
            if let Err(err) = result {
                tracing::warn!(attachment_id = %id, error = %err, "cascade attachment delete failed");
            }
        }
    }
}

fn find_hospital_mut<'a>(tree: &'a mut [Hospital], hospital_id: &str) -> ApiResult<&'a mut Hospital> {
    tree.iter_mut()
        .find(|h| h.id == hospital_id)
        .ok_or_else(|| ApiError::NotFound {
            entity: "Hospital".to_string(),
            id: hospital_id.to_string(),
        })
}
