// ==========================================
// Skill Assessment Suite - API layer
// ==========================================
// Responsibility: record operations over the store traits
// ==========================================

pub mod error;
pub mod hospital_api;

pub use error::{ApiError, ApiResult};
pub use hospital_api::HospitalApi;
