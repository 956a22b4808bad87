// ==========================================
// Skill Assessment Suite - core library
// ==========================================
// Hospital staff skill-assessment data tool:
// record tree + attachment store + scoped backup/restore protocol
// ==========================================

// Initialize localization
rust_i18n::i18n!("locales", fallback = "fa");

// ==========================================
// Module declarations
// ==========================================

// Domain layer - entities and types
pub mod domain;

// Store layer - data access
pub mod repository;

// Backup engine - scoped export/import
pub mod backup;

// API layer - record operations
pub mod api;

// Database infrastructure (connection init / unified PRAGMAs)
pub mod db;

// Logging
pub mod logging;

// Localization
pub mod i18n;

// Configuration
pub mod config;

// Application layer
pub mod app;

// ==========================================
// Re-exports
// ==========================================

pub use domain::{
    Assessment, AttachmentRecord, Department, Hospital, NavState, Patient, StaffMember, View,
};

pub use backup::{
    BackupDocument, BackupEngine, BackupError, ConfirmationGate, ExportBundle, ImportOutcome,
    ImportPlan, ScopeKind,
};

pub use api::HospitalApi;
pub use repository::{AttachmentStore, RecordStore};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
