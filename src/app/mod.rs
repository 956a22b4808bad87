// ==========================================
// Skill Assessment Suite - application layer
// ==========================================
// Responsibility: state wiring and the file I/O boundary
// ==========================================

pub mod state;

pub use state::AppState;
