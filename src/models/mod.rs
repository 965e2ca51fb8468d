//! Data models shared across the guide.
//!
//! Models are independent of the front end and of storage details beyond
//! their own persisted cell.

pub mod personal_info;
pub mod role;
pub mod text;

// Re-export all model types
pub use personal_info::{AgeStage, PersonalInfo, PersonalInfoPatch, PersonalInfoStore};
pub use role::{is_professional, RoleStore, UserRole};
pub use text::{pick, Text, TextRegister};
