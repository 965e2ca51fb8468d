//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the durable storage keys.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "DS Pathway";

/// The binary name of the application (used in command examples, lowercase with hyphens).
pub const APP_BINARY_NAME: &str = "ds-pathway";

/// Environment variable that overrides the platform config directory.
pub const CONFIG_DIR_ENV: &str = "DS_PATHWAY_CONFIG_DIR";

/// Storage key for the selected user role.
pub const ROLE_KEY: &str = "ds-pathway-role";

/// Storage key for the accessibility settings record.
pub const ACCESSIBILITY_KEY: &str = "ds-pathway-accessibility";

/// Storage key for the personal information and notes record.
pub const MY_INFO_KEY: &str = "ds-pathway-myinfo";

/// Storage key for checklist progress (checklist id -> completed item ids).
pub const CHECKLISTS_KEY: &str = "ds-pathway-checklists";

/// Every durable key, in export order. These must not change without a migration.
pub const ALL_KEYS: [&str; 4] = [ROLE_KEY, ACCESSIBILITY_KEY, MY_INFO_KEY, CHECKLISTS_KEY];
