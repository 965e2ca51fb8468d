//! DS Pathway library
//!
//! Core of an accessible terminal guide to the Down Syndrome care pathway:
//! local-only storage, accessibility preferences and their display modes,
//! read-aloud narration, searchable services and support catalogs, review
//! checklist progress and backup/restore of everything saved on the device.

pub mod accessibility;
pub mod backup;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod confirm;
pub mod constants;
pub mod models;
pub mod progress;
pub mod speech;
pub mod store;
pub mod ui;
