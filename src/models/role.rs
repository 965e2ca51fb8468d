//! User roles and the persisted role selection.

use super::text::Text;
use crate::constants::ROLE_KEY;
use crate::store::PersistentStore;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The user's declared relationship to the guide's subject.
///
/// Roles gate content visibility (professional-only checklist items) and
/// defaults (young people start in easy-read mode).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UserRole {
    /// Parent or carer of a child on the pathway
    ParentCarer,
    /// Young person on the pathway
    YoungPerson,
    /// Health or social care professional
    Professional,
    /// Teacher or education staff
    Educator,
}

impl UserRole {
    /// All roles in display order.
    pub const ALL: [Self; 4] = [
        Self::ParentCarer,
        Self::YoungPerson,
        Self::Professional,
        Self::Educator,
    ];

    /// Wire identifier (e.g. "young-person").
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ParentCarer => "parent-carer",
            Self::YoungPerson => "young-person",
            Self::Professional => "professional",
            Self::Educator => "educator",
        }
    }

    /// Whether this role sees professional-only content.
    #[must_use]
    pub const fn sees_professional_content(self) -> bool {
        matches!(self, Self::Professional)
    }

    /// Display name.
    #[must_use]
    pub fn label(self) -> Text {
        let (standard, easy) = match self {
            Self::ParentCarer => ("Parent or Carer", "I am a Parent or Carer"),
            Self::YoungPerson => ("Young Person", "This is for Me"),
            Self::Professional => ("Healthcare Professional", "I am a Doctor or Nurse"),
            Self::Educator => ("Teacher or Educator", "I am a Teacher"),
        };
        Text::new(standard, easy)
    }

    /// Welcome line shown once a role is chosen.
    #[must_use]
    pub fn greeting(self) -> Text {
        let (standard, easy) = match self {
            Self::ParentCarer => (
                "Welcome back! Find the support your family needs.",
                "Hello! We are here to help you and your family.",
            ),
            Self::YoungPerson => (
                "Welcome! Your health journey, your way.",
                "Hello! This app is here to help you.",
            ),
            Self::Professional => (
                "Welcome. Access clinical pathways and checklists.",
                "Hello! Find the information you need for your patients.",
            ),
            Self::Educator => (
                "Welcome. Supporting learners with Down Syndrome.",
                "Hello! Find ways to help your students.",
            ),
        };
        Text::new(standard, easy)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!(
                    "Invalid role '{s}'. Must be one of: parent-carer, young-person, professional, educator"
                )
            })
    }
}

/// Returns true when `role` may see professional-only content.
#[must_use]
pub fn is_professional(role: Option<UserRole>) -> bool {
    role.is_some_and(UserRole::sees_professional_content)
}

/// Persisted role selection (`null` when no role has been chosen).
#[derive(Debug, Clone)]
pub struct RoleStore {
    store: PersistentStore,
}

impl RoleStore {
    /// Creates a role cell over `store`.
    #[must_use]
    pub const fn new(store: PersistentStore) -> Self {
        Self { store }
    }

    /// Current role, or `None` if unset or unreadable.
    #[must_use]
    pub fn get(&self) -> Option<UserRole> {
        self.store.read(ROLE_KEY, None)
    }

    /// Stores the role selection.
    pub fn set(&self, role: Option<UserRole>) -> Result<()> {
        self.store.write(ROLE_KEY, &role)
    }
}
