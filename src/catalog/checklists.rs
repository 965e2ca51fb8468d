//! Health review checklists.

use crate::models::{is_professional, Text, UserRole};
use serde::{Deserialize, Serialize};

/// What kind of step a checklist item is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChecklistCategory {
    /// Topic to talk about
    Discussion,
    /// Something the clinician checks
    Examination,
    /// Test to arrange
    Investigation,
    /// Onward referral
    Referral,
}

impl ChecklistCategory {
    /// Display label in both registers.
    #[must_use]
    pub fn label(self) -> Text {
        let (standard, easy) = match self {
            Self::Discussion => ("Discussion", "Talk about"),
            Self::Examination => ("Examination", "Doctor checks"),
            Self::Investigation => ("Investigation", "Tests"),
            Self::Referral => ("Referral", "Other appointments"),
        };
        Text::new(standard, easy)
    }
}

/// One tickable entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistItem {
    /// Id, unique within its checklist
    pub id: String,
    /// Standard wording
    pub text: String,
    /// Easy-read wording
    pub text_easy_read: String,
    /// Kind of step
    pub category: ChecklistCategory,
    /// Only shown to professionals
    #[serde(default)]
    pub professional_only: bool,
}

impl ChecklistItem {
    /// Whether `role` may see this item.
    #[must_use]
    pub fn visible_to(&self, role: Option<UserRole>) -> bool {
        !self.professional_only || is_professional(role)
    }

    /// Wording in both registers.
    #[must_use]
    pub fn text_pair(&self) -> Text {
        Text::new(&self.text, &self.text_easy_read)
    }
}

/// A titled group of items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistSection {
    /// Standard title
    pub title: String,
    /// Easy-read title
    pub title_easy_read: String,
    /// Items in display order
    pub items: Vec<ChecklistItem>,
}

/// A health review checklist for one age stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Checklist {
    /// Unique id (e.g. "1-year")
    pub id: String,
    /// Standard title
    pub title: String,
    /// Easy-read title
    pub title_easy_read: String,
    /// Age the review happens at
    pub age_range: String,
    /// Sections in display order
    pub sections: Vec<ChecklistSection>,
}

impl Checklist {
    /// Every item across all sections.
    pub fn items(&self) -> impl Iterator<Item = &ChecklistItem> {
        self.sections.iter().flat_map(|section| section.items.iter())
    }

    /// Items `role` may see.
    pub fn visible_items(&self, role: Option<UserRole>) -> impl Iterator<Item = &ChecklistItem> {
        self.items().filter(move |item| item.visible_to(role))
    }

    /// Looks up an item by id.
    #[must_use]
    pub fn item(&self, item_id: &str) -> Option<&ChecklistItem> {
        self.items().find(|item| item.id == item_id)
    }

    /// Title in both registers.
    #[must_use]
    pub fn title_text(&self) -> Text {
        Text::new(&self.title, &self.title_easy_read)
    }
}
