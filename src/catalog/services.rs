//! NHS services directory entries.

use crate::models::Text;
use serde::{Deserialize, Serialize};

/// Clinical specialty of a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceCategory {
    /// Children's doctors
    Paediatrics,
    /// Hearing
    Audiology,
    /// Eyes
    Ophthalmology,
    /// Speech, language and swallowing
    SpeechLanguage,
    /// Everyday skills
    OccupationalTherapy,
    /// Movement
    Physiotherapy,
    /// Food and nutrition
    Dietetics,
    /// Health visitors
    HealthVisiting,
    /// Sleep services
    Sleep,
    /// Ears, nose and throat
    Ent,
}

impl ServiceCategory {
    /// All categories in display order.
    pub const ALL: [Self; 10] = [
        Self::Paediatrics,
        Self::Audiology,
        Self::Ophthalmology,
        Self::SpeechLanguage,
        Self::OccupationalTherapy,
        Self::Physiotherapy,
        Self::Dietetics,
        Self::HealthVisiting,
        Self::Sleep,
        Self::Ent,
    ];

    /// Display label in both registers.
    #[must_use]
    pub fn label(self) -> Text {
        let (standard, easy) = match self {
            Self::Paediatrics => ("Paediatrics", "Doctors for Children"),
            Self::Audiology => ("Audiology", "Hearing"),
            Self::Ophthalmology => ("Ophthalmology", "Eyes"),
            Self::SpeechLanguage => ("Speech & Language", "Talking and Eating"),
            Self::OccupationalTherapy => ("Occupational Therapy", "Everyday Skills"),
            Self::Physiotherapy => ("Physiotherapy", "Moving and Exercise"),
            Self::Dietetics => ("Dietetics", "Food and Eating"),
            Self::HealthVisiting => ("Health Visiting", "Health Visitors"),
            Self::Sleep => ("Sleep Services", "Sleep Help"),
            Self::Ent => ("ENT", "Ears, Nose and Throat"),
        };
        Text::new(standard, easy)
    }
}

/// Local authority area served. `Both` means the service covers every area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Area {
    /// Stockton-on-Tees
    Stockton,
    /// Hartlepool
    Hartlepool,
    /// Every area
    Both,
}

impl Area {
    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Stockton => "Stockton",
            Self::Hartlepool => "Hartlepool",
            Self::Both => "Both Areas",
        }
    }
}

/// Kind of contact detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContactKind {
    /// Telephone number
    Phone,
    /// Email address
    Email,
    /// Web address
    Website,
    /// Postal address
    Address,
}

/// One way to reach a service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Contact kind
    #[serde(rename = "type")]
    pub kind: ContactKind,
    /// Number, address or URL
    pub value: String,
    /// Optional label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// A service in the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    /// Unique id
    pub id: String,
    /// Service name
    pub name: String,
    /// Standard description (searched)
    pub description: String,
    /// Easy-read description (never searched)
    pub description_easy_read: String,
    /// Icon name
    pub icon: String,
    /// Specialty
    pub category: ServiceCategory,
    /// Contact details
    #[serde(default)]
    pub contacts: Vec<Contact>,
    /// How to get referred
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referral_info: Option<String>,
    /// Ages served
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_range: Option<String>,
    /// Areas served
    pub areas: Vec<Area>,
}

impl Service {
    /// Description in both registers.
    #[must_use]
    pub fn description_text(&self) -> Text {
        Text::new(&self.description, &self.description_easy_read)
    }
}
