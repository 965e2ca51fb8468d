//! Support organisations and resources.

use crate::models::Text;
use serde::{Deserialize, Serialize};

/// Kind of support resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceCategory {
    /// Local groups and services
    LocalSupport,
    /// National charities
    NationalCharity,
    /// Health information
    HealthMedical,
    /// Becoming an adult
    TransitionAdulthood,
    /// School and learning
    EducationLearning,
    /// Apps and online tools
    AppsDigital,
    /// Benefits and money
    BenefitsFinancial,
}

impl ResourceCategory {
    /// All categories in display order.
    pub const ALL: [Self; 7] = [
        Self::LocalSupport,
        Self::NationalCharity,
        Self::HealthMedical,
        Self::TransitionAdulthood,
        Self::EducationLearning,
        Self::AppsDigital,
        Self::BenefitsFinancial,
    ];

    /// Display label in both registers.
    #[must_use]
    pub fn label(self) -> Text {
        let (standard, easy) = match self {
            Self::LocalSupport => ("Local Support", "Help Near You"),
            Self::NationalCharity => ("National Charities", "Big Charities"),
            Self::HealthMedical => ("Health & Medical", "Health Information"),
            Self::TransitionAdulthood => ("Transition & Adulthood", "Becoming an Adult"),
            Self::EducationLearning => ("Education & Learning", "School and Learning"),
            Self::AppsDigital => ("Apps & Digital", "Helpful Apps"),
            Self::BenefitsFinancial => ("Benefits & Financial", "Money Help"),
        };
        Text::new(standard, easy)
    }
}

/// Age group a resource is aimed at. `AllAges` applies to every group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AgeGroup {
    /// 0-5
    EarlyYears,
    /// 5-18
    SchoolAge,
    /// 14+
    Transitions,
    /// 18+
    Adults,
    /// Everyone
    AllAges,
}

impl AgeGroup {
    /// Display label in both registers.
    #[must_use]
    pub fn label(self) -> Text {
        let (standard, easy) = match self {
            Self::EarlyYears => ("Early Years (0-5)", "Babies and Toddlers"),
            Self::SchoolAge => ("School Age (5-18)", "School Children"),
            Self::Transitions => ("Transitions (14+)", "Teenagers"),
            Self::Adults => ("Adults (18+)", "Grown-ups"),
            Self::AllAges => ("All Ages", "Everyone"),
        };
        Text::new(standard, easy)
    }
}

/// A support organisation or resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    /// Unique id
    pub id: String,
    /// Organisation name
    pub name: String,
    /// Standard description (searched)
    pub description: String,
    /// Easy-read description (never searched)
    pub description_easy_read: String,
    /// Kind of resource
    pub category: ResourceCategory,
    /// Age groups served
    pub age_groups: Vec<AgeGroup>,
    /// Icon name
    pub icon: String,
    /// Web address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// Telephone number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Email address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Based in the local area
    pub is_local: bool,
    /// Highlighted on the support page
    #[serde(default)]
    pub is_featured: bool,
}

impl Resource {
    /// Description in both registers.
    #[must_use]
    pub fn description_text(&self) -> Text {
        Text::new(&self.description, &self.description_easy_read)
    }
}
