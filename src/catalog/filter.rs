//! Multi-field filtering over the catalogs.
//!
//! All criteria are combined conjunctively. Free text is a case-insensitive
//! substring match against the standard wording only, never the easy-read
//! variant. Output keeps catalog order; an empty result is a normal outcome.

use super::checklists::{Checklist, ChecklistCategory};
use super::resources::{AgeGroup, Resource, ResourceCategory};
use super::services::{Area, Service, ServiceCategory};
use super::parse_wire;
use crate::models::UserRole;
use serde::de::DeserializeOwned;
use std::str::FromStr;

/// A categorical criterion: either the wildcard or one specific value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Choice<T> {
    /// Matches everything
    #[default]
    All,
    /// Matches one value
    Only(T),
}

impl<T: PartialEq> Choice<T> {
    /// Whether `value` satisfies the criterion.
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == value,
        }
    }

    /// Whether a scoped item satisfies the criterion. An item matches when
    /// its scopes contain the wanted value or the "applies to all" sentinel.
    pub fn matches_scope(&self, scopes: &[T], everyone: &T) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => scopes.contains(wanted) || scopes.contains(everyone),
        }
    }
}

impl<T: DeserializeOwned> FromStr for Choice<T> {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            parse_wire(s).map(Self::Only)
        }
    }
}

/// Criteria for the services directory.
#[derive(Debug, Clone, Default)]
pub struct ServiceCriteria {
    /// Free text
    pub text: String,
    /// Specialty
    pub category: Choice<ServiceCategory>,
    /// Area served
    pub area: Choice<Area>,
}

/// Criteria for support resources.
#[derive(Debug, Clone, Default)]
pub struct ResourceCriteria {
    /// Free text
    pub text: String,
    /// Kind of resource
    pub category: Choice<ResourceCategory>,
    /// Age group served
    pub age_group: Choice<AgeGroup>,
    /// Only locally based resources
    pub local_only: bool,
    /// Only featured resources
    pub featured_only: bool,
}

/// Criteria for review checklists.
#[derive(Debug, Clone, Default)]
pub struct ChecklistCriteria {
    /// Free text, matched against the title and visible item wording
    pub text: String,
    /// Matches checklists with at least one visible item of this category
    pub category: Choice<ChecklistCategory>,
    /// Viewer's role (gates professional-only items)
    pub role: Option<UserRole>,
}

/// Services matching `criteria`, in catalog order.
#[must_use]
pub fn filter_services<'a>(services: &'a [Service], criteria: &ServiceCriteria) -> Vec<&'a Service> {
    let query = Query::new(&criteria.text);
    services
        .iter()
        .filter(|service| {
            query.matches_any(&[&service.name, &service.description])
                && criteria.category.matches(&service.category)
                && criteria.area.matches_scope(&service.areas, &Area::Both)
        })
        .collect()
}

/// Resources matching `criteria`, in catalog order.
#[must_use]
pub fn filter_resources<'a>(
    resources: &'a [Resource],
    criteria: &ResourceCriteria,
) -> Vec<&'a Resource> {
    let query = Query::new(&criteria.text);
    resources
        .iter()
        .filter(|resource| {
            query.matches_any(&[&resource.name, &resource.description])
                && criteria.category.matches(&resource.category)
                && criteria
                    .age_group
                    .matches_scope(&resource.age_groups, &AgeGroup::AllAges)
                && (!criteria.local_only || resource.is_local)
                && (!criteria.featured_only || resource.is_featured)
        })
        .collect()
}

/// Checklists matching `criteria`, in catalog order.
#[must_use]
pub fn filter_checklists<'a>(
    checklists: &'a [Checklist],
    criteria: &ChecklistCriteria,
) -> Vec<&'a Checklist> {
    let query = Query::new(&criteria.text);
    checklists
        .iter()
        .filter(|checklist| {
            let text_ok = query.matches_any(&[&checklist.title])
                || checklist
                    .visible_items(criteria.role)
                    .any(|item| query.matches_any(&[&item.text]));
            let category_ok = match criteria.category {
                Choice::All => true,
                Choice::Only(category) => checklist
                    .visible_items(criteria.role)
                    .any(|item| item.category == category),
            };
            text_ok && category_ok
        })
        .collect()
}

/// Lower-cased free-text query.
struct Query(String);

impl Query {
    fn new(text: &str) -> Self {
        Self(text.to_lowercase())
    }

    fn matches_any(&self, fields: &[&str]) -> bool {
        self.0.is_empty() || fields.iter().any(|f| f.to_lowercase().contains(&self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::checklists::{ChecklistItem, ChecklistSection};
    use crate::catalog::Catalog;

    fn service(id: &str, name: &str, description: &str, areas: Vec<Area>) -> Service {
        Service {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            description_easy_read: format!("easy {id}"),
            icon: "heart".to_string(),
            category: ServiceCategory::Paediatrics,
            contacts: Vec::new(),
            referral_info: None,
            age_range: None,
            areas,
        }
    }

    fn resource(id: &str, ages: Vec<AgeGroup>, is_local: bool, is_featured: bool) -> Resource {
        Resource {
            id: id.to_string(),
            name: format!("Resource {id}"),
            description: "Support for families".to_string(),
            description_easy_read: "Help for you".to_string(),
            category: ResourceCategory::NationalCharity,
            age_groups: ages,
            icon: "heart".to_string(),
            website: None,
            phone: None,
            email: None,
            is_local,
            is_featured,
        }
    }

    fn ids<T>(items: &[&T], id: impl Fn(&T) -> &str) -> Vec<String> {
        items.iter().map(|i| id(i).to_string()).collect()
    }

    #[test]
    fn test_text_and_region_are_conjunctive() {
        let services = vec![
            service("a", "Community Paediatrics", "Reviews", vec![Area::Stockton]),
            service("b", "Audiology", "Hearing checks", vec![Area::Stockton]),
            service("c", "Hearing Clinic", "Hearing checks", vec![Area::Hartlepool]),
        ];
        let criteria = ServiceCriteria {
            text: "hearing".to_string(),
            area: Choice::Only(Area::Stockton),
            ..ServiceCriteria::default()
        };
        let found = filter_services(&services, &criteria);
        assert_eq!(ids(&found, |s| &s.id), vec!["b"]);
    }

    #[test]
    fn test_empty_criteria_returns_everything_in_order() {
        let services = vec![
            service("z", "Zeta", "", vec![Area::Both]),
            service("a", "Alpha", "", vec![Area::Stockton]),
        ];
        let found = filter_services(&services, &ServiceCriteria::default());
        assert_eq!(ids(&found, |s| &s.id), vec!["z", "a"]);
    }

    #[test]
    fn test_text_is_case_insensitive_and_matches_description() {
        let services = vec![service("a", "Clinic", "Glue EAR monitoring", vec![Area::Both])];
        let criteria = ServiceCriteria {
            text: "glue ear".to_string(),
            ..ServiceCriteria::default()
        };
        assert_eq!(filter_services(&services, &criteria).len(), 1);
    }

    #[test]
    fn test_text_never_matches_easy_read_wording() {
        let services = vec![service("a", "Clinic", "Reviews", vec![Area::Both])];
        let criteria = ServiceCriteria {
            text: "easy".to_string(),
            ..ServiceCriteria::default()
        };
        assert!(filter_services(&services, &criteria).is_empty());
    }

    #[test]
    fn test_both_areas_matches_any_requested_area() {
        let services = vec![service("a", "Clinic", "", vec![Area::Both])];
        for area in [Area::Stockton, Area::Hartlepool] {
            let criteria = ServiceCriteria {
                area: Choice::Only(area),
                ..ServiceCriteria::default()
            };
            assert_eq!(filter_services(&services, &criteria).len(), 1);
        }
    }

    #[test]
    fn test_category_exact_match() {
        let mut hearing = service("b", "Audiology", "", vec![Area::Both]);
        hearing.category = ServiceCategory::Audiology;
        let services = vec![service("a", "Paeds", "", vec![Area::Both]), hearing];
        let criteria = ServiceCriteria {
            category: Choice::Only(ServiceCategory::Audiology),
            ..ServiceCriteria::default()
        };
        assert_eq!(ids(&filter_services(&services, &criteria), |s| &s.id), vec!["b"]);
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let services = vec![service("a", "Clinic", "", vec![Area::Stockton])];
        let criteria = ServiceCriteria {
            text: "nothing like this".to_string(),
            ..ServiceCriteria::default()
        };
        assert!(filter_services(&services, &criteria).is_empty());
    }

    #[test]
    fn test_resource_age_group_sentinel() {
        let resources = vec![
            resource("early", vec![AgeGroup::EarlyYears], false, false),
            resource("all", vec![AgeGroup::AllAges], false, false),
            resource("adult", vec![AgeGroup::Adults], false, false),
        ];
        let criteria = ResourceCriteria {
            age_group: Choice::Only(AgeGroup::EarlyYears),
            ..ResourceCriteria::default()
        };
        assert_eq!(
            ids(&filter_resources(&resources, &criteria), |r| &r.id),
            vec!["early", "all"]
        );
    }

    #[test]
    fn test_resource_flags() {
        let resources = vec![
            resource("local", vec![AgeGroup::AllAges], true, false),
            resource("featured", vec![AgeGroup::AllAges], false, true),
            resource("both", vec![AgeGroup::AllAges], true, true),
        ];

        let local = ResourceCriteria {
            local_only: true,
            ..ResourceCriteria::default()
        };
        assert_eq!(
            ids(&filter_resources(&resources, &local), |r| &r.id),
            vec!["local", "both"]
        );

        let featured_local = ResourceCriteria {
            local_only: true,
            featured_only: true,
            ..ResourceCriteria::default()
        };
        assert_eq!(
            ids(&filter_resources(&resources, &featured_local), |r| &r.id),
            vec!["both"]
        );

        // Disabled flags are no-ops
        assert_eq!(
            filter_resources(&resources, &ResourceCriteria::default()).len(),
            3
        );
    }

    fn checklist_with_hidden_item() -> Checklist {
        let item = |id: &str, text: &str, category, professional_only| ChecklistItem {
            id: id.to_string(),
            text: text.to_string(),
            text_easy_read: String::new(),
            category,
            professional_only,
        };
        Checklist {
            id: "c".to_string(),
            title: "Review".to_string(),
            title_easy_read: "Check-up".to_string(),
            age_range: "1 year".to_string(),
            sections: vec![ChecklistSection {
                title: "Tests".to_string(),
                title_easy_read: "Tests".to_string(),
                items: vec![
                    item("c1", "Thyroid function", ChecklistCategory::Discussion, false),
                    item("c2", "Immune function", ChecklistCategory::Investigation, true),
                ],
            }],
        }
    }

    #[test]
    fn test_checklist_text_respects_role_visibility() {
        let checklists = vec![checklist_with_hidden_item()];
        let mut criteria = ChecklistCriteria {
            text: "immune".to_string(),
            ..ChecklistCriteria::default()
        };
        assert!(filter_checklists(&checklists, &criteria).is_empty());

        criteria.role = Some(UserRole::Professional);
        assert_eq!(filter_checklists(&checklists, &criteria).len(), 1);
    }

    #[test]
    fn test_checklist_category_respects_role_visibility() {
        let checklists = vec![checklist_with_hidden_item()];
        let criteria = ChecklistCriteria {
            category: Choice::Only(ChecklistCategory::Investigation),
            role: Some(UserRole::ParentCarer),
            ..ChecklistCriteria::default()
        };
        assert!(filter_checklists(&checklists, &criteria).is_empty());
    }

    #[test]
    fn test_checklist_title_match() {
        let checklists = vec![checklist_with_hidden_item()];
        let criteria = ChecklistCriteria {
            text: "REVIEW".to_string(),
            ..ChecklistCriteria::default()
        };
        assert_eq!(filter_checklists(&checklists, &criteria).len(), 1);
    }

    #[test]
    fn test_choice_parse() {
        assert_eq!("all".parse::<Choice<Area>>(), Ok(Choice::All));
        assert_eq!(
            "hartlepool".parse::<Choice<Area>>(),
            Ok(Choice::Only(Area::Hartlepool))
        );
        assert!("leeds".parse::<Choice<Area>>().is_err());
    }

    #[test]
    fn test_embedded_catalog_hearing_in_hartlepool() {
        let catalog = Catalog::load().unwrap();
        let criteria = ServiceCriteria {
            text: "hearing".to_string(),
            area: Choice::Only(Area::Hartlepool),
            ..ServiceCriteria::default()
        };
        let found = filter_services(&catalog.services, &criteria);
        assert!(!found.is_empty());
        assert!(found
            .iter()
            .all(|s| s.areas.contains(&Area::Hartlepool) || s.areas.contains(&Area::Both)));
    }
}
