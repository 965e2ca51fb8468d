//! Static guide content: services, support resources, review checklists and
//! page descriptions.
//!
//! The catalogs are embedded in the binary at compile time and parsed by
//! [`Catalog::load`].

pub mod checklists;
pub mod filter;
pub mod resources;
pub mod services;

pub use checklists::{Checklist, ChecklistCategory, ChecklistItem, ChecklistSection};
pub use filter::{
    filter_checklists, filter_resources, filter_services, ChecklistCriteria, Choice,
    ResourceCriteria, ServiceCriteria,
};
pub use resources::{AgeGroup, Resource, ResourceCategory};
pub use services::{Area, Contact, ContactKind, Service, ServiceCategory};

use crate::models::Text;
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Description of one page of the guide, used for headings and read-aloud.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Page id (e.g. "services")
    pub id: String,
    /// Page title
    pub title: Text,
    /// Introductory paragraph
    pub description: Text,
}

/// All static content.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Services directory
    pub services: Vec<Service>,
    /// Support resources
    pub resources: Vec<Resource>,
    /// Review checklists
    pub checklists: Vec<Checklist>,
    /// Page descriptions
    pub pages: Vec<Page>,
}

impl Catalog {
    /// Parses the embedded catalogs.
    pub fn load() -> Result<Self> {
        Ok(Self {
            services: parse_embedded("services.json", include_str!("services.json"))?,
            resources: parse_embedded("resources.json", include_str!("resources.json"))?,
            checklists: parse_embedded("checklists.json", include_str!("checklists.json"))?,
            pages: parse_embedded("pages.json", include_str!("pages.json"))?,
        })
    }

    /// Looks up a checklist by id.
    #[must_use]
    pub fn checklist(&self, id: &str) -> Option<&Checklist> {
        self.checklists.iter().find(|c| c.id == id)
    }

    /// Looks up a page by id.
    #[must_use]
    pub fn page(&self, id: &str) -> Option<&Page> {
        self.pages.iter().find(|p| p.id == id)
    }
}

fn parse_embedded<T: DeserializeOwned>(name: &str, json: &str) -> Result<T> {
    serde_json::from_str(json).context(format!("Failed to parse embedded {name}"))
}

/// Parses a kebab-case wire identifier (e.g. "speech-language") into an enum.
pub fn parse_wire<T: DeserializeOwned>(s: &str) -> Result<T, String> {
    serde_json::from_value(serde_json::Value::String(s.trim().to_ascii_lowercase()))
        .map_err(|_| format!("Unknown value '{s}'"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn catalog() -> Catalog {
        Catalog::load().expect("embedded catalog should parse")
    }

    #[test]
    fn test_load_catalog() {
        let catalog = catalog();
        assert!(catalog.services.len() >= 10);
        assert!(catalog.resources.len() >= 10);
        assert_eq!(catalog.checklists.len(), 5);
        assert!(catalog.page("services").is_some());
    }

    #[test]
    fn test_ids_unique() {
        let catalog = catalog();
        let services: HashSet<_> = catalog.services.iter().map(|s| &s.id).collect();
        assert_eq!(services.len(), catalog.services.len());
        let resources: HashSet<_> = catalog.resources.iter().map(|r| &r.id).collect();
        assert_eq!(resources.len(), catalog.resources.len());
        for checklist in &catalog.checklists {
            let items: HashSet<_> = checklist.items().map(|i| &i.id).collect();
            assert_eq!(items.len(), checklist.items().count(), "{}", checklist.id);
        }
    }

    #[test]
    fn test_one_year_review_has_professional_only_item() {
        let catalog = catalog();
        let checklist = catalog.checklist("1-year").unwrap();
        let item = checklist.item("1y-i4").unwrap();
        assert!(item.professional_only);
        assert_eq!(checklist.items().count(), 15);
        assert_eq!(checklist.visible_items(None).count(), 14);
    }

    #[test]
    fn test_every_page_has_both_registers() {
        for page in catalog().pages {
            assert!(!page.description.standard.is_empty());
            assert!(!page.description.easy_read.is_empty());
        }
    }

    #[test]
    fn test_parse_wire() {
        assert_eq!(
            parse_wire::<ServiceCategory>("speech-language"),
            Ok(ServiceCategory::SpeechLanguage)
        );
        assert_eq!(parse_wire::<Area>("Stockton"), Ok(Area::Stockton));
        assert!(parse_wire::<AgeGroup>("toddlers").is_err());
    }
}
