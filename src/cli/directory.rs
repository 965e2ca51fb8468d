//! Services directory and support resource search commands.

use crate::catalog::{
    filter_resources, filter_services, AgeGroup, Area, Choice, ContactKind, Resource,
    ResourceCategory, ResourceCriteria, Service, ServiceCategory, ServiceCriteria,
};
use crate::cli::common::{print_json, CliResult};
use crate::cli::context::Context;
use crate::ui::TerminalSurface;
use clap::Args;
use serde::Serialize;

/// Search local NHS services
#[derive(Args, Debug)]
pub struct ServicesArgs {
    /// Free-text search over names and descriptions
    #[arg(short, long, value_name = "TEXT", default_value = "")]
    search: String,

    /// Specialty (e.g. audiology, speech-language) or "all"
    #[arg(short, long, value_name = "CATEGORY", default_value = "all")]
    category: Choice<ServiceCategory>,

    /// Area served (stockton, hartlepool) or "all"
    #[arg(short, long, value_name = "AREA", default_value = "all")]
    area: Choice<Area>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Search support organisations and resources
#[derive(Args, Debug)]
pub struct SupportArgs {
    /// Free-text search over names and descriptions
    #[arg(short, long, value_name = "TEXT", default_value = "")]
    search: String,

    /// Resource kind (e.g. local-support, national-charity) or "all"
    #[arg(short, long, value_name = "CATEGORY", default_value = "all")]
    category: Choice<ResourceCategory>,

    /// Age group (early-years, school-age, transitions, adults) or "all"
    #[arg(short = 'g', long, value_name = "AGE_GROUP", default_value = "all")]
    age_group: Choice<AgeGroup>,

    /// Only organisations based locally
    #[arg(long)]
    local: bool,

    /// Only featured organisations
    #[arg(long)]
    featured: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize, Debug)]
struct SearchOutput<'a, T> {
    count: usize,
    results: Vec<&'a T>,
}

impl ServicesArgs {
    /// Execute services search
    pub fn execute(&self, ctx: &Context) -> CliResult<()> {
        let criteria = ServiceCriteria {
            text: self.search.clone(),
            category: self.category,
            area: self.area,
        };
        let results = filter_services(&ctx.catalog.services, &criteria);

        if self.json {
            return print_json(&SearchOutput {
                count: results.len(),
                results,
            });
        }

        let surface = ctx.surface();
        println!("{}", surface.heading(surface.pick("NHS Services", "Health Services")));
        print!("{}", surface.gap());
        if results.is_empty() {
            print_no_results(surface);
        }
        for service in results {
            print_service(surface, service);
        }
        Ok(())
    }
}

impl SupportArgs {
    /// Execute support search
    pub fn execute(&self, ctx: &Context) -> CliResult<()> {
        let criteria = ResourceCriteria {
            text: self.search.clone(),
            category: self.category,
            age_group: self.age_group,
            local_only: self.local,
            featured_only: self.featured,
        };
        let results = filter_resources(&ctx.catalog.resources, &criteria);

        if self.json {
            return print_json(&SearchOutput {
                count: results.len(),
                results,
            });
        }

        let surface = ctx.surface();
        println!("{}", surface.heading(surface.pick("Support & Resources", "Help and Support")));
        print!("{}", surface.gap());
        if results.is_empty() {
            print_no_results(surface);
        }
        for resource in results {
            print_resource(surface, resource);
        }
        Ok(())
    }
}

fn print_no_results(surface: &TerminalSurface) {
    println!(
        "{}",
        surface.muted(surface.pick(
            "No results match your search. Try different words or filters.",
            "Nothing found. Try other words."
        ))
    );
}

fn print_service(surface: &TerminalSurface, service: &Service) {
    println!(
        "{}  {}",
        surface.accent(&service.name),
        surface.muted(surface.text(&service.category.label()))
    );
    println!("  {}", surface.body(surface.text(&service.description_text())));

    let areas: Vec<&str> = service.areas.iter().map(|a| a.label()).collect();
    println!(
        "  {}: {}",
        surface.label(surface.pick("Areas", "Where")),
        areas.join(", ")
    );
    if let Some(age_range) = &service.age_range {
        println!("  {}: {age_range}", surface.label(surface.pick("Ages", "Age")));
    }
    if let Some(referral) = &service.referral_info {
        println!(
            "  {}: {referral}",
            surface.label(surface.pick("Referral", "How to get seen"))
        );
    }
    for contact in &service.contacts {
        let kind = match contact.kind {
            ContactKind::Phone => surface.pick("Phone", "Call"),
            ContactKind::Email => "Email",
            ContactKind::Website => "Website",
            ContactKind::Address => surface.pick("Address", "Where to go"),
        };
        match &contact.label {
            Some(label) => println!("  {}: {} ({label})", surface.label(kind), contact.value),
            None => println!("  {}: {}", surface.label(kind), contact.value),
        }
    }
    println!("{}", surface.gap());
}

fn print_resource(surface: &TerminalSurface, resource: &Resource) {
    let mut badges = Vec::new();
    if resource.is_local {
        badges.push(surface.pick("Local", "Near you"));
    }
    if resource.is_featured {
        badges.push(surface.pick("Featured", "Recommended"));
    }
    println!(
        "{}  {}{}",
        surface.accent(&resource.name),
        surface.muted(surface.text(&resource.category.label())),
        if badges.is_empty() {
            String::new()
        } else {
            format!("  [{}]", badges.join(", "))
        }
    );
    println!("  {}", surface.body(surface.text(&resource.description_text())));

    let ages: Vec<String> = resource
        .age_groups
        .iter()
        .map(|g| surface.text(&g.label()).to_string())
        .collect();
    println!(
        "  {}: {}",
        surface.label(surface.pick("Age groups", "Who for")),
        ages.join(", ")
    );
    if let Some(website) = &resource.website {
        println!("  {}: {website}", surface.label("Website"));
    }
    if let Some(phone) = &resource.phone {
        println!("  {}: {phone}", surface.label(surface.pick("Phone", "Call")));
    }
    if let Some(email) = &resource.email {
        println!("  {}: {email}", surface.label("Email"));
    }
    println!("{}", surface.gap());
}
