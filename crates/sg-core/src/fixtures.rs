//! Static business fixtures
//!
//! Loaded once on first access and validated by [`validate`] at server and
//! CLI start-up.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use std::collections::HashSet;

use crate::model::*;
use crate::{CoreError, CoreResult};

pub static BUSINESS: Lazy<BusinessInfo> = Lazy::new(|| BusinessInfo {
    name: "Skyline Signs & Contracting",
    legal_name: "Skyline Signs & Contracting LLC",
    short_name: "Skyline Signs",
    tagline: "Signboards that get noticed. Builds that last.",
    description: "Design, fabrication and installation of signboards, shopfronts and \
                  fit-out works for retail, hospitality and commercial clients.",
    phone: "+971 4 555 0142",
    whatsapp: "97145550142",
    email: "info@skylinesigns.ae",
    address: Address {
        street: "Warehouse 14, Street 22, Al Quoz Industrial Area 3",
        city: "Dubai",
        region: "Dubai",
        postal_code: "00000",
        country: "AE",
    },
    geo: GeoPoint {
        latitude: 25.1372,
        longitude: 55.2386,
    },
    opening_hours: vec!["Mo-Fr 08:00-18:00", "Sa 09:00-14:00"],
    founding_year: 2009,
    years_of_experience: 15,
    specializations: vec![
        "3D channel letters",
        "LED and neon signage",
        "Shopfront fabrication",
        "Interior fit-out",
        "Steel and aluminium works",
    ],
    social: SocialLinks {
        facebook: Some("https://www.facebook.com/skylinesigns"),
        instagram: Some("https://www.instagram.com/skylinesigns"),
        linkedin: Some("https://www.linkedin.com/company/skyline-signs"),
    },
    logo: "/assets/images/logo.png",
    theme_color: "#0f172a",
    background_color: "#ffffff",
});

pub static NAVIGATION: Lazy<Vec<NavigationItem>> = Lazy::new(|| {
    vec![
        NavigationItem::internal("Home", "/"),
        NavigationItem::internal("About", "/about"),
        NavigationItem::internal("Services", "/services"),
        NavigationItem::internal("Portfolio", "/portfolio"),
        NavigationItem::internal("Contact", "/contact"),
    ]
});

pub static SERVICE_CATEGORIES: Lazy<Vec<ServiceCategory>> = Lazy::new(|| {
    vec![
        ServiceCategory {
            id: ServiceCategoryId::Signage,
            title: "Signage",
            description: "Indoor and outdoor signs designed, fabricated and installed in-house.",
        },
        ServiceCategory {
            id: ServiceCategoryId::Construction,
            title: "Contracting",
            description: "Shopfronts, fit-outs and light steel structures delivered turnkey.",
        },
        ServiceCategory {
            id: ServiceCategoryId::Maintenance,
            title: "Maintenance",
            description: "Scheduled servicing and emergency repairs for signs and facades.",
        },
    ]
});

pub static SERVICES: Lazy<Vec<Service>> = Lazy::new(|| {
    vec![
        Service {
            id: "channel-letters",
            title: "3D Channel Letters",
            description: "Illuminated and non-illuminated letters in acrylic, stainless steel and aluminium.",
            features: vec!["Front-lit, back-lit and halo-lit", "CNC routed faces", "Municipality permit drawings"],
            category: ServiceCategoryId::Signage,
        },
        Service {
            id: "led-neon",
            title: "LED & Neon Signs",
            description: "Flexible LED neon and programmable LED displays for storefronts and interiors.",
            features: vec!["Custom colours", "Dimmable drivers", "Energy-efficient modules"],
            category: ServiceCategoryId::Signage,
        },
        Service {
            id: "wayfinding",
            title: "Wayfinding & Directional Signs",
            description: "Consistent wayfinding systems for malls, offices and car parks.",
            features: vec!["Site surveys", "ADA-compliant tactile signs", "Modular panels"],
            category: ServiceCategoryId::Signage,
        },
        Service {
            id: "shopfronts",
            title: "Shopfront Fabrication",
            description: "Aluminium cladding, glazing and signage combined into a single shopfront package.",
            features: vec!["ACP cladding", "Frameless glazing", "Integrated lightboxes"],
            category: ServiceCategoryId::Construction,
        },
        Service {
            id: "fit-out",
            title: "Interior Fit-Out",
            description: "Partitions, ceilings, joinery and finishes for retail and office spaces.",
            features: vec!["Gypsum partitions", "Custom joinery", "MEP coordination"],
            category: ServiceCategoryId::Construction,
        },
        Service {
            id: "steel-works",
            title: "Steel & Aluminium Works",
            description: "Pylon structures, canopies and support frames engineered for local wind loads.",
            features: vec!["Structural calculations", "Hot-dip galvanising", "Powder coating"],
            category: ServiceCategoryId::Construction,
        },
        Service {
            id: "maintenance-contracts",
            title: "Annual Maintenance Contracts",
            description: "Planned inspections and cleaning to keep signs bright and safe.",
            features: vec!["Quarterly inspections", "LED module replacement", "Priority call-outs"],
            category: ServiceCategoryId::Maintenance,
        },
    ]
});

pub static PROJECTS: Lazy<Vec<Project>> = Lazy::new(|| {
    vec![
        Project {
            id: "marina-cafe-facade",
            title: "Marina Café Facade Sign",
            description: "Halo-lit stainless steel letters mounted on a timber-clad facade.",
            category: ProjectCategory::Signboard,
            images: vec![
                "/assets/images/projects/marina-cafe-1.jpg",
                "/assets/images/projects/marina-cafe-2.jpg",
                "/assets/images/projects/marina-cafe-3.jpg",
            ],
            completed_on: date(2024, 3, 18),
            featured: true,
            location: Some("Dubai Marina"),
            client_type: Some("Hospitality"),
        },
        Project {
            id: "logistics-warehouse-extension",
            title: "Logistics Warehouse Office Extension",
            description: "Mezzanine office block with steel staircase, partitions and ceilings.",
            category: ProjectCategory::Contracting,
            images: vec![
                "/assets/images/projects/warehouse-1.jpg",
                "/assets/images/projects/warehouse-2.jpg",
            ],
            completed_on: date(2023, 11, 2),
            featured: true,
            location: Some("Jebel Ali"),
            client_type: Some("Industrial"),
        },
        Project {
            id: "boutique-shopfront",
            title: "Boutique Shopfront & Lightbox",
            description: "Full shopfront with ACP cladding, frameless glazing and a fabric lightbox.",
            category: ProjectCategory::Both,
            images: vec![
                "/assets/images/projects/boutique-1.jpg",
                "/assets/images/projects/boutique-2.jpg",
                "/assets/images/projects/boutique-3.jpg",
                "/assets/images/projects/boutique-4.jpg",
            ],
            completed_on: date(2024, 6, 9),
            featured: true,
            location: Some("City Walk"),
            client_type: Some("Retail"),
        },
        Project {
            id: "clinic-wayfinding",
            title: "Clinic Wayfinding System",
            description: "Room identification, directional and tactile signs across four floors.",
            category: ProjectCategory::Signboard,
            images: vec!["/assets/images/projects/clinic-1.jpg", "/assets/images/projects/clinic-2.jpg"],
            completed_on: date(2023, 8, 21),
            featured: false,
            location: Some("Healthcare City"),
            client_type: Some("Healthcare"),
        },
        Project {
            id: "restaurant-fit-out",
            title: "Restaurant Interior Fit-Out",
            description: "Joinery, feature ceilings and LED neon accents for a 120-seat restaurant.",
            category: ProjectCategory::Both,
            images: vec!["/assets/images/projects/restaurant-1.jpg", "/assets/images/projects/restaurant-2.jpg"],
            completed_on: date(2022, 12, 5),
            featured: false,
            location: Some("Downtown"),
            client_type: Some("Hospitality"),
        },
        Project {
            id: "pylon-sign-petrol",
            title: "Service Station Pylon Sign",
            description: "Twelve-metre pylon with LED price display on a galvanised steel frame.",
            category: ProjectCategory::Signboard,
            images: vec!["/assets/images/projects/pylon-1.jpg"],
            completed_on: date(2022, 5, 30),
            featured: false,
            location: Some("Sharjah"),
            client_type: Some("Fuel Retail"),
        },
        Project {
            id: "showroom-canopy",
            title: "Showroom Entrance Canopy",
            description: "Cantilevered steel canopy with aluminium soffit and integrated downlights.",
            category: ProjectCategory::Contracting,
            images: vec!["/assets/images/projects/canopy-1.jpg", "/assets/images/projects/canopy-2.jpg"],
            completed_on: date(2021, 9, 14),
            featured: false,
            location: Some("Sheikh Zayed Road"),
            client_type: Some("Automotive"),
        },
    ]
});

pub static TESTIMONIALS: Lazy<Vec<Testimonial>> = Lazy::new(|| {
    vec![
        Testimonial {
            id: "t-marina-cafe",
            name: "Layla Haddad",
            company: Some("Marina Café"),
            content: "The new facade sign doubled our evening walk-ins. Installed overnight with zero disruption.",
            rating: 5,
            project_type: ProjectCategory::Signboard,
        },
        Testimonial {
            id: "t-warehouse",
            name: "Rahul Menon",
            company: Some("Gulf Freight Logistics"),
            content: "Handed over the office extension a week early and the site was spotless.",
            rating: 5,
            project_type: ProjectCategory::Contracting,
        },
        Testimonial {
            id: "t-boutique",
            name: "Sofia Marchetti",
            company: Some("Atelier Sofia"),
            content: "One team for the shopfront and the signage made the whole fit-out painless.",
            rating: 5,
            project_type: ProjectCategory::Both,
        },
        Testimonial {
            id: "t-clinic",
            name: "Dr. Omar Farouk",
            company: None,
            content: "Patients find their way without asking reception anymore. Clear, durable signs.",
            rating: 4,
            project_type: ProjectCategory::Signboard,
        },
    ]
});

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

/// Projects flagged for the home page
pub fn featured_projects() -> Vec<&'static Project> {
    PROJECTS.iter().filter(|p| p.featured).collect()
}

pub fn project(id: &str) -> CoreResult<&'static Project> {
    PROJECTS
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| CoreError::NotFound(format!("project '{}'", id)))
}

pub fn services_in(category: ServiceCategoryId) -> Vec<&'static Service> {
    SERVICES.iter().filter(|s| s.category == category).collect()
}

/// Check every fixture invariant, reporting the first violation
pub fn validate() -> CoreResult<()> {
    ensure_unique("project", PROJECTS.iter().map(|p| p.id))?;
    ensure_unique("service", SERVICES.iter().map(|s| s.id))?;
    ensure_unique("testimonial", TESTIMONIALS.iter().map(|t| t.id))?;
    ensure_unique("service category", SERVICE_CATEGORIES.iter().map(|c| c.id.id()))?;
    ensure_unique("navigation href", NAVIGATION.iter().map(|n| n.href))?;

    if let Some(p) = PROJECTS.iter().find(|p| p.images.is_empty()) {
        return Err(CoreError::Fixture(format!("project '{}' has no images", p.id)));
    }

    if let Some(t) = TESTIMONIALS.iter().find(|t| !(1..=5).contains(&t.rating)) {
        return Err(CoreError::Fixture(format!(
            "testimonial '{}' has rating {} outside 1..=5",
            t.id, t.rating
        )));
    }

    for service in SERVICES.iter() {
        if !SERVICE_CATEGORIES.iter().any(|c| c.id == service.category) {
            return Err(CoreError::Fixture(format!(
                "service '{}' references unknown category '{}'",
                service.id, service.category
            )));
        }
    }

    Ok(())
}

fn ensure_unique<'a>(kind: &str, ids: impl Iterator<Item = &'a str>) -> CoreResult<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CoreError::Fixture(format!("duplicate {} id '{}'", kind, id)));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixtures_are_valid() {
        validate().unwrap();
    }

    #[test]
    fn test_ensure_unique_rejects_duplicates() {
        let err = ensure_unique("project", ["a", "b", "a"].into_iter()).unwrap_err();
        assert!(err.to_string().contains("duplicate project id 'a'"));
    }

    #[test]
    fn test_every_category_has_a_project() {
        for category in ProjectCategory::ALL {
            assert!(PROJECTS.iter().any(|p| p.category == category), "{}", category);
        }
    }

    #[test]
    fn test_project_lookup() {
        assert_eq!(project("boutique-shopfront").unwrap().category, ProjectCategory::Both);
        assert!(matches!(project("missing"), Err(CoreError::NotFound(_))));
    }

    #[test]
    fn test_featured_projects_have_covers() {
        let featured = featured_projects();
        assert!(!featured.is_empty());
        assert!(featured.iter().all(|p| p.cover_image().is_some()));
    }

    #[test]
    fn test_services_grouped_by_category() {
        let total: usize = ServiceCategoryId::ALL.iter().map(|c| services_in(*c).len()).sum();
        assert_eq!(total, SERVICES.len());
    }
}
