//! schema.org JSON-LD documents

use serde_json::{json, Value};

use super::PageMeta;
use crate::config::SiteConfig;
use crate::model::{BusinessInfo, Service, ServiceCategory};
use crate::CoreResult;

pub const CONTEXT: &str = "https://schema.org";

fn postal_address(business: &BusinessInfo) -> Value {
    json!({
        "@type": "PostalAddress",
        "streetAddress": business.address.street,
        "addressLocality": business.address.city,
        "addressRegion": business.address.region,
        "postalCode": business.address.postal_code,
        "addressCountry": business.address.country,
    })
}

fn organization_id(config: &SiteConfig) -> String {
    format!("{}/#organization", config.origin())
}

pub fn organization(business: &BusinessInfo, config: &SiteConfig) -> Value {
    json!({
        "@context": CONTEXT,
        "@type": "Organization",
        "@id": organization_id(config),
        "name": business.name,
        "legalName": business.legal_name,
        "url": config.absolute("/"),
        "logo": config.absolute(business.logo),
        "description": business.description,
        "email": business.email,
        "telephone": business.phone,
        "foundingDate": business.founding_year.to_string(),
        "address": postal_address(business),
        "contactPoint": {
            "@type": "ContactPoint",
            "telephone": business.phone,
            "email": business.email,
            "contactType": "customer service",
            "availableLanguage": ["English", "Arabic"],
        },
        "sameAs": business.social.all(),
    })
}

pub fn local_business(business: &BusinessInfo, config: &SiteConfig) -> Value {
    json!({
        "@context": CONTEXT,
        "@type": "LocalBusiness",
        "@id": format!("{}/#localbusiness", config.origin()),
        "name": business.name,
        "description": business.description,
        "url": config.absolute("/"),
        "image": config.absolute(business.logo),
        "telephone": business.phone,
        "email": business.email,
        "priceRange": "$$",
        "address": postal_address(business),
        "geo": {
            "@type": "GeoCoordinates",
            "latitude": business.geo.latitude,
            "longitude": business.geo.longitude,
        },
        "openingHours": business.opening_hours,
        "areaServed": "United Arab Emirates",
        "knowsAbout": business.specializations,
        "parentOrganization": { "@id": organization_id(config) },
        "sameAs": business.social.all(),
    })
}

pub fn website(business: &BusinessInfo, config: &SiteConfig) -> Value {
    json!({
        "@context": CONTEXT,
        "@type": "WebSite",
        "name": business.name,
        "url": config.absolute("/"),
        "publisher": { "@id": organization_id(config) },
        "potentialAction": {
            "@type": "SearchAction",
            "target": format!("{}/portfolio?category={{search_term_string}}", config.origin()),
            "query-input": "required name=search_term_string",
        },
    })
}

pub fn breadcrumb_list(trail: &[&PageMeta], config: &SiteConfig) -> Value {
    let items: Vec<Value> = trail
        .iter()
        .enumerate()
        .map(|(i, page)| {
            json!({
                "@type": "ListItem",
                "position": i + 1,
                "name": page.label,
                "item": config.absolute(page.path),
            })
        })
        .collect();

    json!({
        "@context": CONTEXT,
        "@type": "BreadcrumbList",
        "itemListElement": items,
    })
}

/// `OfferCatalog` of every service, grouped by category
pub fn service_catalog(
    business: &BusinessInfo,
    categories: &[ServiceCategory],
    services: &[Service],
    config: &SiteConfig,
) -> Value {
    let groups: Vec<Value> = categories
        .iter()
        .map(|category| {
            let offers: Vec<Value> = services
                .iter()
                .filter(|s| s.category == category.id)
                .map(|s| {
                    json!({
                        "@type": "Offer",
                        "itemOffered": {
                            "@type": "Service",
                            "name": s.title,
                            "description": s.description,
                            "provider": { "@id": organization_id(config) },
                        },
                    })
                })
                .collect();
            json!({
                "@type": "OfferCatalog",
                "name": category.title,
                "itemListElement": offers,
            })
        })
        .collect();

    json!({
        "@context": CONTEXT,
        "@type": "OfferCatalog",
        "name": format!("{} services", business.short_name),
        "url": config.absolute("/services"),
        "itemListElement": groups,
    })
}

/// Serialize a document for embedding in `<script type="application/ld+json">`.
/// `<` is escaped so no value can close the script element early.
pub fn to_script(value: &Value) -> CoreResult<String> {
    Ok(serde_json::to_string(value)?.replace('<', "\\u003c"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{BUSINESS, SERVICES, SERVICE_CATEGORIES};
    use crate::seo::page;

    fn config() -> SiteConfig {
        SiteConfig {
            site_url: "https://example.com".to_string(),
            ..SiteConfig::default()
        }
    }

    #[test]
    fn test_organization_fields() {
        let org = organization(&BUSINESS, &config());
        assert_eq!(org["@context"], "https://schema.org");
        assert_eq!(org["@type"], "Organization");
        assert_eq!(org["name"], BUSINESS.name);
        assert_eq!(org["url"], "https://example.com/");
        assert_eq!(org["logo"], "https://example.com/assets/images/logo.png");
        assert_eq!(org["address"]["@type"], "PostalAddress");
        assert_eq!(org["address"]["addressLocality"], "Dubai");
        assert_eq!(org["sameAs"].as_array().unwrap().len(), 3);
        assert_eq!(org["foundingDate"], "2009");
    }

    #[test]
    fn test_local_business_fields() {
        let lb = local_business(&BUSINESS, &config());
        assert_eq!(lb["@type"], "LocalBusiness");
        assert_eq!(lb["geo"]["@type"], "GeoCoordinates");
        assert_eq!(lb["openingHours"][0], "Mo-Fr 08:00-18:00");
        assert_eq!(lb["parentOrganization"]["@id"], "https://example.com/#organization");
    }

    #[test]
    fn test_website_search_action() {
        let site = website(&BUSINESS, &config());
        assert_eq!(site["potentialAction"]["@type"], "SearchAction");
        assert_eq!(
            site["potentialAction"]["target"],
            "https://example.com/portfolio?category={search_term_string}"
        );
    }

    #[test]
    fn test_breadcrumb_positions() {
        let trail = page("/contact").unwrap().breadcrumbs();
        let crumbs = breadcrumb_list(&trail, &config());
        let items = crumbs["itemListElement"].as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["position"], 1);
        assert_eq!(items[0]["item"], "https://example.com/");
        assert_eq!(items[1]["position"], 2);
        assert_eq!(items[1]["name"], "Contact");
    }

    #[test]
    fn test_service_catalog_groups() {
        let catalog = service_catalog(&BUSINESS, &SERVICE_CATEGORIES, &SERVICES, &config());
        let groups = catalog["itemListElement"].as_array().unwrap();
        assert_eq!(groups.len(), SERVICE_CATEGORIES.len());
        let offers: usize = groups
            .iter()
            .map(|g| g["itemListElement"].as_array().unwrap().len())
            .sum();
        assert_eq!(offers, SERVICES.len());
    }

    #[test]
    fn test_script_escapes_markup() {
        let script = to_script(&json!({ "name": "</script><b>" })).unwrap();
        assert!(!script.contains('<'));
        let back: Value = serde_json::from_str(&script).unwrap();
        assert_eq!(back["name"], "</script><b>");
    }
}
