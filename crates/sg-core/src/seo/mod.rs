//! SEO surface: page metadata, JSON-LD, web manifest and sitemap
//!
//! Everything here is derived from the static business record and the site
//! origin. Tag and property names are consumed by search engines and social
//! crawlers, so they are fixed strings.

pub mod jsonld;
pub mod manifest;
pub mod sitemap;

use serde::Serialize;

use crate::config::SiteConfig;
use crate::model::BusinessInfo;
use crate::{CoreError, CoreResult};

pub const DEFAULT_OG_IMAGE: &str = "/assets/images/og-default.jpg";
pub const LOCALE: &str = "en_AE";

/// Metadata for one route
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageMeta {
    pub path: &'static str,
    /// Breadcrumb label
    pub label: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub keywords: &'static [&'static str],
    pub og_image: Option<&'static str>,
    /// Relative sitemap priority, 0.0 to 1.0
    pub priority: f32,
}

/// A `<meta>` element: either `name=` or `property=` keyed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MetaTag {
    Name { name: &'static str, content: String },
    Property { property: &'static str, content: String },
}

impl MetaTag {
    fn name(name: &'static str, content: impl Into<String>) -> Self {
        MetaTag::Name { name, content: content.into() }
    }

    fn property(property: &'static str, content: impl Into<String>) -> Self {
        MetaTag::Property { property, content: content.into() }
    }

    pub fn key(&self) -> &'static str {
        match self {
            MetaTag::Name { name, .. } => *name,
            MetaTag::Property { property, .. } => *property,
        }
    }

    pub fn content(&self) -> &str {
        match self {
            MetaTag::Name { content, .. } | MetaTag::Property { content, .. } => content.as_str(),
        }
    }
}

pub const PAGES: &[PageMeta] = &[
    PageMeta {
        path: "/",
        label: "Home",
        title: "Signboards & Contracting in Dubai",
        description: "Custom signboards, LED and neon signs, shopfronts and fit-out contracting. \
                      Designed, fabricated and installed by one team.",
        keywords: &["signboard company", "LED signs", "shopfront", "fit-out contractor", "Dubai"],
        og_image: None,
        priority: 1.0,
    },
    PageMeta {
        path: "/about",
        label: "About",
        title: "About Us",
        description: "Fifteen years of signage and contracting work for retail, hospitality \
                      and commercial clients across the UAE.",
        keywords: &["about", "signage manufacturer", "contracting company"],
        og_image: None,
        priority: 0.7,
    },
    PageMeta {
        path: "/services",
        label: "Services",
        title: "Services",
        description: "3D channel letters, LED and neon signs, wayfinding, shopfronts, \
                      interior fit-out, steel works and maintenance contracts.",
        keywords: &["channel letters", "neon signs", "wayfinding", "interior fit-out", "steel works"],
        og_image: None,
        priority: 0.9,
    },
    PageMeta {
        path: "/portfolio",
        label: "Portfolio",
        title: "Portfolio",
        description: "Recent signboard and contracting projects: facades, shopfronts, \
                      wayfinding systems and fit-outs.",
        keywords: &["portfolio", "signage projects", "shopfront projects"],
        og_image: Some("/assets/images/projects/boutique-1.jpg"),
        priority: 0.8,
    },
    PageMeta {
        path: "/contact",
        label: "Contact",
        title: "Contact Us",
        description: "Request a quote for signage or contracting work. Call, WhatsApp or email \
                      our team.",
        keywords: &["contact", "quote", "signage quote"],
        og_image: None,
        priority: 0.8,
    },
];

/// Metadata for a route path
pub fn page(path: &str) -> CoreResult<&'static PageMeta> {
    PAGES
        .iter()
        .find(|p| p.path == path)
        .ok_or_else(|| CoreError::NotFound(format!("page '{}'", path)))
}

impl PageMeta {
    /// `<title>` text: the home page leads with the business name
    pub fn full_title(&self, business: &BusinessInfo) -> String {
        if self.path == "/" {
            format!("{} | {}", business.name, self.title)
        } else {
            format!("{} | {}", self.title, business.name)
        }
    }

    pub fn canonical(&self, config: &SiteConfig) -> String {
        config.absolute(self.path)
    }

    /// Description, keywords, Open Graph and Twitter Card tags
    pub fn tags(&self, business: &BusinessInfo, config: &SiteConfig) -> Vec<MetaTag> {
        let title = self.full_title(business);
        let image = config.absolute(self.og_image.unwrap_or(DEFAULT_OG_IMAGE));
        let og_type = if self.path == "/" { "website" } else { "article" };

        vec![
            MetaTag::name("description", self.description),
            MetaTag::name("keywords", self.keywords.join(", ")),
            MetaTag::property("og:title", title.clone()),
            MetaTag::property("og:description", self.description),
            MetaTag::property("og:type", og_type),
            MetaTag::property("og:url", self.canonical(config)),
            MetaTag::property("og:image", image.clone()),
            MetaTag::property("og:site_name", business.name),
            MetaTag::property("og:locale", LOCALE),
            MetaTag::name("twitter:card", "summary_large_image"),
            MetaTag::name("twitter:title", title),
            MetaTag::name("twitter:description", self.description),
            MetaTag::name("twitter:image", image),
        ]
    }

    /// Breadcrumb trail from the home page to this page
    pub fn breadcrumbs(&self) -> Vec<&'static PageMeta> {
        let home = &PAGES[0];
        if self.path == home.path {
            vec![home]
        } else {
            PAGES
                .iter()
                .filter(|p| p.path == home.path || p.path == self.path)
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::BUSINESS;
    use crate::redirects::ROUTES;

    fn config() -> SiteConfig {
        SiteConfig {
            site_url: "https://example.com".to_string(),
            ..SiteConfig::default()
        }
    }

    #[test]
    fn test_every_route_has_meta() {
        for route in ROUTES {
            assert_eq!(page(route).unwrap().path, *route);
        }
        assert_eq!(PAGES.len(), ROUTES.len());
        assert!(page("/missing").is_err());
    }

    #[test]
    fn test_tags_cover_open_graph_and_twitter() {
        let tags = page("/services").unwrap().tags(&BUSINESS, &config());
        let keys: Vec<_> = tags.iter().map(|t| t.key()).collect();
        for key in [
            "description",
            "og:title",
            "og:url",
            "og:image",
            "twitter:card",
            "twitter:image",
        ] {
            assert!(keys.contains(&key), "missing {}", key);
        }

        let url = tags.iter().find(|t| t.key() == "og:url").unwrap();
        assert_eq!(url.content(), "https://example.com/services");
        let image = tags.iter().find(|t| t.key() == "og:image").unwrap();
        assert_eq!(image.content(), "https://example.com/assets/images/og-default.jpg");
    }

    #[test]
    fn test_titles() {
        let home = page("/").unwrap();
        assert!(home.full_title(&BUSINESS).starts_with(BUSINESS.name));
        let about = page("/about").unwrap();
        assert_eq!(about.full_title(&BUSINESS), format!("About Us | {}", BUSINESS.name));
    }

    #[test]
    fn test_breadcrumbs() {
        let crumbs: Vec<_> = page("/portfolio").unwrap().breadcrumbs().iter().map(|p| p.path).collect();
        assert_eq!(crumbs, vec!["/", "/portfolio"]);
        assert_eq!(page("/").unwrap().breadcrumbs().len(), 1);
    }
}
