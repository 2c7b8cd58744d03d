//! Business data model
//!
//! Every record here is compiled into the binary and never mutated; the UI
//! layer only filters and projects it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::CoreError;

/// Street address of the business
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Address {
    pub street: &'static str,
    pub city: &'static str,
    pub region: &'static str,
    pub postal_code: &'static str,
    pub country: &'static str,
}

impl Address {
    /// Single-line rendering used in the footer and no-script fallback
    pub fn one_line(&self) -> String {
        format!(
            "{}, {}, {} {}, {}",
            self.street, self.city, self.region, self.postal_code, self.country
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SocialLinks {
    pub facebook: Option<&'static str>,
    pub instagram: Option<&'static str>,
    pub linkedin: Option<&'static str>,
}

impl SocialLinks {
    pub fn all(&self) -> Vec<&'static str> {
        [self.facebook, self.instagram, self.linkedin]
            .into_iter()
            .flatten()
            .collect()
    }
}

/// The single business record everything else is rendered from
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BusinessInfo {
    pub name: &'static str,
    pub legal_name: &'static str,
    pub short_name: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub phone: &'static str,
    /// Digits only, in international format, as used by wa.me links
    pub whatsapp: &'static str,
    pub email: &'static str,
    pub address: Address,
    pub geo: GeoPoint,
    /// schema.org `openingHours` notation, e.g. `Mo-Fr 08:00-18:00`
    pub opening_hours: Vec<&'static str>,
    pub founding_year: u16,
    pub years_of_experience: u16,
    pub specializations: Vec<&'static str>,
    pub social: SocialLinks,
    pub logo: &'static str,
    pub theme_color: &'static str,
    pub background_color: &'static str,
}

/// Project category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
    Signboard,
    Contracting,
    Both,
}

impl ProjectCategory {
    pub const ALL: [ProjectCategory; 3] = [
        ProjectCategory::Signboard,
        ProjectCategory::Contracting,
        ProjectCategory::Both,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            ProjectCategory::Signboard => "signboard",
            ProjectCategory::Contracting => "contracting",
            ProjectCategory::Both => "both",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProjectCategory::Signboard => "Signboards",
            ProjectCategory::Contracting => "Contracting",
            ProjectCategory::Both => "Sign & Build",
        }
    }
}

impl fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ProjectCategory {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProjectCategory::ALL
            .into_iter()
            .find(|c| c.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::InvalidCategory(s.to_string()))
    }
}

/// A completed job shown in the portfolio gallery
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: ProjectCategory,
    /// Never empty for a project rendered in a gallery
    pub images: Vec<&'static str>,
    pub completed_on: NaiveDate,
    pub featured: bool,
    pub location: Option<&'static str>,
    pub client_type: Option<&'static str>,
}

impl Project {
    pub fn cover_image(&self) -> Option<&'static str> {
        self.images.first().copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceCategoryId {
    Signage,
    Construction,
    Maintenance,
}

impl ServiceCategoryId {
    pub const ALL: [ServiceCategoryId; 3] = [
        ServiceCategoryId::Signage,
        ServiceCategoryId::Construction,
        ServiceCategoryId::Maintenance,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            ServiceCategoryId::Signage => "signage",
            ServiceCategoryId::Construction => "construction",
            ServiceCategoryId::Maintenance => "maintenance",
        }
    }
}

impl fmt::Display for ServiceCategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ServiceCategoryId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ServiceCategoryId::ALL
            .into_iter()
            .find(|c| c.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::InvalidCategory(s.to_string()))
    }
}

/// Groups services on the services page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceCategory {
    pub id: ServiceCategoryId,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Service {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub features: Vec<&'static str>,
    pub category: ServiceCategoryId,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavigationItem {
    pub label: &'static str,
    pub href: &'static str,
    pub external: bool,
}

impl NavigationItem {
    pub const fn internal(label: &'static str, href: &'static str) -> Self {
        Self {
            label,
            href,
            external: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Testimonial {
    pub id: &'static str,
    pub name: &'static str,
    pub company: Option<&'static str>,
    pub content: &'static str,
    /// 1 to 5 stars
    pub rating: u8,
    pub project_type: ProjectCategory,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_category_parse() {
        assert_eq!("signboard".parse::<ProjectCategory>().unwrap(), ProjectCategory::Signboard);
        assert_eq!(" Contracting ".parse::<ProjectCategory>().unwrap(), ProjectCategory::Contracting);
        assert!("all".parse::<ProjectCategory>().is_err());
        assert!("".parse::<ProjectCategory>().is_err());
    }

    #[test]
    fn test_project_category_serde_ids() {
        let json = serde_json::to_string(&ProjectCategory::Both).unwrap();
        assert_eq!(json, "\"both\"");
        for category in ProjectCategory::ALL {
            assert_eq!(category.to_string(), category.id());
        }
    }

    #[test]
    fn test_service_category_parse() {
        assert_eq!(
            "maintenance".parse::<ServiceCategoryId>().unwrap(),
            ServiceCategoryId::Maintenance
        );
        assert!("signboard".parse::<ServiceCategoryId>().is_err());
    }

    #[test]
    fn test_social_links_skip_missing() {
        let social = SocialLinks {
            facebook: Some("https://facebook.com/x"),
            instagram: None,
            linkedin: Some("https://linkedin.com/company/x"),
        };
        assert_eq!(social.all().len(), 2);
    }
}
