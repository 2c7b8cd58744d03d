//! PWA web manifest

use serde::Serialize;

use crate::model::BusinessInfo;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestIcon {
    pub src: &'static str,
    pub sizes: &'static str,
    #[serde(rename = "type")]
    pub mime: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebManifest {
    pub name: &'static str,
    pub short_name: &'static str,
    pub description: &'static str,
    pub start_url: &'static str,
    pub scope: &'static str,
    pub display: &'static str,
    pub orientation: &'static str,
    pub background_color: &'static str,
    pub theme_color: &'static str,
    pub lang: &'static str,
    pub categories: Vec<&'static str>,
    pub icons: Vec<ManifestIcon>,
}

const ICONS: [ManifestIcon; 3] = [
    ManifestIcon {
        src: "/assets/icons/icon-192.png",
        sizes: "192x192",
        mime: "image/png",
        purpose: None,
    },
    ManifestIcon {
        src: "/assets/icons/icon-512.png",
        sizes: "512x512",
        mime: "image/png",
        purpose: None,
    },
    ManifestIcon {
        src: "/assets/icons/icon-maskable-512.png",
        sizes: "512x512",
        mime: "image/png",
        purpose: Some("maskable"),
    },
];

pub fn web_manifest(business: &BusinessInfo) -> WebManifest {
    WebManifest {
        name: business.name,
        short_name: business.short_name,
        description: business.tagline,
        start_url: "/",
        scope: "/",
        display: "standalone",
        orientation: "portrait-primary",
        background_color: business.background_color,
        theme_color: business.theme_color,
        lang: "en",
        categories: vec!["business", "construction"],
        icons: ICONS.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::BUSINESS;

    #[test]
    fn test_manifest_json_shape() {
        let json = serde_json::to_value(web_manifest(&BUSINESS)).unwrap();
        assert_eq!(json["name"], BUSINESS.name);
        assert_eq!(json["short_name"], BUSINESS.short_name);
        assert_eq!(json["theme_color"], BUSINESS.theme_color);
        assert_eq!(json["start_url"], "/");
        assert_eq!(json["icons"][0]["type"], "image/png");
        assert!(json["icons"][0].get("purpose").is_none());
        assert_eq!(json["icons"][2]["purpose"], "maskable");
    }
}
