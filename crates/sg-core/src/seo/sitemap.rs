//! sitemap.xml and robots.txt

use chrono::NaiveDate;

use super::PageMeta;
use crate::config::SiteConfig;

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

pub fn sitemap_xml(pages: &[PageMeta], config: &SiteConfig, last_modified: NaiveDate) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );

    for page in pages {
        xml.push_str("  <url>\n");
        xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&page.canonical(config))));
        xml.push_str(&format!("    <lastmod>{}</lastmod>\n", last_modified.format("%Y-%m-%d")));
        xml.push_str("    <changefreq>monthly</changefreq>\n");
        xml.push_str(&format!("    <priority>{:.1}</priority>\n", page.priority));
        xml.push_str("  </url>\n");
    }

    xml.push_str("</urlset>\n");
    xml
}

pub fn robots_txt(config: &SiteConfig) -> String {
    format!(
        "User-agent: *\nAllow: /\nDisallow: /pkg/\n\nSitemap: {}\n",
        config.absolute("/sitemap.xml")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seo::PAGES;

    fn config() -> SiteConfig {
        SiteConfig {
            site_url: "https://example.com".to_string(),
            ..SiteConfig::default()
        }
    }

    #[test]
    fn test_sitemap_lists_every_page() {
        let date = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
        let xml = sitemap_xml(PAGES, &config(), date);
        assert_eq!(xml.matches("<url>").count(), PAGES.len());
        assert!(xml.contains("<loc>https://example.com/portfolio</loc>"));
        assert!(xml.contains("<lastmod>2024-07-01</lastmod>"));
        assert!(xml.contains("<priority>1.0</priority>"));
    }

    #[test]
    fn test_robots_points_at_sitemap() {
        assert!(robots_txt(&config()).contains("Sitemap: https://example.com/sitemap.xml"));
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a&b<c>"), "a&amp;b&lt;c&gt;");
    }
}
