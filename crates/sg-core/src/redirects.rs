//! Fixed path redirects for legacy and alternate URLs

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Redirect {
    pub from: &'static str,
    pub to: &'static str,
    pub permanent: bool,
}

pub const REDIRECTS: &[Redirect] = &[
    Redirect { from: "/home", to: "/", permanent: true },
    Redirect { from: "/index.html", to: "/", permanent: true },
    Redirect { from: "/about-us", to: "/about", permanent: true },
    Redirect { from: "/our-services", to: "/services", permanent: true },
    Redirect { from: "/projects", to: "/portfolio", permanent: true },
    Redirect { from: "/gallery", to: "/portfolio", permanent: true },
    Redirect { from: "/contact-us", to: "/contact", permanent: true },
];

/// Routes served by the site
pub const ROUTES: &[&str] = &["/", "/about", "/services", "/portfolio", "/contact"];

/// Look up a redirect for `path`, ignoring one trailing slash
pub fn resolve(path: &str) -> Option<&'static Redirect> {
    let normalized = if path.len() > 1 {
        path.strip_suffix('/').unwrap_or(path)
    } else {
        path
    };
    REDIRECTS
        .iter()
        .find(|r| r.from.eq_ignore_ascii_case(normalized))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_resolve_known_paths() {
        assert_eq!(resolve("/projects").map(|r| r.to), Some("/portfolio"));
        assert_eq!(resolve("/contact-us/").map(|r| r.to), Some("/contact"));
        assert_eq!(resolve("/Home").map(|r| r.to), Some("/"));
    }

    #[test]
    fn test_routes_are_not_redirected() {
        for route in ROUTES {
            assert!(resolve(route).is_none(), "{}", route);
        }
        assert!(resolve("/portfolio/").is_none());
    }

    #[test]
    fn test_targets_are_routes() {
        for redirect in REDIRECTS {
            assert!(ROUTES.contains(&redirect.to), "{} -> {}", redirect.from, redirect.to);
        }
    }

    #[test]
    fn test_sources_unique() {
        let sources: HashSet<_> = REDIRECTS.iter().map(|r| r.from).collect();
        assert_eq!(sources.len(), REDIRECTS.len());
    }
}
