//! Skyline Signs site CLI

use clap::{Parser, Subcommand};
use serde_json::Value;
use sg_core::fixtures::{self, BUSINESS, PROJECTS, SERVICES, SERVICE_CATEGORIES};
use sg_core::seo::{jsonld, manifest::web_manifest, sitemap, PAGES};
use sg_core::{filter_by_category, redirects, CategoryFilter, CoreResult, ProjectCategory, SiteConfig};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "sg")]
#[command(about = "Skyline Signs site tools")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write manifest, sitemap, robots.txt and JSON-LD documents
    Export {
        /// Output directory
        #[arg(short, long, default_value = "dist")]
        out: PathBuf,
    },

    /// Check fixtures and configuration
    Validate,

    /// Print the legacy redirect table
    Redirects,

    /// List portfolio projects
    Projects {
        /// Category filter (all, signboard, contracting, both)
        #[arg(short, long, default_value = "all")]
        category: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set subscriber: {}", e);
    }

    let config = SiteConfig::default();
    let result = match cli.command {
        Commands::Export { out } => cmd_export(&config, &out),
        Commands::Validate => cmd_validate(&config),
        Commands::Redirects => {
            cmd_redirects();
            Ok(())
        }
        Commands::Projects { category } => cmd_projects(&category),
    };

    if let Err(e) = result {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn write_json(path: &Path, value: &Value) -> CoreResult<()> {
    fs::write(path, serde_json::to_string_pretty(value)?)?;
    Ok(())
}

/// Latest project completion date, used as the sitemap `lastmod`
fn last_modified() -> chrono::NaiveDate {
    PROJECTS
        .iter()
        .map(|p| p.completed_on)
        .max()
        .unwrap_or_else(|| chrono::Utc::now().date_naive())
}

fn cmd_export(config: &SiteConfig, out: &Path) -> CoreResult<()> {
    config.validate()?;
    fixtures::validate()?;

    let jsonld_dir = out.join("jsonld");
    fs::create_dir_all(&jsonld_dir)?;

    let manifest = serde_json::to_value(web_manifest(&BUSINESS))?;
    write_json(&out.join("manifest.json"), &manifest)?;
    fs::write(out.join("sitemap.xml"), sitemap::sitemap_xml(PAGES, config, last_modified()))?;
    fs::write(out.join("robots.txt"), sitemap::robots_txt(config))?;

    let documents = [
        ("organization", jsonld::organization(&BUSINESS, config)),
        ("local_business", jsonld::local_business(&BUSINESS, config)),
        ("website", jsonld::website(&BUSINESS, config)),
        (
            "services",
            jsonld::service_catalog(&BUSINESS, &SERVICE_CATEGORIES, &SERVICES, config),
        ),
    ];
    for (name, document) in &documents {
        write_json(&jsonld_dir.join(format!("{}.json", name)), document)?;
    }

    info!("Exported SEO files to {}", out.display());
    Ok(())
}

fn cmd_validate(config: &SiteConfig) -> CoreResult<()> {
    config.validate()?;
    fixtures::validate()?;
    println!(
        "OK: {} projects, {} services, {} pages, {} redirects",
        PROJECTS.len(),
        SERVICES.len(),
        PAGES.len(),
        redirects::REDIRECTS.len()
    );
    Ok(())
}

fn cmd_redirects() {
    println!("\nRedirects\n{}", "=".repeat(50));
    for redirect in redirects::REDIRECTS {
        let code = if redirect.permanent { 308 } else { 307 };
        println!("  {:<20} -> {:<12} {}", redirect.from, redirect.to, code);
    }
}

fn cmd_projects(category: &str) -> CoreResult<()> {
    let filter: CategoryFilter<ProjectCategory> = category.parse()?;
    let projects = filter_by_category(PROJECTS.as_slice(), filter);

    println!("\nProjects ({})\n{}", filter, "=".repeat(50));
    for project in &projects {
        let marker = if project.featured { "*" } else { " " };
        println!(
            "{} {:<32} {:<12} {}",
            marker,
            project.id,
            project.category.label(),
            project.completed_on
        );
    }
    println!("\n{} project(s)", projects.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SiteConfig {
        SiteConfig {
            site_url: "https://example.com".to_string(),
            ..SiteConfig::default()
        }
    }

    #[test]
    fn test_export_writes_all_files() {
        let dir = tempfile::tempdir().unwrap();
        cmd_export(&config(), dir.path()).unwrap();

        for file in ["manifest.json", "sitemap.xml", "robots.txt"] {
            assert!(dir.path().join(file).exists(), "missing {}", file);
        }
        for name in ["organization", "local_business", "website", "services"] {
            let path = dir.path().join("jsonld").join(format!("{}.json", name));
            let value: Value = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
            assert_eq!(value["@context"], "https://schema.org");
        }

        let sitemap = fs::read_to_string(dir.path().join("sitemap.xml")).unwrap();
        assert!(sitemap.contains("https://example.com/portfolio"));
    }

    #[test]
    fn test_export_rejects_bad_config() {
        let dir = tempfile::tempdir().unwrap();
        let bad = SiteConfig {
            site_url: "ftp://example.com".to_string(),
            ..SiteConfig::default()
        };
        assert!(cmd_export(&bad, dir.path()).is_err());
        assert!(!dir.path().join("manifest.json").exists());
    }

    #[test]
    fn test_projects_category_parsing() {
        assert!(cmd_projects("signboard").is_ok());
        assert!(cmd_projects("ALL").is_ok());
        assert!(cmd_projects("bridges").is_err());
    }

    #[test]
    fn test_last_modified_is_latest_completion() {
        let latest = last_modified();
        assert!(PROJECTS.iter().all(|p| p.completed_on <= latest));
    }

    #[test]
    fn test_cli_parses_export() {
        let cli = Cli::try_parse_from(["sg", "export", "--out", "public"]).unwrap();
        match cli.command {
            Commands::Export { out } => assert_eq!(out, PathBuf::from("public")),
            _ => panic!("expected export"),
        }
    }
}
