//! Skyline Signs core library
//!
//! Static business data, the view-state machines behind the gallery,
//! carousel and slider components, and the SEO emitters shared by the
//! site server and the export CLI.

pub mod carousel;
pub mod config;
pub mod contact;
pub mod filter;
pub mod fixtures;
pub mod gallery;
pub mod image;
pub mod model;
pub mod redirects;
pub mod report;
pub mod seo;
pub mod slider;

use thiserror::Error;

pub use carousel::{Carousel, KeyOutcome, NavKey};
pub use config::SiteConfig;
pub use filter::{filter_by_category, CategoryFilter, Categorized};
pub use gallery::Gallery;
pub use image::{ImageState, ImageStatus};
pub use model::{
    BusinessInfo, NavigationItem, Project, ProjectCategory, Service, ServiceCategory,
    ServiceCategoryId, Testimonial,
};
pub use report::{ErrorReport, ErrorReporter, ErrorSource};
pub use slider::{AutoPlay, CancelTimer, TimerGuard};

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Fixture error: {0}")]
    Fixture(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
