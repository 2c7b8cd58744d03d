//! Reusable components

mod cards;
mod error;
mod footer;
mod gallery;
mod hero;
mod image;
mod modal;
mod nav;
mod noscript;
mod seo;
mod slider;

pub use cards::*;
pub use error::ErrorFallback;
pub use footer::Footer;
pub use gallery::ProjectGallery;
pub use hero::{CallToAction, Hero, PageHeader};
pub use image::FallbackImage;
pub use modal::ProjectModal;
pub use nav::SiteNav;
pub use noscript::NoScriptFallback;
pub use seo::{JsonLd, PageSeo};
pub use slider::{use_autoplay, HeroSlider, TestimonialSlider};
