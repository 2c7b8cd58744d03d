//! Site pages, one per route

mod about;
mod contact;
mod home;
mod not_found;
mod portfolio;
mod services;

pub use about::AboutPage;
pub use contact::ContactPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use portfolio::PortfolioPage;
pub use services::ServicesPage;
