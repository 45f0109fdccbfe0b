//! Routed pages
//!
//! - Landing page (home)
//! - Not found (404)

mod landing;
mod not_found;

pub use landing::LandingPage;
pub use not_found::NotFoundPage;
