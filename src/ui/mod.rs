pub mod icon;
pub mod in_view;
pub mod landing;
pub mod motion;
pub mod pages;

pub use icon::{Icon, icons};
pub use pages::{LandingPage, NotFoundPage};
