//! Platform-independent page model: copy, motion presets, visibility and
//! navbar state, SEO metadata, and server configuration

#[cfg(feature = "ssr")]
pub mod config;
pub mod content;
pub mod motion;
pub mod navbar;
pub mod seo;
pub mod visibility;
#[cfg(test)]
mod tests;
