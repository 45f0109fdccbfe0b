//! Landing page
//!
//! Document metadata (title, social cards, JSON-LD), the motion stylesheet
//! and the page body.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::core::seo::{PAGE_DESCRIPTION, PAGE_KEYWORDS, PAGE_TITLE, structured_data};
use crate::ui::landing::LandingLayout;
use crate::ui::motion::MotionStyles;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <SeoMeta />
        <MotionStyles />
        <LandingLayout />
    }
}

/// SEO meta tags for the landing page
#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        // Page title
        <Title text=PAGE_TITLE />

        // Basic meta tags
        <Meta name="description" content=PAGE_DESCRIPTION />
        <Meta name="keywords" content=PAGE_KEYWORDS />

        // Open Graph
        <Meta property="og:type" content="website" />
        <Meta property="og:title" content=PAGE_TITLE />
        <Meta property="og:description" content=PAGE_DESCRIPTION />

        // Twitter
        <Meta property="twitter:card" content="summary_large_image" />
        <Meta property="twitter:title" content=PAGE_TITLE />
        <Meta property="twitter:description" content=PAGE_DESCRIPTION />

        <script type="application/ld+json" inner_html=structured_data().to_string()></script>
    }
}
