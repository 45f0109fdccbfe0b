//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::ui::icon::{Icon, icons};
use crate::ui::landing::Logo;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    // Report the status to the server integration when rendering on the server
    #[cfg(feature = "ssr")]
    if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
        response.set_status(axum::http::StatusCode::NOT_FOUND);
    }

    view! {
        <Title text="Page Not Found - IRA FORCE" />

        <div class="not-found">
            <div class="logo">
                <Logo />
            </div>

            <h1>"404"</h1>
            <h2>"Page Not Found"</h2>
            <p>"The page you're looking for doesn't exist or has been moved."</p>

            <A href="/" attr:class="btn btn-primary">
                "Back to Home"
                <Icon name=icons::ARROW_RIGHT />
            </A>
        </div>
    }
}
