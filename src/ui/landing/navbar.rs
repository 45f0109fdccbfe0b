use leptos::prelude::*;

use crate::core::content::{Anchor, BRAND_PRIMARY, BRAND_SECONDARY, NAV_LINKS};
use crate::core::motion::NAVBAR_SLIDE;
use crate::core::navbar::NavbarState;
use crate::ui::icon::{Icon, icons};

/// Fixed navigation bar with scroll-aware styling and a mobile menu
#[component]
pub fn Navbar() -> impl IntoView {
    let state = RwSignal::new(NavbarState::default());

    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::scroll;

        let sync_scroll = move || {
            if let Some(offset) = web_sys::window().and_then(|w| w.scroll_y().ok()) {
                state.maybe_update(|s| s.on_scroll(offset));
            }
        };

        // A reload may restore the page mid-scroll
        Effect::new(move |_| sync_scroll());

        let handle_scroll = window_event_listener(scroll, move |_| sync_scroll());
        on_cleanup(move || drop(handle_scroll));
    }

    let close_menu = move |_| {
        state.maybe_update(|s| s.close_menu());
    };

    view! {
        <nav
            class=move || state.with(|s| s.nav_class())
            style=NAVBAR_SLIDE.animation(0)
        >
            <div class="navbar-content">
                <a href="#" class="logo">
                    <Logo />
                </a>

                <ul class="nav-links">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <li>
                                    <a href=link.anchor.href()>{link.label}</a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>

                <div class="nav-cta">
                    <a href=Anchor::Demo.href() class="btn btn-secondary">
                        "Watch Demo"
                    </a>
                    <a href=Anchor::Trial.href() class="btn btn-primary">
                        "Start Free Trial"
                    </a>
                </div>

                <MobileToggle state=state />
            </div>

            // Mobile menu
            <div id="mobile-menu" class=move || state.with(|s| s.mobile_menu_class())>
                <ul>
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <li>
                                    <a href=link.anchor.href() on:click=close_menu>
                                        {link.label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <div class="mobile-menu-cta">
                    <a href=Anchor::Demo.href() class="btn btn-secondary" on:click=close_menu>
                        "Watch Demo"
                    </a>
                    <a href=Anchor::Trial.href() class="btn btn-primary" on:click=close_menu>
                        "Start Free Trial"
                    </a>
                </div>
            </div>
        </nav>
    }
}

#[component]
fn MobileToggle(state: RwSignal<NavbarState>) -> impl IntoView {
    view! {
        <button
            type="button"
            class="mobile-toggle"
            aria-label="Toggle navigation menu"
            aria-controls="mobile-menu"
            aria-expanded=move || state.with(|s| s.aria_expanded())
            on:click=move |_| state.update(|s| s.toggle_menu())
        >
            {move || view! { <Icon name=state.with(|s| s.toggle_icon()) size=24 /> }}
        </button>
    }
}

/// Shield mark with the two-tone wordmark
#[component]
pub fn Logo() -> impl IntoView {
    view! {
        <div class="logo-icon">
            <Icon name=icons::SHIELD size=24 />
        </div>
        <div class="logo-text">
            <span>{BRAND_PRIMARY}</span>
            <span>{BRAND_SECONDARY}</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::landing::render_html;

    #[test]
    fn test_initial_render_closed_and_transparent() {
        let html = render_html(|| view! { <Navbar /> });
        assert!(html.contains("class=\"navbar\""));
        assert!(html.contains("class=\"mobile-menu\""));
        assert!(html.contains("aria-expanded=\"false\""));
        assert!(html.contains("/icons/menu.svg"));
        assert!(!html.contains("/icons/x.svg"));
    }

    #[test]
    fn test_open_toggle_shows_close_icon() {
        let html = render_html(|| {
            let state = RwSignal::new(NavbarState::default());
            state.update(|s| s.toggle_menu());
            view! { <MobileToggle state=state /> }
        });
        assert!(html.contains("aria-expanded=\"true\""));
        assert!(html.contains("/icons/x.svg"));
        assert!(!html.contains("/icons/menu.svg"));
    }

    #[test]
    fn test_links_rendered_in_both_menus() {
        let html = render_html(|| view! { <Navbar /> });
        for link in NAV_LINKS {
            assert_eq!(
                html.matches(&format!("href=\"{}\"", link.anchor.href())).count(),
                2,
                "{}",
                link.label
            );
        }
        assert_eq!(html.matches("href=\"#trial\"").count(), 2);
        assert_eq!(html.matches("href=\"#demo\"").count(), 2);
    }
}
