use leptos::prelude::*;

use crate::core::content::{Anchor, DASHBOARD_CARDS, FLOATING_BADGES, HERO_STATS};
use crate::core::motion::{FADE_IN_DOWN, FADE_IN_UP, FLOAT_LOOPS, HERO_VISUAL, STAGGER};
use crate::ui::icon::{Icon, icons};
use crate::ui::motion::{Entrance, Floating};

/// Number of activity dots on the hero map mock
const MAP_DOTS: usize = 5;

/// First screen: plays its entrance on load, no viewport gating
#[component]
pub fn HeroSection() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero-bg"></div>
            <div class="hero-grid"></div>

            <div class="hero-content">
                <div class="hero-text">
                    <Entrance preset=FADE_IN_DOWN delay_ms=STAGGER.delay(0) class="hero-badge">
                        <span class="hero-badge-dot"></span>
                        "Trusted by 500+ Security Companies Nationwide"
                    </Entrance>

                    <h1 style=FADE_IN_UP.animation(STAGGER.delay(1))>
                        "Command Your Security Operations with Precision"
                    </h1>

                    <p class="hero-subtitle" style=FADE_IN_UP.animation(STAGGER.delay(2))>
                        "The enterprise-grade workforce management platform built for modern security operations. "
                        "Real-time tracking, intelligent dispatch, and comprehensive compliance—all in one powerful system."
                    </p>

                    <Entrance preset=FADE_IN_UP delay_ms=STAGGER.delay(3) class="hero-buttons">
                        <a href=Anchor::Trial.href() class="btn btn-primary btn-lg">
                            "Start Free Trial"
                            <Icon name=icons::ARROW_RIGHT />
                        </a>
                        <a href=Anchor::Demo.href() class="btn btn-secondary btn-lg">
                            <Icon name=icons::PLAY />
                            "Watch Demo"
                        </a>
                    </Entrance>

                    <Entrance preset=FADE_IN_UP delay_ms=STAGGER.delay(4) class="hero-stats">
                        {HERO_STATS
                            .iter()
                            .map(|stat| {
                                view! {
                                    <div class="hero-stat">
                                        <div class="hero-stat-value">{stat.value}</div>
                                        <div class="hero-stat-label">{stat.label}</div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </Entrance>
                </div>

                <Entrance preset=HERO_VISUAL class="hero-visual">
                    <HeroDashboard />
                    {FLOATING_BADGES
                        .iter()
                        .zip(FLOAT_LOOPS)
                        .enumerate()
                        .map(|(i, (badge, float))| {
                            view! {
                                <Floating
                                    float=float
                                    class=format!("floating-badge floating-badge-{}", i + 1)
                                >
                                    <div class="floating-badge-icon">
                                        <Icon name=badge.icon size=18 />
                                    </div>
                                    <div class="floating-badge-text">
                                        <h5>{badge.title}</h5>
                                        <p>{badge.detail}</p>
                                    </div>
                                </Floating>
                            }
                        })
                        .collect_view()}
                </Entrance>
            </div>
        </section>
    }
}

/// Static command center mock beside the hero copy
#[component]
fn HeroDashboard() -> impl IntoView {
    view! {
        <div class="hero-dashboard">
            <div class="dashboard-header">
                <div class="dashboard-title">
                    <div class="dashboard-title-icon">
                        <Icon name=icons::ACTIVITY />
                    </div>
                    <h4>"Command Center"</h4>
                </div>
                <div class="dashboard-status">
                    <span class="dashboard-status-dot"></span>
                    "All Systems Operational"
                </div>
            </div>

            <div class="dashboard-grid">
                {DASHBOARD_CARDS
                    .iter()
                    .map(|card| {
                        view! {
                            <div class="dashboard-card">
                                <div class="dashboard-card-icon">
                                    <Icon name=card.icon size=18 />
                                </div>
                                <h5>{card.value}</h5>
                                <p>{card.label}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="dashboard-map">
                <div class="map-grid"></div>
                <div class="map-dots">
                    {(0..MAP_DOTS).map(|_| view! { <div class="map-dot"></div> }).collect_view()}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::landing::render_html;

    #[test]
    fn test_entrance_order_is_staggered() {
        let html = render_html(|| view! { <HeroSection /> });
        let badge = html.find("motion-fade-in-down 600ms").unwrap();
        let headline = html.find("motion-fade-in-up 600ms cubic-bezier(0.25, 0.46, 0.45, 0.94) 300ms").unwrap();
        let stats = html.find("600ms cubic-bezier(0.25, 0.46, 0.45, 0.94) 600ms").unwrap();
        assert!(badge < headline && headline < stats);
        assert!(html.contains("motion-fade-in-down 600ms cubic-bezier(0.25, 0.46, 0.45, 0.94) 200ms"));
    }

    #[test]
    fn test_headline_and_subtitle_animate_themselves() {
        let html = render_html(|| view! { <HeroSection /> });
        assert!(html.contains("<h1 style=\"animation: motion-fade-in-up 600ms"));
        assert!(html.contains("<p class=\"hero-subtitle\" style=\"animation: motion-fade-in-up 600ms"));
        assert!(!html.contains("<div class=\"hero-subtitle\""));
    }

    #[test]
    fn test_hero_is_never_scroll_gated() {
        let html = render_html(|| view! { <HeroSection /> });
        assert!(!html.contains("class=\"reveal"));
        assert!(!html.contains("opacity: 0;"));
    }

    #[test]
    fn test_two_floating_badges_with_distinct_loops() {
        let html = render_html(|| view! { <HeroSection /> });
        assert!(html.contains("floating-badge floating-badge-1"));
        assert!(html.contains("floating-badge floating-badge-2"));
        assert!(html.contains("float-primary 4000ms ease-in-out 0ms infinite"));
        assert!(html.contains("float-secondary 5000ms ease-in-out 1000ms infinite"));
    }

    #[test]
    fn test_dashboard_mock() {
        let html = render_html(|| view! { <HeroSection /> });
        assert_eq!(html.matches("class=\"dashboard-card\"").count(), 3);
        assert_eq!(html.matches("class=\"map-dot\"").count(), MAP_DOTS);
        assert_eq!(html.matches("class=\"hero-stat\"").count(), 3);
    }
}
