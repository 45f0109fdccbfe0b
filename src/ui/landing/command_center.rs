use leptos::prelude::*;

use crate::core::content::{ALERTS, Alert, Anchor, COMMAND_FEATURES, COMMAND_TABS};
use crate::core::motion::{FADE_IN_UP, SCALE_IN, STAGGER};
use crate::core::visibility::InViewOptions;
use crate::ui::icon::{Icon, icons};
use crate::ui::in_view::use_in_view;
use crate::ui::motion::Reveal;

const MAP_DOTS: usize = 4;

/// Security operations center showcase with a live-dashboard mock
#[component]
pub fn CommandCenterSection() -> impl IntoView {
    let (section_ref, in_view) = use_in_view(InViewOptions::default());

    view! {
        <section class="command-section" id=Anchor::CommandCenter.id() node_ref=section_ref>
            <div class="command-bg"></div>

            <div class="command-content">
                <Reveal preset=FADE_IN_UP shown=in_view delay_ms=STAGGER.delay(0) class="command-text">
                    <span class="section-badge">
                        <Icon name=icons::TARGET size=16 />
                        "Security Operations Center"
                    </span>
                    <h2>"Your Command Center for Mission-Critical Security"</h2>
                    <p>
                        "A unified interface that brings together live alerts, patrol tracking, "
                        "incident management, and intelligent dispatch operations."
                    </p>

                    <CommandFeatureList shown=in_view />

                    <a href=Anchor::Demo.href() class="btn btn-primary">
                        "See SOC in Action"
                        <Icon name=icons::CHEVRON_RIGHT />
                    </a>
                </Reveal>

                <Reveal preset=SCALE_IN shown=in_view delay_ms=STAGGER.delay(1) class="command-visual">
                    <CommandDashboard />
                </Reveal>
            </div>
        </section>
    }
}

/// Feature rows inside the text column. They enter together with it.
#[component]
fn CommandFeatureList(#[prop(into)] shown: Signal<bool>) -> impl IntoView {
    view! {
        <div class="command-features">
            {COMMAND_FEATURES
                .iter()
                .map(|feature| {
                    view! {
                        <Reveal
                            preset=FADE_IN_UP
                            shown=shown
                            delay_ms=STAGGER.delay(0)
                            class="command-feature"
                        >
                            <div class="command-feature-icon">
                                <Icon name=feature.icon />
                            </div>
                            <div>
                                <h4>{feature.title}</h4>
                                <p>{feature.description}</p>
                            </div>
                        </Reveal>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn CommandDashboard() -> impl IntoView {
    view! {
        <div class="command-dashboard">
            <div class="command-dashboard-header">
                <div class="command-dashboard-tabs">
                    {COMMAND_TABS
                        .iter()
                        .enumerate()
                        .map(|(i, tab)| {
                            let class = if i == 0 { "command-tab active" } else { "command-tab" };
                            view! { <button type="button" class=class>{*tab}</button> }
                        })
                        .collect_view()}
                </div>
                <div class="dashboard-status">
                    <span class="dashboard-status-dot"></span>
                    "Live"
                </div>
            </div>

            <div class="command-dashboard-content">
                <div class="command-map-container">
                    <div class="command-map-grid"></div>
                    <div class="map-dots">
                        {(0..MAP_DOTS).map(|_| view! { <div class="map-dot"></div> }).collect_view()}
                    </div>
                </div>

                <div class="command-alerts">
                    {ALERTS.iter().map(|alert| view! { <AlertRow alert=*alert /> }).collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn AlertRow(alert: Alert) -> impl IntoView {
    view! {
        <div class="command-alert">
            <div class=format!("command-alert-icon {}", alert.severity.class())>
                <Icon name=alert.icon size=16 />
            </div>
            <div class="command-alert-text">
                <h5>{alert.title}</h5>
                <p>{alert.description}</p>
            </div>
        </div>
    }
}
