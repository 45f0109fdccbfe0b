use leptos::prelude::*;

use crate::core::content::{Anchor, PRICING_PLANS, Price, PricingPlan};
use crate::core::motion::{FADE_IN_UP, STAGGER};
use crate::core::visibility::InViewOptions;
use crate::ui::icon::{Icon, icons};
use crate::ui::in_view::use_in_view;
use crate::ui::landing::SectionHeader;
use crate::ui::motion::Reveal;

/// Plan comparison
#[component]
pub fn PricingSection() -> impl IntoView {
    let (section_ref, in_view) = use_in_view(InViewOptions::default());

    view! {
        <section class="pricing-section" id=Anchor::Pricing.id() node_ref=section_ref>
            <SectionHeader
                badge_icon=icons::AWARD
                badge="Pricing Plans"
                title="Choose the Right Plan for Your Operations"
                subtitle="Flexible pricing that scales with your security workforce. Start free, upgrade anytime."
                shown=in_view
            />

            <div class="pricing-grid">
                {PRICING_PLANS
                    .iter()
                    .enumerate()
                    .map(|(i, plan)| {
                        view! { <PricingCard plan=*plan shown=in_view delay_ms=STAGGER.delay(i) /> }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn PricingCard(plan: PricingPlan, shown: Signal<bool>, delay_ms: u32) -> impl IntoView {
    view! {
        <Reveal preset=FADE_IN_UP shown=shown delay_ms=delay_ms class=plan.card_class()>
            {plan.featured.then(|| view! { <span class="pricing-badge">"Most Popular"</span> })}

            <div class="pricing-header">
                <h3>{plan.name}</h3>
                <p>{plan.description}</p>
                <div class="pricing-price">
                    <PriceTag price=plan.price />
                </div>
            </div>

            <ul class="pricing-features">
                {plan
                    .features
                    .iter()
                    .map(|feature| {
                        view! {
                            <li>
                                <Icon name=icons::CHECK_CIRCLE size=18 />
                                {*feature}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>

            <a href=Anchor::Trial.href() class=plan.button_class()>
                {plan.price.cta_label()}
            </a>
        </Reveal>
    }
}

/// `$<amount>/mo`, or the bare word "Custom" for negotiated plans
#[component]
fn PriceTag(price: Price) -> impl IntoView {
    match price {
        Price::Custom => view! { <span class="amount">{price.amount()}</span> }.into_any(),
        Price::Monthly(amount) => view! {
            <span class="currency">"$"</span>
            <span class="amount">{amount}</span>
            <span class="period">"/mo"</span>
        }
        .into_any(),
    }
}
