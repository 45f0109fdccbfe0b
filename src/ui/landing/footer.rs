use leptos::prelude::*;

use crate::core::content::{COPYRIGHT, FOOTER_COLUMNS, LEGAL_LINKS, SOCIAL_LINKS};
use crate::ui::icon::Icon;
use crate::ui::landing::navbar::Logo;

/// Site footer. Links are placeholders until the pages they name exist.
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer-content">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <div class="logo">
                            <Logo />
                        </div>
                        <p>
                            "Enterprise-grade security workforce management platform trusted by leading "
                            "security companies nationwide."
                        </p>
                        <div class="footer-social">
                            {SOCIAL_LINKS
                                .iter()
                                .map(|social| {
                                    view! {
                                        <a href="#" aria-label=social.label>
                                            <Icon name=social.icon />
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    {FOOTER_COLUMNS
                        .iter()
                        .map(|column| {
                            view! {
                                <div class="footer-column">
                                    <h4>{column.heading}</h4>
                                    <ul>
                                        {column
                                            .links
                                            .iter()
                                            .map(|label| view! { <li><a href="#">{*label}</a></li> })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="footer-bottom">
                    <p>{COPYRIGHT}</p>
                    <div class="footer-legal">
                        {LEGAL_LINKS
                            .iter()
                            .map(|label| view! { <a href="#">{*label}</a> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </footer>
    }
}
