// =============================================================================
// CS:GO Pro Web - Footer Component
// =============================================================================
// Brand blurb, social links, in-page quick links and resource links.
// =============================================================================

use leptos::prelude::*;

use super::nav::{Logo, NavLink};
use super::Icon;
use crate::interaction::NavTarget;

// -----------------------------------------------------------------------------
// Footer Component
// -----------------------------------------------------------------------------

/// Page footer.
#[component]
pub fn Footer(
    socials: Vec<String>,
    quick_links: Vec<String>,
    resources: Vec<String>,
) -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="container">
                <div class="footer-main">
                    // Brand Column
                    <div class="footer-brand-col">
                        <Logo />
                        <p class="footer-tagline">
                            "Your ultimate destination for Counter-Strike news, tournaments, teams, and player statistics. Stay connected with the competitive scene."
                        </p>
                        <div class="footer-social-row">
                            {socials
                                .into_iter()
                                .map(|social| {
                                    let title = social.clone();
                                    view! {
                                        <a href="#" class="social-link" title=title>
                                            <Icon name=social size=20 />
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    // Quick links scroll in-page; anchors missing from the page do nothing
                    <div class="footer-link-col">
                        <h4 class="footer-col-title">"Quick Links"</h4>
                        <ul>
                            {quick_links
                                .into_iter()
                                .map(|label| view! {
                                    <li>
                                        <NavLink target=NavTarget::from_label(&label) class="footer-link" />
                                    </li>
                                })
                                .collect_view()}
                        </ul>
                    </div>

                    <div class="footer-link-col">
                        <h4 class="footer-col-title">"Resources"</h4>
                        <ul>
                            {resources
                                .into_iter()
                                .map(|label| view! {
                                    <li><a href="#" class="footer-link">{label}</a></li>
                                })
                                .collect_view()}
                        </ul>
                    </div>
                </div>

                <div class="footer-bottom-bar">
                    <p class="footer-copyright">
                        "© 2024 CS:GO Pro. All rights reserved. Not affiliated with Valve Corporation."
                    </p>
                    <div class="footer-made-with">
                        <span>"Made with"</span>
                        <Icon name="heart" size=16 class="heart" />
                        <span>"for the CS community"</span>
                    </div>
                </div>
            </div>
        </footer>
    }
}
