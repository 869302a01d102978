// =============================================================================
// CS:GO Pro Web - Hero Section
// =============================================================================

use leptos::prelude::*;

use super::{Button, ButtonVariant, Icon};
use crate::content::HeroStat;
use crate::host::BrowserHost;
use crate::interaction::{NavTarget, SectionId};
use crate::state::PageState;

const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1542751371-adc38448a05e?w=1920&q=80";

/// Full-height banner. Animates in on load rather than on viewport entry.
#[component]
pub fn HeroSection(stats: Vec<HeroStat>) -> impl IntoView {
    let state = expect_context::<PageState>();

    let go_to = move |label: &'static str, section: SectionId| {
        Callback::new(move |_: ()| {
            state.navigate(&BrowserHost, &NavTarget::section(label, section));
        })
    };

    view! {
        <section id=SectionId::Hero.anchor() class="hero">
            <div class="hero-bg">
                <img src=HERO_IMAGE alt="CS:GO Gaming" class="hero-bg-image" />
                <div class="hero-shade hero-shade-vertical"></div>
                <div class="hero-shade hero-shade-horizontal"></div>
                <div class="glow-orb glow-1"></div>
                <div class="glow-orb glow-2"></div>
            </div>

            <div class="hero-content enter-up">
                <div class="live-badge enter-scale">
                    <span class="live-dot"></span>
                    <span>"Major Championship Live"</span>
                </div>

                <h1 class="hero-title">
                    "COUNTER"<span class="text-gradient">"STRIKE"</span>
                </h1>
                <p class="hero-subtitle">"Global Offensive"</p>
                <p class="hero-description">
                    "The world's premier competitive first-person shooter. Join millions of players in the ultimate test of skill, strategy, and teamwork."
                </p>

                <div class="hero-buttons">
                    <Button
                        label="View Tournaments"
                        icon="trophy"
                        on_click=go_to("Tournaments", SectionId::Tournaments)
                    />
                    <Button
                        label="Explore Teams"
                        icon="users"
                        variant=ButtonVariant::Secondary
                        on_click=go_to("Teams", SectionId::Teams)
                    />
                </div>

                <div class="hero-stats enter-up-delayed">
                    {stats
                        .into_iter()
                        .map(|stat| view! {
                            <div class="hero-stat">
                                <div class="hero-stat-value">{stat.value}</div>
                                <div class="hero-stat-label">{stat.label}</div>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="scroll-indicator">
                <Icon name="chevron-down" size=32 />
            </div>
        </section>
    }
}
